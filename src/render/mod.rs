mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod palette;
mod primitives;

pub use frame::{FrameBand, RenderFrame};
pub use layer_stack::CanvasLayerKind;
pub use layered_frame::{LayerPrimitives, LayeredRenderFrame};
pub use null_renderer::NullRenderer;
pub use palette::CategoryColorMap;
pub use primitives::{
    Color, LineDash, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
    estimate_text_width_px,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart data and selection logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
