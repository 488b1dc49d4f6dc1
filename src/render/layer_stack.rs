use serde::{Deserialize, Serialize};

/// Draw layers, listed bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Series,
    Axis,
    Overlay,
}

impl CanvasLayerKind {
    #[must_use]
    pub const fn canonical_order() -> [Self; 4] {
        [Self::Background, Self::Series, Self::Axis, Self::Overlay]
    }
}
