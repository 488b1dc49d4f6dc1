use crate::core::Viewport;
use crate::error::ChartResult;

use super::{CanvasLayerKind, LinePrimitive, RectPrimitive, RenderFrame, TextPrimitive};

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}

/// Frame split into independently rebuildable layers.
///
/// Selection changes only replace the overlay layer; everything below it can
/// be reused from the previous pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::canonical_order()
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.rects.push(rect);
        }
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }

    /// Swaps in a rebuilt layer of the same kind.
    pub fn replace_layer(&mut self, replacement: LayerPrimitives) {
        if let Some(layer) = self.layer_mut(replacement.kind) {
            *layer = replacement;
        }
    }

    /// Flattens layers bottom to top, one frame band per layer.
    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            frame.push_layer(layer);
        }
        frame
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.flatten().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{LayerPrimitives, LayeredRenderFrame};
    use crate::core::Viewport;
    use crate::render::{CanvasLayerKind, Color, RectPrimitive};

    #[test]
    fn replacing_overlay_keeps_other_layers() {
        let mut frame = LayeredRenderFrame::new(Viewport::new(200, 100));
        frame.push_rect(
            CanvasLayerKind::Series,
            RectPrimitive::new(0.0, 0.0, 10.0, 10.0, Color::RED),
        );
        frame.push_rect(
            CanvasLayerKind::Overlay,
            RectPrimitive::new(5.0, 5.0, 10.0, 10.0, Color::WHITE),
        );

        frame.replace_layer(LayerPrimitives::empty(CanvasLayerKind::Overlay));

        let flat = frame.flatten();
        assert_eq!(flat.rects.len(), 1);
        assert_eq!(flat.rects[0].fill_color, Color::RED);
    }
}
