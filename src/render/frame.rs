use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LayerPrimitives, LinePrimitive, RectPrimitive, TextPrimitive};

/// End offsets of one band inside the flat primitive vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BandEnd {
    lines: usize,
    rects: usize,
    texts: usize,
}

/// Primitives of one band, drawn rects, then lines, then texts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameBand<'a> {
    pub rects: &'a [RectPrimitive],
    pub lines: &'a [LinePrimitive],
    pub texts: &'a [TextPrimitive],
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitives are grouped into bands, one per flattened layer. Backends draw
/// bands bottom to top, so a label box in an upper band covers grid lines in
/// a lower one.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
    band_ends: Vec<BandEnd>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
            band_ends: Vec::new(),
        }
    }

    /// Appends `layer` as the new topmost band.
    pub fn push_layer(&mut self, layer: &LayerPrimitives) {
        self.lines.extend(layer.lines.iter().copied());
        self.rects.extend(layer.rects.iter().copied());
        self.texts.extend(layer.texts.iter().cloned());
        self.band_ends.push(BandEnd {
            lines: self.lines.len(),
            rects: self.rects.len(),
            texts: self.texts.len(),
        });
    }

    /// Bands bottom to top. Primitives pushed outside [`RenderFrame::push_layer`]
    /// form one trailing band.
    #[must_use]
    pub fn bands(&self) -> Vec<FrameBand<'_>> {
        let mut bands = Vec::with_capacity(self.band_ends.len() + 1);
        let mut start = BandEnd {
            lines: 0,
            rects: 0,
            texts: 0,
        };
        for end in &self.band_ends {
            bands.push(self.band(start, *end));
            start = *end;
        }
        let tail = BandEnd {
            lines: self.lines.len(),
            rects: self.rects.len(),
            texts: self.texts.len(),
        };
        if tail != start {
            bands.push(self.band(start, tail));
        }
        bands
    }

    fn band(&self, start: BandEnd, end: BandEnd) -> FrameBand<'_> {
        FrameBand {
            rects: &self.rects[start.rects..end.rects],
            lines: &self.lines[start.lines..end.lines],
            texts: &self.texts[start.texts..end.texts],
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        let mut previous = BandEnd {
            lines: 0,
            rects: 0,
            texts: 0,
        };
        for end in &self.band_ends {
            if end.lines < previous.lines
                || end.rects < previous.rects
                || end.texts < previous.texts
                || end.lines > self.lines.len()
                || end.rects > self.rects.len()
                || end.texts > self.texts.len()
            {
                return Err(ChartError::InvalidData(
                    "frame bands are out of order with their primitives".to_owned(),
                ));
            }
            previous = *end;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}
