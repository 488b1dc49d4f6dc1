use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates frame content so invalid geometry surfaces without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub render_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
