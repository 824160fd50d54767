use crate::error::ChartResult;
use crate::render::{Primitive, RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_op_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_op_count = frame.ops().len();
        self.last_line_count = frame
            .ops()
            .iter()
            .filter(|op| matches!(op, Primitive::Line(_)))
            .count();
        self.last_text_count = frame
            .ops()
            .iter()
            .filter(|op| matches!(op, Primitive::Text(_)))
            .count();
        Ok(())
    }
}
