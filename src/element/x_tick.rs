use crate::core::{Range, ValueScale};
use crate::element::{ChartElement, ElementContext};
use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, TextHAlign, TextPrimitive};

/// Axis date labels painted at a fixed pixel cadence.
#[derive(Debug, Clone)]
pub struct XTick {
    cadence_px: f64,
    color: Color,
    font_size_px: f64,
}

impl XTick {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cadence_px: 100.0,
            color: Color::rgb(0.7, 0.7, 0.75),
            font_size_px: 11.0,
        }
    }

    #[must_use]
    pub fn with_cadence_px(mut self, cadence_px: f64) -> Self {
        self.cadence_px = cadence_px.max(1.0);
        self
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Default for XTick {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartElement for XTick {
    fn value_range(&self, _ctx: &ElementContext<'_>) -> Option<Range> {
        None
    }

    fn draw(
        &self,
        ctx: &ElementContext<'_>,
        _scale: ValueScale,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        let width = f64::from(ctx.viewport.width);
        let baseline = f64::from(ctx.viewport.height) - 4.0;

        let mut x = self.cadence_px;
        while x < width {
            let local = (x / ctx.zoom).floor() as usize;
            if let Some(record) = ctx.records.get(local) {
                let label = record.date.format("%Y-%m-%d").to_string();
                frame.push_text(TextPrimitive::new(
                    label,
                    x,
                    baseline,
                    self.font_size_px,
                    self.color,
                    TextHAlign::Center,
                ));
            }
            x += self.cadence_px;
        }

        Ok(())
    }
}
