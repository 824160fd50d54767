use crate::core::{Range, ValueScale};
use crate::element::{ChartElement, ElementContext};
use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Vertical split/merge markers with a ratio label.
///
/// A record with `split: Some(r)` gets a full-height marker. Markers never
/// affect auto-scaling.
#[derive(Debug, Clone)]
pub struct Split {
    stroke: Color,
    label_color: Color,
    font_size_px: f64,
}

impl Split {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stroke: Color::rgba(1.0, 0.0, 0.0, 0.45),
            label_color: Color::rgb(1.0, 0.0, 0.0),
            font_size_px: 11.0,
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.stroke = color;
    }
}

impl Default for Split {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a split ratio into its marker label.
///
/// `ratio >= 1` reads as a split (`2.0` → `"split 2:1"`), `ratio < 1` as a
/// merge (`0.5` → `"merge 1:2"`).
#[must_use]
pub fn split_label(ratio: f64) -> String {
    if ratio >= 1.0 {
        format!("split {}:1", format_side(ratio))
    } else {
        format!("merge 1:{}", (1.0 / ratio).round() as i64)
    }
}

fn format_side(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

impl ChartElement for Split {
    fn value_range(&self, _ctx: &ElementContext<'_>) -> Option<Range> {
        None
    }

    fn draw(
        &self,
        ctx: &ElementContext<'_>,
        _scale: ValueScale,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        let height = f64::from(ctx.viewport.height);

        for (local, record) in ctx.records.iter().enumerate() {
            let Some(ratio) = record.split else {
                continue;
            };
            if !ratio.is_finite() || ratio <= 0.0 {
                continue;
            }

            let x = ctx.record_center_x(local);
            frame.push_line(LinePrimitive::new(x, 0.0, x, height, 1.0, self.stroke));
            frame.push_text(TextPrimitive::new(
                split_label(ratio),
                x + 4.0,
                12.0,
                self.font_size_px,
                self.label_color,
                TextHAlign::Left,
            ));
        }

        Ok(())
    }
}
