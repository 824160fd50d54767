use crate::core::{Range, ValueScale};
use crate::element::{ChartElement, ElementContext};
use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame};

/// OHLC candlestick layer for the primary panel.
#[derive(Debug, Clone)]
pub struct Candle {
    bull_color: Color,
    bear_color: Color,
    /// Body width as a fraction of the per-record pixel slot.
    body_ratio: f64,
}

impl Candle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bull_color: Color::rgb(0.16, 0.78, 0.47),
            bear_color: Color::rgb(0.86, 0.31, 0.31),
            body_ratio: 0.7,
        }
    }

    pub fn set_colors(&mut self, bull: Color, bear: Color) {
        self.bull_color = bull;
        self.bear_color = bear;
    }
}

impl Default for Candle {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartElement for Candle {
    fn value_range(&self, ctx: &ElementContext<'_>) -> Option<Range> {
        let mut range: Option<Range> = None;
        for record in ctx.records {
            let candle = Range {
                min: record.low,
                max: record.high,
            };
            range = Some(match range {
                Some(range) => range.union(candle),
                None => candle,
            });
        }
        range
    }

    fn draw(
        &self,
        ctx: &ElementContext<'_>,
        scale: ValueScale,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        let half = ((ctx.zoom * self.body_ratio) / 2.0).max(0.5);

        for (local, record) in ctx.records.iter().enumerate() {
            let x = ctx.record_center_x(local);
            let color = if record.is_bullish() {
                self.bull_color
            } else {
                self.bear_color
            };

            let wick_top = scale.value_to_pixel(record.high);
            let wick_bottom = scale.value_to_pixel(record.low);
            frame.push_line(LinePrimitive::new(x, wick_top, x, wick_bottom, 1.0, color));

            let open_y = scale.value_to_pixel(record.open);
            let close_y = scale.value_to_pixel(record.close);
            let top = open_y.min(close_y);
            let bottom = open_y.max(close_y).max(top + 1.0);
            frame.push_rect(RectPrimitive::new(x - half, top, x + half, bottom, color));
        }

        Ok(())
    }
}
