use chrono::Datelike;

use crate::core::{Range, ValueScale};
use crate::element::{ChartElement, ElementContext};
use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RenderFrame};

/// Calendar unit whose boundaries the grid marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridUnit {
    Year,
    Month,
}

impl GridUnit {
    fn key(self, date: chrono::NaiveDate) -> i32 {
        match self {
            Self::Year => date.year(),
            Self::Month => date.year() * 12 + date.month() as i32,
        }
    }
}

/// Vertical guide lines at calendar-unit boundaries.
///
/// Participates in layout only; it never contributes to auto-scaling.
#[derive(Debug, Clone)]
pub struct TimeGrid {
    unit: GridUnit,
    color: Color,
}

impl TimeGrid {
    #[must_use]
    pub fn new(unit: GridUnit) -> Self {
        Self {
            unit,
            color: Color::rgba(0.5, 0.5, 0.55, 0.35),
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl ChartElement for TimeGrid {
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

        for local in 1..ctx.records.len() {
            let prev = self.unit.key(ctx.records[local - 1].date);
            let current = self.unit.key(ctx.records[local].date);
            if prev != current {
                let x = ctx.record_center_x(local) - ctx.zoom / 2.0;
                frame.push_line(LinePrimitive::new(x, 0.0, x, height, 1.0, self.color));
            }
        }

        Ok(())
    }
}
