pub mod candle;
pub mod line;
pub mod line_area;
pub mod split;
pub mod time_grid;
pub mod x_tick;

pub use candle::Candle;
pub use line::Line;
pub use line_area::{AreaStyle, LineArea};
pub use split::{Split, split_label};
pub use time_grid::{GridUnit, TimeGrid};
pub use x_tick::XTick;

use crate::core::{Range, ValueScale, Viewport};
use crate::data::PriceRecord;
use crate::error::ChartResult;
use crate::render::RenderFrame;

/// Per-frame context handed to every element of one controller.
///
/// `records` is the visible slice and `start` its global index, so elements
/// carrying full-series projection vectors can address their own data.
/// Pixel X is slice-local: the first visible record starts at 0.
#[derive(Debug, Clone, Copy)]
pub struct ElementContext<'a> {
    pub records: &'a [PriceRecord],
    pub start: usize,
    pub zoom: f64,
    pub viewport: Viewport,
}

impl ElementContext<'_> {
    /// Global index one past the last visible record.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.records.len()
    }

    /// Horizontal pixel center of a slice-local record.
    #[must_use]
    pub fn record_center_x(&self, local_index: usize) -> f64 {
        (local_index as f64 + 1.0) * self.zoom - (self.zoom / 2.0).floor()
    }

    /// Slice of a full-series projection vector matching the visible window.
    ///
    /// Returns an empty slice when the vector does not cover the window,
    /// so a stale projection degrades to drawing nothing.
    #[must_use]
    pub fn project<'v>(&self, values: &'v [f64]) -> &'v [f64] {
        values.get(self.start..self.end()).unwrap_or(&[])
    }
}

/// One drawable layer bound to a controller.
///
/// Elements compute their own vertical range over the visible slice; the
/// controller unions those ranges into the single scale every element of the
/// panel paints against.
pub trait ChartElement {
    /// Vertical range over the visible slice, or `None` to opt out of
    /// auto-scaling (grids, axis ticks, markers).
    fn value_range(&self, ctx: &ElementContext<'_>) -> Option<Range>;

    fn draw(
        &self,
        ctx: &ElementContext<'_>,
        scale: ValueScale,
        frame: &mut RenderFrame,
    ) -> ChartResult<()>;
}
