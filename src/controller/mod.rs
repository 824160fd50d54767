pub mod primary;
pub mod secondary;

pub use primary::ChartController;
pub use secondary::SubController;

use tracing::{trace, warn};

use crate::core::{Range, ValueScale, ViewWindow, Viewport};
use crate::data::PriceRecord;
use crate::element::{ChartElement, ElementContext};
use crate::error::ChartResult;
use crate::render::RenderFrame;

/// Shared render pass for one panel.
///
/// Computes the visible slice once, unions every element's range into the
/// frame's single vertical scale, then paints elements in registration
/// order. `base` is the global index of `records[0]`, so elements holding
/// full-series projection vectors stay aligned when `records` is itself a
/// windowed sub-sequence of a larger series.
pub(crate) fn render_panel(
    view: &ViewWindow,
    viewport: Viewport,
    elements: &[Box<dyn ChartElement>],
    records: &[PriceRecord],
    base: usize,
    frame: &mut RenderFrame,
) -> ChartResult<()> {
    let (start, end) = view.visible_bounds(viewport.width, records.len());
    let ctx = ElementContext {
        records: &records[start..end],
        start: base + start,
        zoom: view.zoom(),
        viewport,
    };

    let mut union: Option<Range> = None;
    for element in elements {
        union = Range::union_opt(union, element.value_range(&ctx));
    }
    if union.is_none() && !ctx.records.is_empty() {
        warn!("no element reported a value range; painting against the fallback scale");
    }
    let scale = ValueScale::from_range(union, viewport)?;

    for element in elements {
        element.draw(&ctx, scale, frame)?;
    }

    trace!(
        elements = elements.len(),
        visible = ctx.records.len(),
        "panel render pass"
    );
    Ok(())
}
