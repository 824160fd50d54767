use crate::controller::render_panel;
use crate::core::{ViewWindow, Viewport};
use crate::data::PriceRecord;
use crate::element::ChartElement;
use crate::error::{ChartError, ChartResult};
use crate::render::RenderFrame;

/// Primary-panel controller.
///
/// Owns the view window, the panel viewport, and the ordered element list
/// (insertion order is paint order, back to front). It is the only writer of
/// zoom and offset; secondary panels read its window each frame.
pub struct ChartController {
    view: ViewWindow,
    viewport: Viewport,
    elements: Vec<Box<dyn ChartElement>>,
}

impl ChartController {
    pub fn new(viewport: Viewport, zoom: f64) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            view: ViewWindow::new(zoom)?,
            viewport,
            elements: Vec::new(),
        })
    }

    /// Appends an element to the paint-order list.
    ///
    /// The element becomes eligible for range aggregation and drawing on the
    /// next render pass.
    pub fn register_element(&mut self, element: Box<dyn ChartElement>) {
        self.elements.push(element);
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn clear_elements(&mut self) {
        self.elements.clear();
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn view(&self) -> &ViewWindow {
        &self.view
    }

    /// Contiguous sub-sequence of `records` currently in view, plus its
    /// global start index. Never empty unless `records` is.
    #[must_use]
    pub fn visible_slice<'a>(&self, records: &'a [PriceRecord]) -> (&'a [PriceRecord], usize) {
        let (start, end) = self.view.visible_bounds(self.viewport.width, records.len());
        (&records[start..end], start)
    }

    /// Pans by a pixel delta; positive deltas scroll toward older data.
    ///
    /// Returns whether the clamped offset actually changed.
    pub fn set_offset(&mut self, delta_px: f64, len: usize) -> bool {
        self.view.pan_by_pixels(delta_px, self.viewport.width, len)
    }

    /// Re-anchored pan used by drag gestures: the cumulative pixel delta is
    /// applied against the offset captured at gesture start, mirroring a
    /// pointer that is dragged, not a sequence of relative nudges.
    pub fn pan_from_anchor(&mut self, anchor_offset: f64, total_px: f64, len: usize) -> bool {
        let target = anchor_offset + total_px / self.view.zoom();
        self.view
            .set_offset_records(target, self.viewport.width, len)
    }

    /// Pivot-preserving wheel zoom; see [`ViewWindow::zoom_at`].
    pub fn handle_zoom(&mut self, wheel_delta: f64, pivot_px: f64, len: usize) -> bool {
        self.view
            .zoom_at(wheel_delta, pivot_px, self.viewport.width, len)
    }

    /// Runs one full render pass for this panel into `frame`.
    pub fn render(&self, records: &[PriceRecord], frame: &mut RenderFrame) -> ChartResult<()> {
        self.render_from(records, 0, frame)
    }

    /// Render pass over a windowed sub-sequence of a larger series.
    ///
    /// `base` is the global index of `records[0]`; elements carrying
    /// full-series projection vectors address their data through it.
    pub fn render_from(
        &self,
        records: &[PriceRecord],
        base: usize,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        render_panel(&self.view, self.viewport, &self.elements, records, base, frame)
    }
}
