use crate::controller::render_panel;
use crate::core::{ViewWindow, Viewport};
use crate::data::PriceRecord;
use crate::element::ChartElement;
use crate::error::{ChartError, ChartResult};
use crate::render::RenderFrame;

/// Auxiliary-panel controller synchronized to the primary time axis.
///
/// It never owns zoom or offset: every render pass borrows the primary
/// controller's [`ViewWindow`], so both panels always show the same slice.
pub struct SubController {
    viewport: Viewport,
    elements: Vec<Box<dyn ChartElement>>,
}

impl SubController {
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            viewport,
            elements: Vec::new(),
        })
    }

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

    /// Renders this panel against the primary controller's view window.
    pub fn render(
        &self,
        view: &ViewWindow,
        records: &[PriceRecord],
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        self.render_from(view, records, 0, frame)
    }

    /// Render pass over a windowed sub-sequence of a larger series; `base`
    /// is the global index of `records[0]`.
    pub fn render_from(
        &self,
        view: &ViewWindow,
        records: &[PriceRecord],
        base: usize,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        render_panel(view, self.viewport, &self.elements, records, base, frame)
    }
}
