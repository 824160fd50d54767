use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Mount-time layout for the two stacked panels.
///
/// The primary panel carries the price chart; the secondary panel sits below
/// it, shares its width and time axis, and carries the portfolio overlays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub main_viewport: Viewport,
    pub sub_viewport: Viewport,
    /// Pixels per record at mount; clamped into the zoom bounds.
    pub initial_zoom: f64,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            main_viewport: Viewport {
                width: 1000,
                height: 500,
            },
            sub_viewport: Viewport {
                width: 1000,
                height: 250,
            },
            initial_zoom: 10.0,
        }
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn with_main_viewport(mut self, viewport: Viewport) -> Self {
        self.main_viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_sub_viewport(mut self, viewport: Viewport) -> Self {
        self.sub_viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_initial_zoom(mut self, zoom: f64) -> Self {
        self.initial_zoom = zoom;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.main_viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.main_viewport.width,
                height: self.main_viewport.height,
            });
        }
        if !self.sub_viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.sub_viewport.width,
                height: self.sub_viewport.height,
            });
        }
        // both panels read the same view window, so their widths must agree
        if self.sub_viewport.width != self.main_viewport.width {
            return Err(ChartError::InvalidConfig(
                "panel viewports must share a width".to_owned(),
            ));
        }
        if !self.initial_zoom.is_finite() || self.initial_zoom <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "initial zoom must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
