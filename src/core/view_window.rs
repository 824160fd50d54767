use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Hard lower bound for pixels-per-record zoom.
pub const MIN_ZOOM: f64 = 1.0;
/// Hard upper bound for pixels-per-record zoom.
pub const MAX_ZOOM: f64 = 64.0;
/// Multiplicative step applied per wheel notch.
const ZOOM_STEP: f64 = 1.1;

/// Scrollable, zoomable window over an index-addressed record sequence.
///
/// `zoom` is horizontal pixels allocated per record. `offset` counts records
/// scrolled back from the newest one: `offset = 0` anchors the newest record
/// at the right edge, larger offsets reveal older data. Both are fractional;
/// the visible slice quantizes them at the last possible moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewWindow {
    zoom: f64,
    offset: f64,
}

impl ViewWindow {
    /// Creates a window at the given zoom with the newest data in view.
    ///
    /// Fails loudly on a non-positive or non-finite zoom; in-bounds values
    /// are otherwise clamped into `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn new(zoom: f64) -> ChartResult<Self> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "zoom must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            offset: 0.0,
        })
    }

    #[must_use]
    pub fn zoom(self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset(self) -> f64 {
        self.offset
    }

    /// Number of records needed to cover `width` pixels, capped by `len`.
    #[must_use]
    pub fn visible_count(self, width: u32, len: usize) -> usize {
        let raw = (f64::from(width) / self.zoom).ceil();
        if raw <= 0.0 {
            return 0;
        }
        (raw as usize).min(len)
    }

    /// Index bounds `[start, end)` of the visible slice, clamped to `[0, len)`.
    ///
    /// The slice length always equals [`visible_count`](Self::visible_count):
    /// the fractional right edge `len - offset` is quantized upward and then
    /// kept at least `count` records away from the left boundary.
    #[must_use]
    pub fn visible_bounds(self, width: u32, len: usize) -> (usize, usize) {
        let count = self.visible_count(width, len);
        if count == 0 {
            return (0, 0);
        }
        let edge = (len as f64 - self.offset).ceil();
        let end = if edge.is_finite() && edge > 0.0 {
            (edge as usize).clamp(count, len)
        } else {
            count
        };
        (end - count, end)
    }

    fn max_offset(self, width: u32, len: usize) -> f64 {
        let count = self.visible_count(width, len);
        len.saturating_sub(count) as f64
    }

    /// Applies a pan expressed in pixels.
    ///
    /// Positive deltas scroll toward older data. Returns whether the clamped
    /// offset actually changed, so callers can suppress redundant redraws.
    pub fn pan_by_pixels(&mut self, delta_px: f64, width: u32, len: usize) -> bool {
        if !delta_px.is_finite() {
            return false;
        }
        let target = self.offset + delta_px / self.zoom;
        self.set_offset_records(target, width, len)
    }

    /// Clamps and stores an absolute offset, reporting actual change.
    pub fn set_offset_records(&mut self, offset: f64, width: u32, len: usize) -> bool {
        if !offset.is_finite() {
            return false;
        }
        let clamped = offset.clamp(0.0, self.max_offset(width, len));
        if clamped == self.offset {
            return false;
        }
        self.offset = clamped;
        true
    }

    /// Pivot-preserving multiplicative zoom.
    ///
    /// `wheel_delta > 0` zooms out, `wheel_delta < 0` zooms in. The
    /// fractional record index rendered at `pivot_px` stays stationary, so
    /// the data point under the cursor does not drift while zooming.
    pub fn zoom_at(&mut self, wheel_delta: f64, pivot_px: f64, width: u32, len: usize) -> bool {
        if !wheel_delta.is_finite() || !pivot_px.is_finite() || wheel_delta == 0.0 {
            return false;
        }

        let factor = if wheel_delta > 0.0 {
            1.0 / ZOOM_STEP
        } else {
            ZOOM_STEP
        };
        let next = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if next == self.zoom {
            return false;
        }

        let tail_px = (f64::from(width) - pivot_px).max(0.0);
        let target = self.offset + tail_px * (1.0 / self.zoom - 1.0 / next);
        self.zoom = next;
        self.offset = target.clamp(0.0, self.max_offset(width, len));
        true
    }

    /// Fractional record index rendered at pixel `pixel_x`.
    ///
    /// The mapping is right-edge anchored: `width` maps to `len - offset`.
    #[must_use]
    pub fn index_at_pixel(self, pixel_x: f64, width: u32, len: usize) -> f64 {
        len as f64 - self.offset - (f64::from(width) - pixel_x) / self.zoom
    }
}
