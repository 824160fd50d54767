use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Inclusive vertical value range reported by a drawable element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidData(
                "range bounds must be finite with min <= max".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    /// Range spanned by a value slice, ignoring non-finite samples.
    ///
    /// Returns `None` when no finite sample exists.
    #[must_use]
    pub fn of(values: &[f64]) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut any = false;
        for &value in values {
            if value.is_finite() {
                min = min.min(value);
                max = max.max(value);
                any = true;
            }
        }
        if any { Some(Self { min, max }) } else { None }
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Unions two optional ranges; `None` sides do not participate.
    #[must_use]
    pub fn union_opt(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }

    /// Extends the range so it also covers `value`.
    #[must_use]
    pub fn including(self, value: f64) -> Self {
        if !value.is_finite() {
            return self;
        }
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }
}

/// Vertical scale shared by every element of one controller for one frame.
///
/// Pixel Y grows downward; the domain maximum maps to the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    min: f64,
    max: f64,
    height_px: f64,
}

impl ValueScale {
    /// Builds the frame scale from the unioned element ranges.
    ///
    /// `None` (no participating element) falls back to a `0..1` domain so a
    /// marker-only panel still renders without NaN coordinates. A degenerate
    /// span is widened symmetrically instead of dividing by zero.
    pub fn from_range(range: Option<Range>, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let (mut min, mut max) = match range {
            Some(range) => (range.min, range.max),
            None => (0.0, 1.0),
        };
        if (max - min).abs() < f64::EPSILON {
            min -= 0.5;
            max += 0.5;
        }

        Ok(Self {
            min,
            max,
            height_px: f64::from(viewport.height),
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Maps a domain value to pixel Y.
    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.min) / (self.max - self.min);
        self.height_px - normalized * self.height_px
    }
}
