use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One daily price observation.
///
/// Records are addressed by their position in the chronological sequence;
/// all windowing math works in index space rather than date space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: Option<f64>,
    /// Split/merge ratio attached to this record, if any.
    /// `2.0` is a 2:1 split, `0.5` is a 1:2 merge.
    #[serde(default)]
    pub split: Option<f64>,
}

impl PriceRecord {
    /// Builds a validated record from raw floating values.
    ///
    /// Invariants:
    /// - all prices are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> ChartResult<Self> {
        let record = Self {
            date,
            open,
            high,
            low,
            close,
            volume: None,
            split: None,
        };
        record.validate()?;
        Ok(record)
    }

    /// Converts strongly-typed decimal input into a validated record.
    pub fn from_decimal(
        date: NaiveDate,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            date,
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    #[must_use]
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    #[must_use]
    pub fn with_split(mut self, ratio: f64) -> Self {
        self.split = Some(ratio);
        self
    }

    /// Returns `true` when close price is greater than or equal to open price.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.open.is_finite()
            || !self.high.is_finite()
            || !self.low.is_finite()
            || !self.close.is_finite()
        {
            return Err(ChartError::InvalidData(
                "price values must be finite".to_owned(),
            ));
        }

        if self.low > self.high {
            return Err(ChartError::InvalidData(
                "price low must be <= high".to_owned(),
            ));
        }

        if self.open < self.low
            || self.open > self.high
            || self.close < self.low
            || self.close > self.high
        {
            return Err(ChartError::InvalidData(
                "price open/close must be within low/high range".to_owned(),
            ));
        }

        if let Some(volume) = self.volume {
            if !volume.is_finite() || volume < 0.0 {
                return Err(ChartError::InvalidData(
                    "volume must be finite and >= 0".to_owned(),
                ));
            }
        }

        if let Some(ratio) = self.split {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(ChartError::InvalidData(
                    "split ratio must be finite and > 0".to_owned(),
                ));
            }
        }

        Ok(())
    }
}

pub(crate) fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}
