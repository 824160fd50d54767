use chrono::NaiveDate;
use tracing::debug;

use crate::data::PriceRecord;
use crate::error::{ChartError, ChartResult};

/// Mutable visible date range shared with an external settings surface.
///
/// The engine never watches the bounds directly; it reacts to `version`
/// changes, so every edit must go through [`DateRange::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    version: u64,
}

impl DateRange {
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
            version: 0,
        }
    }

    pub fn set(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.start = start;
        self.end = end;
        self.version += 1;
    }

    #[must_use]
    pub fn start(self) -> Option<NaiveDate> {
        self.start
    }

    #[must_use]
    pub fn end(self) -> Option<NaiveDate> {
        self.end
    }

    #[must_use]
    pub fn version(self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Ordered daily price store backing every controller.
///
/// Records are immutable once loaded; only the visible date range mutates.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    records: Vec<PriceRecord>,
    date_range: DateRange,
}

impl PriceSeries {
    /// Validates every record and the ascending date order.
    pub fn new(records: Vec<PriceRecord>) -> ChartResult<Self> {
        for record in &records {
            record.validate()?;
        }
        for pair in records.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ChartError::InvalidData(
                    "price records must be strictly ascending by date".to_owned(),
                ));
            }
        }

        Ok(Self {
            records,
            date_range: DateRange::unbounded(),
        })
    }

    #[must_use]
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    /// Narrows (or widens) the visible date range and bumps its version.
    pub fn set_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.date_range.set(start, end);
        debug!(
            version = self.date_range.version(),
            ?start,
            ?end,
            "date range changed"
        );
    }

    /// Contiguous index bounds of records inside the visible date range.
    ///
    /// Records are date-ordered, so the range always resolves to one
    /// contiguous slice; unbounded sides fall back to the sequence edges.
    #[must_use]
    pub fn visible_bounds(&self) -> (usize, usize) {
        let start = match self.date_range.start() {
            Some(date) => self.records.partition_point(|r| r.date < date),
            None => 0,
        };
        let end = match self.date_range.end() {
            Some(date) => self.records.partition_point(|r| r.date <= date),
            None => self.records.len(),
        };
        (start, end.max(start))
    }

    #[must_use]
    pub fn visible_records(&self) -> &[PriceRecord] {
        let (start, end) = self.visible_bounds();
        &self.records[start..end]
    }
}
