use crate::data::PriceRecord;
use crate::error::{ChartError, ChartResult};

/// Parses a JSON array of price records and validates every entry.
///
/// The expected shape is the resident-dataset contract:
/// `[{"date": "2020-01-02", "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5}, ...]`
/// with optional `volume` and `split` fields per record.
pub fn records_from_json(payload: &str) -> ChartResult<Vec<PriceRecord>> {
    let records: Vec<PriceRecord> = serde_json::from_str(payload)
        .map_err(|err| ChartError::InvalidData(format!("price record json: {err}")))?;

    for record in &records {
        record.validate()?;
    }

    Ok(records)
}
