pub mod json;
pub mod record;
pub mod series;

pub use json::records_from_json;
pub use record::PriceRecord;
pub use series::{DateRange, PriceSeries};
