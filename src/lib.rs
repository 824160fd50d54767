//! chartfolio: interactive time-series charting engine.
//!
//! The crate separates the zoom/offset windowing math, the drawable-element
//! hierarchy, the pointer interaction state machine, and the value-averaging
//! portfolio simulator behind a renderer-agnostic primitive stream.

pub mod api;
pub mod controller;
pub mod core;
pub mod data;
pub mod element;
pub mod error;
pub mod interaction;
pub mod render;
pub mod strategy;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
