//! Decision-support core for the concomitant tricuspid repair evaluator.
//!
//! The `assessment` module carries the clinical enumerations, the intake
//! boundary, and the pure scoring/recommendation engine; `config`, `error`,
//! and `telemetry` are the service plumbing shared with the API binary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
