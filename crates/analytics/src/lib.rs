//! # IndexScope Analytics Engine
//!
//! This crate derives the risk/return metrics of the dashboard: the per-index
//! risk-adjusted return and the aggregate statistics of a record set.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no I/O and no knowledge of how records were filtered. It depends
//!   only on `core-types`.
//! - **Explicit configuration:** the risk-free rate arrives through `MetricsConfig`
//!   when the engine is constructed; there is no process-wide constant.
//! - **Full precision inside:** figures are kept as `f64` for sorting and comparison.
//!   Rounding to two decimals happens only at display time through `round_display`.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: the stateless calculator.
//! - `AggregateStatistics` / `Averages`: its outputs.
//! - `AnalyticsError`: returned when a mean is requested over nothing.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AnalyticsEngine, DEFAULT_RISK_FREE_RATE, MetricsConfig, round_display};
pub use error::AnalyticsError;
pub use report::{AggregateStatistics, Averages};
