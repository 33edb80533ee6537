// ABOUTME: Library entry point for the PMC engine
// ABOUTME: Pure CTL/ATL/TSB projection, weekly aggregation, and status classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # PMC Engine
//!
//! A Performance Management Chart engine for endurance training platforms.
//! Takes the daily training-load series a persistence layer supplies
//! (`{date, tss, ctl, atl, tsb}`) and derives the views a calendar or
//! dashboard renders: PMC projections into untrained days, Monday-aligned
//! weekly roll-ups, and discrete training-status bands.
//!
//! The crate is pure and synchronous: no I/O, no shared state. Every entry
//! point takes an immutable snapshot of the series and returns a fresh
//! value, so concurrent callers never interfere and recomputation is
//! bit-identical.
//!
//! ## Modules
//!
//! - [`projector`]: exponential-decay projection of CTL/ATL/TSB onto
//!   arbitrary dates (real data passes through, gaps decay day by day)
//! - [`series`]: incremental EWMA builder producing the stored series from
//!   raw daily TSS observations
//! - [`aggregator`]: Monday-aligned weekly summaries of stress and volume
//! - [`status`]: TSB band classification, overtraining risk, recovery
//!   recommendations
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pmc_engine::projector::PmcProjector;
//! use pmc_engine::status::TrainingStatus;
//! use pmc_engine::series::build_series;
//!
//! # fn example() -> pmc_engine::errors::AppResult<()> {
//! let day = |d: u32| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
//!
//! // Series built from recorded daily TSS.
//! let series = build_series(&[(day(2), 80.0), (day(4), 95.0)])?;
//!
//! // Project a week past the last ride and classify the resulting form.
//! let projected = PmcProjector::new().project(&series, day(11));
//! let status = TrainingStatus::classify(projected.tsb);
//! println!("form on rest day 7: {status}");
//! # Ok(())
//! # }
//! ```

/// Weekly and period aggregation of training stress and volume
pub mod aggregator;
/// PMC model constants with literature references
pub mod constants;
/// Unified error handling
pub mod errors;
/// Shared value types
pub mod models;
/// Exponential-decay projection of PMC values
pub mod projector;
/// Incremental EWMA series construction
pub mod series;
/// Training-status classification and recovery heuristics
pub mod status;

pub use aggregator::{week_bounds, WeeklyAggregator};
pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{ActivityRecord, ProjectedLoad, TrainingLoadPoint, WeekSummary};
pub use projector::PmcProjector;
pub use series::build_series;
pub use status::{
    check_overtraining_risk, recommend_recovery_days, OvertrainingRisk, RiskLevel, TrainingStatus,
};
