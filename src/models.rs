// ABOUTME: Value types shared across the PMC engine
// ABOUTME: Daily load points, activity records, projections, and weekly summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Engine Models
//!
//! Plain value types flowing through the engine. The daily series is owned
//! by the persistence collaborator; everything derived here (projections,
//! weekly summaries) is ephemeral and recomputed on demand.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of recorded training load with its stored PMC values
///
/// The series is sorted ascending by date. Days with no recorded activity
/// may be absent; they are logically TSS = 0. The stored `ctl`/`atl`/`tsb`
/// are computed incrementally upstream (see [`crate::series::build_series`])
/// and `tsb = ctl - atl` holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLoadPoint {
    /// Calendar date of the observation (day granularity, caller-normalized)
    pub date: NaiveDate,
    /// Training Stress contributed by all activities on this date
    pub tss: f64,
    /// Chronic Training Load (42-day EWMA) - fitness
    pub ctl: f64,
    /// Acute Training Load (7-day EWMA) - fatigue
    pub atl: f64,
    /// Training Stress Balance (CTL - ATL) - form
    pub tsb: f64,
}

/// Raw activity-like record consumed by the weekly aggregator
///
/// Missing metric fields contribute zero to the sums, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Calendar date the activity took place
    pub date: NaiveDate,
    /// Training Stress Score for the activity, if known
    pub tss: Option<f64>,
    /// Moving/elapsed duration in seconds
    pub duration_seconds: u64,
    /// Distance covered in meters, if recorded
    pub distance_meters: Option<f64>,
    /// Average power in watts, if recorded
    pub average_power: Option<f64>,
    /// Elevation gained in meters, if recorded
    pub elevation_gain_meters: Option<f64>,
}

/// PMC snapshot for a single date, real or projected
///
/// Ephemeral: computed on every query and discarded. Recomputing with
/// identical inputs yields bit-identical values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedLoad {
    /// Chronic Training Load as of the target date
    pub ctl: f64,
    /// Acute Training Load as of the target date
    pub atl: f64,
    /// Training Stress Balance (always `ctl - atl`)
    pub tsb: f64,
}

impl ProjectedLoad {
    /// The zero snapshot returned for dates with no recorded history
    pub const ZERO: Self = Self {
        ctl: 0.0,
        atl: 0.0,
        tsb: 0.0,
    };

    /// Build a snapshot from CTL and ATL, deriving TSB
    #[must_use]
    pub const fn new(ctl: f64, atl: f64) -> Self {
        Self {
            ctl,
            atl,
            tsb: ctl - atl,
        }
    }
}

/// Monday-aligned weekly roll-up of training stress and volume
///
/// Derived on demand for calendar rendering and dashboard cards; never
/// persisted. The PMC values are the snapshot as of `week_end` (real if a
/// point exists for that date, otherwise projected).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// Monday opening the 7-day window
    pub week_start: NaiveDate,
    /// Sunday closing the 7-day window (inclusive)
    pub week_end: NaiveDate,
    /// Sum of TSS over activities in the window
    pub total_tss: f64,
    /// Sum of activity durations in seconds
    pub total_duration_seconds: u64,
    /// Sum of activity distances in meters
    pub total_distance_meters: f64,
    /// Approximate mechanical work in kilojoules (avg power x duration / 1000)
    pub total_work_kj: f64,
    /// Sum of elevation gain in meters
    pub total_elevation_meters: f64,
    /// Chronic Training Load as of `week_end`
    pub ctl: f64,
    /// Acute Training Load as of `week_end`
    pub atl: f64,
    /// Training Stress Balance as of `week_end`
    pub tsb: f64,
}
