// ABOUTME: PMC projector - extends CTL/ATL/TSB into days without recorded training
// ABOUTME: Per-day exponential decay from the most recent anchor point
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # PMC Projector
//!
//! Projects Chronic Training Load, Acute Training Load, and Training Stress
//! Balance onto an arbitrary date given an ordered daily series. Dates with
//! recorded data pass through unchanged; dates beyond the last recorded
//! point decay day by day with the same per-day factor the incremental
//! series definition uses (`x (1 - 1/N)` on a zero-TSS day), so a
//! projection is the literal continuation of the stored series through
//! empty days.
//!
//! This models detraining: fitness (CTL, 6-week constant) fades slowly,
//! fatigue (ATL, 1-week constant) fades fast, so form (TSB) rises through
//! an untrained gap and asymptotically approaches CTL as ATL falls away.

use chrono::NaiveDate;
use tracing::trace;

use crate::constants::windows::{ATL_WINDOW_DAYS, CTL_WINDOW_DAYS};
use crate::errors::{AppError, AppResult};
use crate::models::{ProjectedLoad, TrainingLoadPoint};

/// Projector for PMC values with configurable decay windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PmcProjector {
    ctl_window_days: i64,
    atl_window_days: i64,
}

impl Default for PmcProjector {
    fn default() -> Self {
        Self::new()
    }
}

impl PmcProjector {
    /// Create a projector with the standard 42-day CTL / 7-day ATL windows
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ctl_window_days: CTL_WINDOW_DAYS,
            atl_window_days: ATL_WINDOW_DAYS,
        }
    }

    /// Create a projector with custom window sizes
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` if either window is not positive.
    pub fn with_windows(ctl_days: i64, atl_days: i64) -> AppResult<Self> {
        if ctl_days <= 0 || atl_days <= 0 {
            return Err(AppError::invalid_input(format!(
                "Window sizes must be positive, got CTL={ctl_days} ATL={atl_days}"
            )));
        }
        Ok(Self {
            ctl_window_days: ctl_days,
            atl_window_days: atl_days,
        })
    }

    /// CTL decay window in days
    #[must_use]
    pub const fn ctl_window_days(&self) -> i64 {
        self.ctl_window_days
    }

    /// ATL decay window in days
    #[must_use]
    pub const fn atl_window_days(&self) -> i64 {
        self.atl_window_days
    }

    /// Project CTL/ATL/TSB for `target` from an ordered daily series
    ///
    /// Resolution order:
    /// 1. A point stored for exactly `target` passes through unchanged.
    /// 2. An empty series yields the zero snapshot.
    /// 3. A target before the first recorded point yields the zero snapshot
    ///    ("no data yet" - there is no history to decay from).
    /// 4. Otherwise the most recent point at or before `target` anchors the
    ///    projection; zero whole days of gap returns the anchor's stored
    ///    values, a positive gap decays one simulated day at a time.
    #[must_use]
    pub fn project(&self, series: &[TrainingLoadPoint], target: NaiveDate) -> ProjectedLoad {
        if series.is_empty() {
            return ProjectedLoad::ZERO;
        }

        // Real-data branch: stored values pass through untouched.
        if let Ok(index) = series.binary_search_by_key(&target, |p| p.date) {
            let point = &series[index];
            return ProjectedLoad {
                ctl: point.ctl,
                atl: point.atl,
                tsb: point.tsb,
            };
        }

        // Anchor at the most recent point dated at or before the target.
        // A target before all recorded history has no anchor; that is the
        // "no data yet" case and projects to zero rather than echoing
        // whatever was recorded later.
        let Some(anchor) = series.iter().rev().find(|p| p.date <= target) else {
            return ProjectedLoad::ZERO;
        };

        let days_since = (target - anchor.date).num_days();
        if days_since <= 0 {
            // Never decay backward: use the anchor's stored values. The
            // guard is explicit because callers distinguish "gap to fill"
            // from "use last known values".
            return ProjectedLoad {
                ctl: anchor.ctl,
                atl: anchor.atl,
                tsb: anchor.tsb,
            };
        }

        trace!(
            anchor = %anchor.date,
            target = %target,
            days_since,
            "projecting PMC values across untrained gap"
        );

        // Per-calendar-day decay, matching the incremental definition the
        // stored series was built with. The loop is authoritative; a
        // closed-form power would only match under the same operation order.
        #[allow(clippy::cast_precision_loss)]
        let ctl_factor = 1.0 - 1.0 / self.ctl_window_days as f64;
        #[allow(clippy::cast_precision_loss)]
        let atl_factor = 1.0 - 1.0 / self.atl_window_days as f64;

        let mut ctl = anchor.ctl;
        let mut atl = anchor.atl;
        for _ in 0..days_since {
            ctl *= ctl_factor;
            atl *= atl_factor;
        }

        ProjectedLoad::new(ctl, atl)
    }

    /// Project one snapshot per day over `[start, end]` inclusive
    ///
    /// Returns an empty vector if `end` precedes `start`. Each day is
    /// resolved independently against the same immutable series, so real
    /// data always wins over decay within the range.
    #[must_use]
    pub fn project_range(
        &self,
        series: &[TrainingLoadPoint],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<(NaiveDate, ProjectedLoad)> {
        start
            .iter_days()
            .take_while(|day| *day <= end)
            .map(|day| (day, self.project(series, day)))
            .collect()
    }
}
