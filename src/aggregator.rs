// ABOUTME: Weekly training-load aggregation for calendar and dashboard views
// ABOUTME: Monday-aligned roll-ups of TSS, duration, distance, work, and elevation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Weekly Aggregator
//!
//! Groups raw activity records into Monday-aligned weekly summaries and
//! stamps each week with its PMC snapshot as of the week's final day (real
//! data if present, projection otherwise). Pure aggregation: sums run in
//! input order, missing metric fields contribute zero, and identical inputs
//! always produce identical output.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::trace;

use crate::models::{ActivityRecord, TrainingLoadPoint, WeekSummary};
use crate::projector::PmcProjector;

/// Days per aggregation window
const DAYS_PER_WEEK: i64 = 7;

/// Monday-aligned week bounds `(monday, sunday)` containing `date`
#[must_use]
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(date.weekday().num_days_from_monday());
    let week_start = date - Duration::days(offset);
    (week_start, week_start + Duration::days(DAYS_PER_WEEK - 1))
}

/// Aggregator pairing activity roll-ups with PMC snapshots
#[derive(Debug, Clone, Copy, Default)]
pub struct WeeklyAggregator {
    projector: PmcProjector,
}

impl WeeklyAggregator {
    /// Create an aggregator using the standard projector windows
    #[must_use]
    pub const fn new() -> Self {
        Self {
            projector: PmcProjector::new(),
        }
    }

    /// Create an aggregator using a custom projector
    #[must_use]
    pub const fn with_projector(projector: PmcProjector) -> Self {
        Self { projector }
    }

    /// Summarize the activities falling inside `[week_start, week_end]`
    ///
    /// The window is inclusive on both ends. Records outside the window are
    /// ignored; records with missing metric fields contribute zero to the
    /// corresponding sum. The week's PMC values come from the projector
    /// evaluated at `week_end`.
    #[must_use]
    pub fn aggregate_week(
        &self,
        records: &[ActivityRecord],
        series: &[TrainingLoadPoint],
        week_start: NaiveDate,
        week_end: NaiveDate,
    ) -> WeekSummary {
        let mut total_tss = 0.0_f64;
        let mut total_duration_seconds = 0_u64;
        let mut total_distance_meters = 0.0_f64;
        let mut total_work_kj = 0.0_f64;
        let mut total_elevation_meters = 0.0_f64;

        // Summation in input order keeps floating-point results stable
        // across identical calls.
        for record in records {
            if record.date < week_start || record.date > week_end {
                continue;
            }
            total_tss += record.tss.unwrap_or(0.0);
            total_duration_seconds += record.duration_seconds;
            total_distance_meters += record.distance_meters.unwrap_or(0.0);
            #[allow(clippy::cast_precision_loss)]
            if let Some(power) = record.average_power {
                total_work_kj += power * record.duration_seconds as f64 / 1000.0;
            }
            total_elevation_meters += record.elevation_gain_meters.unwrap_or(0.0);
        }

        let snapshot = self.projector.project(series, week_end);

        trace!(
            week_start = %week_start,
            week_end = %week_end,
            total_tss,
            "aggregated weekly training load"
        );

        WeekSummary {
            week_start,
            week_end,
            total_tss,
            total_duration_seconds,
            total_distance_meters,
            total_work_kj,
            total_elevation_meters,
            ctl: snapshot.ctl,
            atl: snapshot.atl,
            tsb: snapshot.tsb,
        }
    }

    /// Summarize `week_count` consecutive weeks starting at the Monday of
    /// the week containing `first_date`
    #[must_use]
    pub fn aggregate_weeks(
        &self,
        records: &[ActivityRecord],
        series: &[TrainingLoadPoint],
        first_date: NaiveDate,
        week_count: usize,
    ) -> Vec<WeekSummary> {
        let (mut week_start, _) = week_bounds(first_date);
        let mut summaries = Vec::with_capacity(week_count);
        for _ in 0..week_count {
            let week_end = week_start + Duration::days(DAYS_PER_WEEK - 1);
            summaries.push(self.aggregate_week(records, series, week_start, week_end));
            week_start += Duration::days(DAYS_PER_WEEK);
        }
        summaries
    }
}
