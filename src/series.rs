// ABOUTME: Incremental EWMA series builder producing stored TrainingLoadPoint series
// ABOUTME: Folds daily TSS observations into CTL/ATL day by day, filling gaps with zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Series Builder
//!
//! Builds the stored daily series from raw TSS observations using the
//! impulse-response form of the exponentially-weighted moving average:
//!
//! `CTL_t = CTL_{t-1} + (TSS_t - CTL_{t-1}) / N`
//!
//! with N = 42 for CTL and N = 7 for ATL. On a day with no training
//! (TSS = 0) this reduces exactly to `CTL_t = CTL_{t-1} x (1 - 1/N)`, the
//! same per-day factor [`crate::projector::PmcProjector`] applies, so
//! projecting across a gap and building through it give identical numbers.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::trace;

use crate::constants::windows::{ATL_WINDOW_DAYS, CTL_WINDOW_DAYS};
use crate::errors::{AppError, AppResult};
use crate::models::TrainingLoadPoint;

/// Build the stored daily series from `(date, tss)` observations
///
/// Observations must be sorted ascending by date; same-day entries are
/// merged by summing their TSS. Calendar gaps between observations are
/// folded through with zero TSS but emitted only for days that had recorded
/// training, matching the shape of the persisted series (gap days absent,
/// logically TSS = 0).
///
/// # Errors
/// Returns `AppError::InvalidInput` if the observations are not sorted
/// ascending by date.
pub fn build_series(daily_tss: &[(NaiveDate, f64)]) -> AppResult<Vec<TrainingLoadPoint>> {
    if daily_tss.is_empty() {
        return Ok(Vec::new());
    }

    if daily_tss.windows(2).any(|pair| pair[0].0 > pair[1].0) {
        return Err(AppError::invalid_input(
            "TSS observations not sorted by date".to_owned(),
        ));
    }

    // Merge same-day observations; BTreeMap keeps the fold order fixed.
    let mut tss_by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for (date, tss) in daily_tss {
        *tss_by_day.entry(*date).or_insert(0.0) += tss.max(0.0);
    }

    // The map is non-empty because daily_tss is non-empty.
    let first_date = *tss_by_day.keys().next().unwrap_or(&NaiveDate::MIN);
    let last_date = *tss_by_day.keys().next_back().unwrap_or(&NaiveDate::MIN);

    trace!(
        first = %first_date,
        last = %last_date,
        observations = daily_tss.len(),
        "building PMC series"
    );

    #[allow(clippy::cast_precision_loss)]
    let ctl_n = CTL_WINDOW_DAYS as f64;
    #[allow(clippy::cast_precision_loss)]
    let atl_n = ATL_WINDOW_DAYS as f64;

    let mut series = Vec::with_capacity(tss_by_day.len());
    let mut ctl = 0.0_f64;
    let mut atl = 0.0_f64;

    for day in first_date.iter_days().take_while(|d| *d <= last_date) {
        let daily_tss = tss_by_day.get(&day).copied().unwrap_or(0.0);

        // Impulse-response EWMA: new = old + (tss - old) / N
        ctl += (daily_tss - ctl) / ctl_n;
        atl += (daily_tss - atl) / atl_n;

        if daily_tss > 0.0 {
            series.push(TrainingLoadPoint {
                date: day,
                tss: daily_tss,
                ctl,
                atl,
                tsb: ctl - atl,
            });
        }
    }

    Ok(series)
}
