// ABOUTME: Model constants for the Performance Management Chart engine
// ABOUTME: CTL/ATL time constants, status thresholds, and risk/recovery breakpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Performance Management Chart constants based on sports science literature
//!
//! References:
//! - Coggan, A. & Allen, H. (2010). Training and Racing with a Power Meter
//! - Banister, E.W. (1991). "Modeling elite athletic performance."
//!   *Physiological Testing of Elite Athletes*

/// Exponential-decay time constants for the PMC model
pub mod windows {
    /// Standard CTL (Chronic Training Load) window - 42 days for long-term fitness
    ///
    /// Reference: Coggan, A. (2003). "Training and Racing Using a Power Meter."
    /// *Peaksware LLC* - the Performance Manager Chart default.
    pub const CTL_WINDOW_DAYS: i64 = 42;

    /// Standard ATL (Acute Training Load) window - 7 days for short-term fatigue
    pub const ATL_WINDOW_DAYS: i64 = 7;
}

/// TSB thresholds for the five training-status bands
///
/// Inclusive lower bounds, evaluated top-down; every finite TSB value lands
/// in exactly one band.
pub mod status {
    /// Above this TSB the athlete risks detraining ("very fresh")
    pub const VERY_FRESH_TSB: f64 = 25.0;

    /// Above this TSB the athlete is fresh and race-ready
    pub const FRESH_TSB: f64 = 5.0;

    /// Down to this TSB training is productive ("optimal" band)
    pub const OPTIMAL_TSB: f64 = -10.0;

    /// Down to this TSB the athlete carries meaningful fatigue
    pub const FATIGUED_TSB: f64 = -30.0;
}

/// Overtraining-risk thresholds
///
/// Reference: Gabbett, T.J. (2016). The training-injury prevention paradox.
/// <https://bjsm.bmj.com/content/50/5/273>
pub mod risk {
    /// Acute load more than 30% above chronic load signals a load spike
    pub const ACUTE_SPIKE_MULTIPLIER: f64 = 1.3;

    /// Acute load above this many TSS/day is very high regardless of CTL
    pub const HIGH_ACUTE_LOAD: f64 = 150.0;

    /// TSB below this indicates deep fatigue and a need for recovery
    pub const DEEP_FATIGUE_TSB: f64 = -10.0;
}

/// Recovery-day recommendation breakpoints
pub mod recovery {
    /// TSB below this warrants an extended recovery block
    pub const VERY_DEEP_FATIGUE: f64 = -20.0;

    /// TSB below this warrants several easy days
    pub const DEEP_FATIGUE: f64 = -15.0;

    /// TSB below this warrants a couple of easy days
    pub const MODERATE_FATIGUE: f64 = -10.0;

    /// TSB below this warrants one easy day
    pub const LIGHT_FATIGUE: f64 = 0.0;
}
