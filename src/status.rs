// ABOUTME: Training-status classification from TSB plus overtraining heuristics
// ABOUTME: Five-band classifier, risk assessment, and recovery-day recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Status Classifier
//!
//! Maps a Training Stress Balance value onto one of five ordered bands.
//! The classification is total and stateless: every finite input lands in
//! exactly one band, with no error path.
//!
//! Canonical thresholds (inclusive lower bounds, first match wins):
//!
//! | TSB | status |
//! |---|---|
//! | `tsb > 25` | `VeryFresh` |
//! | `5 < tsb <= 25` | `Fresh` |
//! | `-10 <= tsb <= 5` | `Optimal` |
//! | `-30 <= tsb < -10` | `Fatigued` |
//! | `tsb < -30` | `VeryFatigued` |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{recovery, risk, status};

/// Training status derived from Training Stress Balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingStatus {
    /// TSB > 25: deeply rested, detraining risk if sustained
    VeryFresh,
    /// TSB 5 to 25: fresh, ready to perform
    Fresh,
    /// TSB -10 to 5: productive training zone
    Optimal,
    /// TSB -30 to -10: meaningful accumulated fatigue
    Fatigued,
    /// TSB < -30: deep fatigue, recovery needed
    VeryFatigued,
}

impl TrainingStatus {
    /// Classify a TSB value into its status band
    ///
    /// Total over the reals: boundary values land in the band whose
    /// inclusive lower bound they satisfy first, evaluated top-down.
    #[must_use]
    pub fn classify(tsb: f64) -> Self {
        if tsb > status::VERY_FRESH_TSB {
            Self::VeryFresh
        } else if tsb > status::FRESH_TSB {
            Self::Fresh
        } else if tsb >= status::OPTIMAL_TSB {
            Self::Optimal
        } else if tsb >= status::FATIGUED_TSB {
            Self::Fatigued
        } else {
            Self::VeryFatigued
        }
    }

    /// Short human-readable description for dashboard cards
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::VeryFresh => "Very fresh - peak form, but fitness fades if the break continues",
            Self::Fresh => "Fresh - well recovered and ready to perform",
            Self::Optimal => "Optimal - absorbing productive training load",
            Self::Fatigued => "Fatigued - carrying meaningful training stress",
            Self::VeryFatigued => "Very fatigued - deep fatigue, recovery needed",
        }
    }
}

impl fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VeryFresh => write!(f, "Very Fresh"),
            Self::Fresh => write!(f, "Fresh"),
            Self::Optimal => write!(f, "Optimal"),
            Self::Fatigued => write!(f, "Fatigued"),
            Self::VeryFatigued => write!(f, "Very Fatigued"),
        }
    }
}

/// Risk level for overtraining
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk of overtraining
    Low,
    /// Moderate risk - monitor closely
    Moderate,
    /// High risk - rest recommended
    High,
}

/// Overtraining risk assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertrainingRisk {
    /// Overall risk level
    pub risk_level: RiskLevel,
    /// Specific risk factors identified
    pub risk_factors: Vec<String>,
}

/// Assess overtraining risk from current PMC values
///
/// Warning conditions:
/// - ATL > CTL x 1.3: acute load spike
/// - ATL > 150: very high acute load
/// - TSB < -10: deep fatigue
#[must_use]
pub fn check_overtraining_risk(ctl: f64, atl: f64, tsb: f64) -> OvertrainingRisk {
    let mut risk_factors = Vec::new();

    if ctl > 0.0 && atl > ctl * risk::ACUTE_SPIKE_MULTIPLIER {
        risk_factors.push("Acute training load spike detected (>30% above chronic load)".to_owned());
    }

    if atl > risk::HIGH_ACUTE_LOAD {
        risk_factors.push("Very high acute training load (>150 TSS/day)".to_owned());
    }

    if tsb < risk::DEEP_FATIGUE_TSB {
        risk_factors.push("Deep fatigue detected (TSB < -10) - recovery needed".to_owned());
    }

    let risk_level = if risk_factors.len() >= 2 {
        RiskLevel::High
    } else if risk_factors.len() == 1 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };

    OvertrainingRisk {
        risk_level,
        risk_factors,
    }
}

/// Recommended easy days based on current TSB
#[must_use]
pub fn recommend_recovery_days(tsb: f64) -> u32 {
    if tsb < recovery::VERY_DEEP_FATIGUE {
        return 5;
    }
    if tsb < recovery::DEEP_FATIGUE {
        return 3;
    }
    if tsb < recovery::MODERATE_FATIGUE {
        return 2;
    }
    if tsb < recovery::LIGHT_FATIGUE {
        return 1;
    }
    0
}
