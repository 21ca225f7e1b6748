//! Recovery status buckets for rendering.

use serde::{Deserialize, Serialize};

/// Coarse recovery status of a single group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryLevel {
    /// Below 25
    Fresh,
    /// 25 to below 50
    Recovering,
    /// 50 to below 75
    Fatigued,
    /// 75 and above
    Exhausted,
}

impl RecoveryLevel {
    pub fn from_score(score: f64) -> Self {
        if score < 25.0 {
            RecoveryLevel::Fresh
        } else if score < 50.0 {
            RecoveryLevel::Recovering
        } else if score < 75.0 {
            RecoveryLevel::Fatigued
        } else {
            RecoveryLevel::Exhausted
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecoveryLevel::Fresh => "fresh",
            RecoveryLevel::Recovering => "recovering",
            RecoveryLevel::Fatigued => "fatigued",
            RecoveryLevel::Exhausted => "exhausted",
        }
    }

    /// Suggestion shown next to the level.
    pub fn advice(&self) -> &'static str {
        match self {
            RecoveryLevel::Fresh => "Ready to train",
            RecoveryLevel::Recovering => "Light work is fine",
            RecoveryLevel::Fatigued => "Prefer another muscle group",
            RecoveryLevel::Exhausted => "Rest recommended",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(RecoveryLevel::from_score(0.0), RecoveryLevel::Fresh);
        assert_eq!(RecoveryLevel::from_score(24.9), RecoveryLevel::Fresh);
        assert_eq!(RecoveryLevel::from_score(25.0), RecoveryLevel::Recovering);
        assert_eq!(RecoveryLevel::from_score(50.0), RecoveryLevel::Fatigued);
        assert_eq!(RecoveryLevel::from_score(74.99), RecoveryLevel::Fatigued);
        assert_eq!(RecoveryLevel::from_score(75.0), RecoveryLevel::Exhausted);
        assert_eq!(RecoveryLevel::from_score(100.0), RecoveryLevel::Exhausted);
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(RecoveryLevel::Fresh < RecoveryLevel::Exhausted);
        assert!(RecoveryLevel::Recovering < RecoveryLevel::Fatigued);
    }
}
