//! Model constants.

use serde::{Deserialize, Serialize};

/// Tunable constants of the fatigue model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    /// Flat fatigue added by any session
    pub base_fatigue: f64,
    /// Multiplier on load x minutes
    pub load_factor: f64,
    /// Share of the direct delta each synergist receives
    pub spill_ratio: f64,
    /// Points recovered per whole elapsed day
    pub decay_per_day: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            base_fatigue: 4.0,
            load_factor: 0.7,
            spill_ratio: 0.1,
            decay_per_day: 18.0,
        }
    }
}

impl ModelParams {
    /// Fields by name, in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("base_fatigue", self.base_fatigue),
            ("load_factor", self.load_factor),
            ("spill_ratio", self.spill_ratio),
            ("decay_per_day", self.decay_per_day),
        ]
    }

    /// First field that is negative or not finite.
    pub fn invalid_field(&self) -> Option<(&'static str, f64)> {
        self.fields()
            .into_iter()
            .find(|(_, v)| !v.is_finite() || *v < 0.0)
    }

    /// # Panics
    /// If any field is negative or not finite.
    pub fn assert_valid(&self) {
        if let Some((name, value)) = self.invalid_field() {
            panic!("model parameter {name} must be finite and non-negative, got {value}");
        }
    }
}
