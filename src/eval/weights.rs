//! Penalty weights for the constraint evaluator.

use crate::error::{Error, Result};

/// Score type produced by the evaluator. Lower is better, zero is the floor.
pub type Penalty = i64;

/// Weights of the hard and light constraint penalties.
///
/// # Defaults
///
/// ```
/// use exam_metaheur::eval::PenaltyWeights;
///
/// let w = PenaltyWeights::default();
/// assert_eq!(w.hard, 100_000);
/// assert_eq!(w.light, 100);
/// assert_eq!(w.start_time_factor, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenaltyWeights {
    /// Charged for a capacity overrun or a time overlap between together
    /// courses.
    pub hard: Penalty,

    /// Charged for together courses on adjacent days; doubled for
    /// together courses on the same day without overlap. An unassigned
    /// course costs `hard - light`.
    pub light: Penalty,

    /// Multiplied by the start time (minutes since midnight) of every
    /// assigned course. Zero disables the term.
    pub start_time_factor: Penalty,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            hard: 100_000,
            light: 100,
            start_time_factor: 0,
        }
    }
}

impl PenaltyWeights {
    pub fn with_hard(mut self, hard: Penalty) -> Self {
        self.hard = hard;
        self
    }

    pub fn with_light(mut self, light: Penalty) -> Self {
        self.light = light;
        self
    }

    pub fn with_start_time_factor(mut self, factor: Penalty) -> Self {
        self.start_time_factor = factor;
        self
    }

    /// Penalty for leaving one course without a slot.
    pub fn unassigned(&self) -> Penalty {
        self.hard - self.light
    }

    /// Validates the weights.
    ///
    /// All weights must be non-negative and `light` must not exceed `hard`,
    /// otherwise the unassigned penalty would turn into a reward.
    pub fn validate(&self) -> Result<()> {
        if self.hard < 0 || self.light < 0 || self.start_time_factor < 0 {
            return Err(Error::InvalidConfig(
                "penalty weights must be non-negative".into(),
            ));
        }
        if self.light > self.hard {
            return Err(Error::InvalidConfig(
                "light penalty must not exceed hard penalty".into(),
            ));
        }
        Ok(())
    }
}
