//! Iterated Local Search configuration.

use crate::error::Result;
use crate::eval::PenaltyWeights;

/// Configuration parameters for Iterated Local Search.
///
/// # Examples
///
/// ```
/// use exam_metaheur::ils::IlsConfig;
///
/// let config = IlsConfig::default()
///     .with_max_iterations(200)
///     .with_local_search_iterations(20);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.local_search_iterations, 20);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlsConfig {
    /// Number of perturb → local search rounds.
    pub max_iterations: usize,
    /// Maximum number of sampled swap neighbors per local search.
    pub local_search_iterations: usize,
    /// Penalty weights used to compare schedules.
    pub penalties: PenaltyWeights,
    /// Random seed (None for a random seed).
    pub seed: Option<u64>,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            local_search_iterations: 50,
            penalties: PenaltyWeights::default(),
            seed: None,
        }
    }
}

impl IlsConfig {
    /// Sets the number of outer iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the local search budget.
    pub fn with_local_search_iterations(mut self, n: usize) -> Self {
        self.local_search_iterations = n;
        self
    }

    /// Sets the penalty weights.
    pub fn with_penalties(mut self, penalties: PenaltyWeights) -> Self {
        self.penalties = penalties;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.penalties.validate()
    }
}
