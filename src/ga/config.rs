//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Error, Result};
use crate::eval::PenaltyWeights;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, elite fraction, operator rates, the
/// generation budget, penalty weights and parallel evaluation.
///
/// # Defaults
///
/// ```
/// use exam_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 50);
/// assert_eq!(config.elite_count(), 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use exam_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_max_generations(10)
///     .with_mutation_rate(0.3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of schedules in the population.
    pub population_size: usize,

    /// Number of selection → crossover → mutation rounds.
    pub max_generations: usize,

    /// Fraction of the population kept as elites (0.0–1.0).
    ///
    /// Elites are the best `floor(population_size × elite_ratio)`
    /// schedules; they are the only parents and pass to the next
    /// generation unchanged.
    pub elite_ratio: f64,

    /// Probability that a sampled parent pair yields an offspring (0.0–1.0].
    ///
    /// When the draw fails no offspring is produced and a new pair is
    /// sampled.
    pub crossover_rate: f64,

    /// Probability of mutating an offspring, and, within a mutation, of
    /// reassigning each selected course (0.0–1.0).
    pub mutation_rate: f64,

    /// Penalty weights used to rank schedules.
    pub penalties: PenaltyWeights,

    /// Whether to evaluate offspring in parallel using rayon.
    ///
    /// Has no effect without the `parallel` feature. Results are identical
    /// either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 50,
            elite_ratio: 0.2,
            crossover_rate: 0.8,
            mutation_rate: 0.2,
            penalties: PenaltyWeights::default(),
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the penalty weights.
    pub fn with_penalties(mut self, penalties: PenaltyWeights) -> Self {
        self.penalties = penalties;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites kept each generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio) as usize
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.elite_ratio) {
            return Err(Error::InvalidConfig("elite_ratio must be in [0, 1]".into()));
        }
        if self.elite_count() == 0 {
            return Err(Error::InvalidConfig(
                "elite_ratio too low: no elites to breed from".into(),
            ));
        }
        let rate = self.crossover_rate;
        if rate.is_nan() || rate <= 0.0 || rate > 1.0 {
            return Err(Error::InvalidConfig(
                "crossover_rate must be in (0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::InvalidConfig(
                "mutation_rate must be in [0, 1]".into(),
            ));
        }
        self.penalties.validate()
    }
}
