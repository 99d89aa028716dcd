//! Genetic Algorithm over exam schedules.
//!
//! The population starts as perturbed copies of the greedy seed
//! ([`GreedyBuilder`](crate::construct::GreedyBuilder)). Each generation:
//!
//! 1. **Selection**: sort by fitness, keep the best `elite_ratio` share
//! 2. **Crossover**: sample elite pairs with replacement; each pair yields
//!    a single-point offspring with probability `crossover_rate`, until the
//!    population is refilled
//! 3. **Mutation**: each offspring is mutated with probability
//!    `mutation_rate` by reassigning a random subset of courses
//!
//! Elites are never mutated, so the best fitness never gets worse from one
//! generation to the next.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
