//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! seed → initial population → (selection → crossover → mutation →
//! evaluation) × generations → best schedule.

use super::config::GaConfig;
use super::operators::{single_point_crossover, subset_mutation};
use crate::construct::GreedyBuilder;
use crate::error::Result;
use crate::eval::{Evaluator, Penalty, PenaltyBreakdown};
use crate::model::{ExamProblem, Schedule};
use crate::perturb::reassign_random;
use crate::random::rng_from_option;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

/// Result of a GA optimization run.
///
/// Contains the best schedule of the final population, along with
/// statistics about the evolutionary process.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best schedule of the final population.
    pub best: Schedule,

    /// Fitness of `best`.
    pub best_fitness: Penalty,

    /// Violation counts of `best`.
    pub breakdown: PenaltyBreakdown,

    /// Fitness of the seed schedule the population was derived from.
    pub seed_fitness: Penalty,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness in the population: initial population first, then
    /// one entry per generation.
    pub fitness_history: Vec<Penalty>,
}

/// A population member with its cached fitness.
#[derive(Debug, Clone)]
struct Candidate {
    schedule: Schedule,
    fitness: Penalty,
}

impl Candidate {
    fn unevaluated(schedule: Schedule) -> Self {
        Self {
            schedule,
            fitness: Penalty::MAX,
        }
    }
}

/// Executes the GA evolutionary loop on an [`ExamProblem`].
///
/// # Usage
///
/// ```
/// use chrono::NaiveDate;
/// use exam_metaheur::ga::{GaConfig, GaRunner};
/// use exam_metaheur::model::{ExamProblem, ExamSlot};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let mut b = ExamProblem::builder();
/// let math = b.add_course("Math");
/// b.add_slot(ExamSlot::new(day, "09:00", "2h", 100).unwrap());
/// let g = b.add_group("CS-1", 40);
/// b.enroll(g, math).unwrap();
/// let problem = b.build();
///
/// let config = GaConfig::default().with_population_size(10).with_seed(42);
/// let result = GaRunner::new(&problem, config).unwrap().run();
/// assert_eq!(result.best_fitness, 0);
/// ```
#[derive(Debug, Clone)]
pub struct GaRunner<'a> {
    problem: &'a ExamProblem,
    config: GaConfig,
}

impl<'a> GaRunner<'a> {
    /// Creates a runner after validating `config`.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`](crate::Error::InvalidConfig) if the
    /// configuration is rejected by [`GaConfig::validate`].
    pub fn new(problem: &'a ExamProblem, config: GaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { problem, config })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the GA from the greedy seed, with an RNG built from
    /// `config.seed`.
    pub fn run(&self) -> GaResult {
        let mut rng = rng_from_option(self.config.seed);
        self.run_with_rng(&mut rng)
    }

    /// Runs the GA from the greedy seed using the given RNG.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> GaResult {
        let seed = GreedyBuilder::new(self.problem).build();
        self.run_from(&seed, rng)
    }

    /// Runs the GA, deriving the initial population from `seed`.
    ///
    /// # Panics
    /// Panics if `seed` was not built for this problem.
    pub fn run_from<R: Rng>(&self, seed: &Schedule, rng: &mut R) -> GaResult {
        let config = &self.config;
        let eval = Evaluator::new(self.problem, config.penalties);
        let slot_count = self.problem.slot_count();
        let seed_fitness = eval.evaluate(seed);

        // 1. Initialize population from perturbed copies of the seed
        let mut population: Vec<Candidate> = (0..config.population_size)
            .map(|_| {
                let mut schedule = seed.clone();
                reassign_random(&mut schedule, slot_count, rng);
                Candidate::unevaluated(schedule)
            })
            .collect();
        evaluate_population(&eval, &mut population, config.parallel);

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(find_best(&population).fitness);

        let elite_count = config.elite_count();

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            // Truncation selection: keep the best, ties in population order
            population.sort_by_key(|c| c.fitness);
            population.truncate(elite_count);

            // Crossover among elites until the population is refilled
            while population.len() < config.population_size {
                let p1 = rng.random_range(0..elite_count);
                let p2 = rng.random_range(0..elite_count);
                if rng.random_bool(config.crossover_rate) {
                    let child = single_point_crossover(
                        &population[p1].schedule,
                        &population[p2].schedule,
                        rng,
                    );
                    population.push(Candidate::unevaluated(child));
                }
            }

            // Mutate offspring; elites pass through unchanged
            for child in &mut population[elite_count..] {
                if rng.random_bool(config.mutation_rate) {
                    subset_mutation(&mut child.schedule, slot_count, config.mutation_rate, rng);
                }
            }

            evaluate_population(&eval, &mut population[elite_count..], config.parallel);

            let best_fitness = find_best(&population).fitness;
            fitness_history.push(best_fitness);
            debug!(generation = gen + 1, best_fitness, "ga generation");
        }

        let best = find_best(&population);
        let breakdown = eval.breakdown(&best.schedule);
        info!(
            best_fitness = best.fitness,
            seed_fitness,
            generations = config.max_generations,
            unassigned = breakdown.unassigned,
            "ga finished"
        );

        GaResult {
            best: best.schedule.clone(),
            best_fitness: best.fitness,
            breakdown,
            seed_fitness,
            generations: config.max_generations,
            fitness_history,
        }
    }
}

/// Evaluate all candidates, in parallel when enabled.
#[cfg(feature = "parallel")]
fn evaluate_population(eval: &Evaluator<'_>, population: &mut [Candidate], parallel: bool) {
    if parallel {
        population.par_iter_mut().for_each(|c| {
            c.fitness = eval.evaluate(&c.schedule);
        });
    } else {
        evaluate_sequential(eval, population);
    }
}

/// Evaluate all candidates.
#[cfg(not(feature = "parallel"))]
fn evaluate_population(eval: &Evaluator<'_>, population: &mut [Candidate], _parallel: bool) {
    evaluate_sequential(eval, population);
}

fn evaluate_sequential(eval: &Evaluator<'_>, population: &mut [Candidate]) {
    for c in population.iter_mut() {
        c.fitness = eval.evaluate(&c.schedule);
    }
}

/// Find the candidate with the lowest fitness, earliest on ties.
fn find_best(population: &[Candidate]) -> &Candidate {
    population
        .iter()
        .min_by_key(|c| c.fitness)
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
