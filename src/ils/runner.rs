//! Iterated Local Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the greedy seed: incumbent x, fitness f(x)
//! 2. Repeat `max_iterations` times:
//!    a. **Perturb**: copy x and move one random course to one random slot → x'
//!    b. **Local search**: up to `local_search_iterations` times, draw one
//!    random swap neighbor of the current state and move to it only if it
//!    is strictly better → x''
//!    c. **Accept**: if f(x'') < f(x), set x = x''
//! 3. Return x
//!
//! # Reference
//!
//! Lourenço, H. R., Martin, O. C. & Stützle, T. (2003). "Iterated Local
//! Search", *Handbook of Metaheuristics*, 320-353.

use super::config::IlsConfig;
use super::neighborhood::random_swap;
use crate::construct::GreedyBuilder;
use crate::error::Result;
use crate::eval::{Evaluator, Penalty, PenaltyBreakdown};
use crate::model::{ExamProblem, Schedule};
use crate::perturb::reassign_random;
use crate::random::rng_from_option;
use rand::Rng;
use tracing::{debug, info};

/// Result of an ILS run.
#[derive(Debug, Clone)]
pub struct IlsResult {
    /// Final incumbent.
    pub best: Schedule,
    /// Fitness of the incumbent.
    pub best_fitness: Penalty,
    /// Violation counts of the incumbent.
    pub breakdown: PenaltyBreakdown,
    /// Fitness of the starting schedule.
    pub seed_fitness: Penalty,
    /// Outer iterations executed.
    pub iterations: usize,
    /// Number of outer iterations that replaced the incumbent.
    pub improvements: usize,
    /// Incumbent fitness: seed first, then one entry per outer iteration.
    pub fitness_history: Vec<Penalty>,
}

/// Iterated Local Search runner.
///
/// ```
/// use chrono::NaiveDate;
/// use exam_metaheur::ils::{IlsConfig, IlsRunner};
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
/// let result = IlsRunner::new(&problem, IlsConfig::default().with_seed(1))
///     .unwrap()
///     .run();
/// assert_eq!(result.best_fitness, 0);
/// ```
#[derive(Debug, Clone)]
pub struct IlsRunner<'a> {
    problem: &'a ExamProblem,
    config: IlsConfig,
}

impl<'a> IlsRunner<'a> {
    /// Creates a runner after validating `config`.
    pub fn new(problem: &'a ExamProblem, config: IlsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { problem, config })
    }

    pub fn config(&self) -> &IlsConfig {
        &self.config
    }

    /// Runs ILS from the greedy seed, with an RNG built from `config.seed`.
    pub fn run(&self) -> IlsResult {
        let mut rng = rng_from_option(self.config.seed);
        self.run_with_rng(&mut rng)
    }

    /// Runs ILS from the greedy seed using the given RNG.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> IlsResult {
        let seed = GreedyBuilder::new(self.problem).build();
        self.run_from(&seed, rng)
    }

    /// Runs ILS starting from `seed`.
    pub fn run_from<R: Rng>(&self, seed: &Schedule, rng: &mut R) -> IlsResult {
        let eval = Evaluator::new(self.problem, self.config.penalties);
        let slot_count = self.problem.slot_count();

        let mut incumbent = seed.clone();
        let mut incumbent_fitness = eval.evaluate(&incumbent);
        let seed_fitness = incumbent_fitness;

        let mut fitness_history = Vec::with_capacity(self.config.max_iterations + 1);
        fitness_history.push(incumbent_fitness);
        let mut improvements = 0;

        for iteration in 0..self.config.max_iterations {
            // Perturbation
            let mut candidate = incumbent.clone();
            reassign_random(&mut candidate, slot_count, rng);
            let candidate_fitness = eval.evaluate(&candidate);

            // Local search on the perturbed schedule
            let (candidate, candidate_fitness) =
                self.descend(&eval, candidate, candidate_fitness, rng);

            if candidate_fitness < incumbent_fitness {
                incumbent = candidate;
                incumbent_fitness = candidate_fitness;
                improvements += 1;
            }

            debug!(
                iteration = iteration + 1,
                best_fitness = incumbent_fitness,
                candidate_fitness,
                "ils iteration"
            );

            fitness_history.push(incumbent_fitness);
        }

        let breakdown = eval.breakdown(&incumbent);
        info!(
            best_fitness = incumbent_fitness,
            seed_fitness,
            improvements,
            unassigned = breakdown.unassigned,
            "ils finished"
        );

        IlsResult {
            best: incumbent,
            best_fitness: incumbent_fitness,
            breakdown,
            seed_fitness,
            iterations: self.config.max_iterations,
            improvements,
            fitness_history,
        }
    }

    /// Improves `schedule` with randomized swap descent.
    ///
    /// Returns the improved schedule and its fitness, which is never worse
    /// than the input's.
    pub fn local_search<R: Rng>(&self, schedule: Schedule, rng: &mut R) -> (Schedule, Penalty) {
        let eval = Evaluator::new(self.problem, self.config.penalties);
        let fitness = eval.evaluate(&schedule);
        self.descend(&eval, schedule, fitness, rng)
    }

    fn descend<R: Rng>(
        &self,
        eval: &Evaluator<'_>,
        mut current: Schedule,
        mut current_fitness: Penalty,
        rng: &mut R,
    ) -> (Schedule, Penalty) {
        for _ in 0..self.config.local_search_iterations {
            let Some(mv) = random_swap(&current, rng) else {
                break;
            };
            mv.apply(&mut current);
            let fitness = eval.evaluate(&current);
            if fitness < current_fitness {
                current_fitness = fitness;
            } else {
                // undo
                mv.apply(&mut current);
            }
        }
        (current, current_fitness)
    }
}
