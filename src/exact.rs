//! Seam for an external exact solver.
//!
//! An exact backend (e.g. an integer-programming formulation solved by a
//! third-party library) receives the same [`ExamProblem`] and returns a
//! schedule that satisfies the hard constraints with minimal light
//! penalty, or reports that none exists. Its schedules are scored by the
//! same [`Evaluator`] as the metaheuristics, so results can be compared
//! directly.

use crate::error::Result;
use crate::eval::{Evaluator, Penalty};
use crate::model::{ExamProblem, Schedule};

/// Outcome of an exact solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExactOutcome {
    /// A schedule meeting every hard constraint.
    Solved(Schedule),
    /// The backend proved that no feasible schedule exists.
    Infeasible,
}

impl ExactOutcome {
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            ExactOutcome::Solved(s) => Some(s),
            ExactOutcome::Infeasible => None,
        }
    }

    pub fn into_schedule(self) -> Option<Schedule> {
        match self {
            ExactOutcome::Solved(s) => Some(s),
            ExactOutcome::Infeasible => None,
        }
    }

    /// Fitness of the solved schedule under `eval`, if any.
    pub fn fitness(&self, eval: &Evaluator<'_>) -> Option<Penalty> {
        self.schedule().map(|s| eval.evaluate(s))
    }
}

/// Contract for exact solver backends.
///
/// Backend failures (licensing, crashes, time limits without an
/// incumbent) are reported as [`Error::Solver`](crate::Error::Solver);
/// proven infeasibility is `Ok(ExactOutcome::Infeasible)`.
pub trait ExactSolver {
    fn solve(&self, problem: &ExamProblem) -> Result<ExactOutcome>;
}
