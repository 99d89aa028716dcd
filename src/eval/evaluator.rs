//! Fitness evaluation of schedules.

use super::weights::{Penalty, PenaltyWeights};
use crate::model::{CourseId, ExamProblem, Schedule};

/// Violation counts behind a fitness score.
///
/// Each assigned course contributes at most one count to each of
/// `overlap`, `same_day` and `consecutive_day`, depending on whether any
/// together course's slot stands in that relation to its own. A conflicting
/// pair is therefore counted once from each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenaltyBreakdown {
    /// Courses without a slot.
    pub unassigned: usize,
    /// Courses whose enrollment exceeds their slot's capacity.
    pub capacity: usize,
    /// Courses overlapping in time with a together course.
    pub overlap: usize,
    /// Courses sharing a date, without overlap, with a together course.
    pub same_day: usize,
    /// Courses one day apart from a together course.
    pub consecutive_day: usize,
    /// Sum of start minutes over assigned courses.
    pub start_minutes: i64,
}

impl PenaltyBreakdown {
    /// Weighted score. Equals [`Evaluator::evaluate`] for the same schedule.
    pub fn total(&self, w: &PenaltyWeights) -> Penalty {
        let constraints = self.unassigned as Penalty * w.unassigned()
            + self.capacity as Penalty * w.hard
            + self.overlap as Penalty * w.hard
            + self.same_day as Penalty * w.light * 2
            + self.consecutive_day as Penalty * w.light;
        constraints.saturating_add(self.start_minutes.saturating_mul(w.start_time_factor))
    }

    /// Number of hard violations (capacity and overlap).
    pub fn hard_violations(&self) -> usize {
        self.capacity + self.overlap
    }

    /// Whether every course is assigned and no hard constraint is violated.
    pub fn is_feasible(&self) -> bool {
        self.unassigned == 0 && self.hard_violations() == 0
    }
}

/// Maps a [`Schedule`] to an integer penalty. Lower is better.
///
/// Pure: evaluation reads the problem and the schedule and touches
/// nothing else, so it may run concurrently over many schedules.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use exam_metaheur::eval::{Evaluator, PenaltyWeights};
/// use exam_metaheur::model::{ExamProblem, ExamSlot, Schedule};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let mut b = ExamProblem::builder();
/// let c = b.add_course("Math");
/// let s = b.add_slot(ExamSlot::new(day, "09:00", "2h", 10).unwrap());
/// let g = b.add_group("G", 120);
/// b.enroll(g, c).unwrap();
/// let problem = b.build();
///
/// let eval = Evaluator::new(&problem, PenaltyWeights::default());
/// let mut schedule = Schedule::unassigned(1);
/// assert_eq!(eval.evaluate(&schedule), 99_900);
///
/// schedule.assign(c, s);
/// assert_eq!(eval.evaluate(&schedule), 100_000);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    problem: &'a ExamProblem,
    weights: PenaltyWeights,
}

impl<'a> Evaluator<'a> {
    pub fn new(problem: &'a ExamProblem, weights: PenaltyWeights) -> Self {
        Self { problem, weights }
    }

    pub fn problem(&self) -> &'a ExamProblem {
        self.problem
    }

    pub fn weights(&self) -> &PenaltyWeights {
        &self.weights
    }

    /// Computes the fitness of `schedule`.
    ///
    /// # Panics
    /// Panics if the schedule was not built for this problem.
    pub fn evaluate(&self, schedule: &Schedule) -> Penalty {
        self.breakdown(schedule).total(&self.weights)
    }

    /// Counts the violations in `schedule`.
    pub fn breakdown(&self, schedule: &Schedule) -> PenaltyBreakdown {
        debug_assert_eq!(schedule.len(), self.problem.course_count());

        let mut b = PenaltyBreakdown::default();
        for (course, slot) in schedule.iter() {
            let Some(slot) = slot else {
                b.unassigned += 1;
                continue;
            };
            let exam = self.problem.slot(slot);
            b.start_minutes += i64::from(exam.start_minutes());

            if exam.capacity() < self.problem.course(course).enrollment() {
                b.capacity += 1;
            }

            let rel = self.relations(schedule, course);
            b.overlap += usize::from(rel.overlap);
            b.same_day += usize::from(rel.same_day);
            b.consecutive_day += usize::from(rel.consecutive_day);
        }
        b
    }

    /// How `course`'s slot relates to the slots of its together courses.
    fn relations(&self, schedule: &Schedule, course: CourseId) -> Relations {
        let mut rel = Relations::default();
        let Some(own) = schedule.get(course) else {
            return rel;
        };
        let own = self.problem.slot(own);

        for other in self.problem.together_with(course) {
            let Some(slot) = schedule.get(other) else {
                continue;
            };
            let theirs = self.problem.slot(slot);
            if own.overlaps(theirs) {
                rel.overlap = true;
            } else if own.same_day(theirs) {
                rel.same_day = true;
            } else if own.is_adjacent_day(theirs) {
                rel.consecutive_day = true;
            }
            if rel.overlap && rel.same_day && rel.consecutive_day {
                break;
            }
        }
        rel
    }
}

#[derive(Debug, Default)]
struct Relations {
    overlap: bool,
    same_day: bool,
    consecutive_day: bool,
}
