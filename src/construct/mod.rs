//! Greedy constructive builder.
//!
//! Produces the seed schedule for both optimizers. Courses are placed in
//! problem order; each takes the first slot, in problem order, that has
//! enough seats and does not overlap in time with an already placed
//! together course. Courses with no such slot stay unassigned.
//!
//! The builder draws no random numbers, so it always returns the same
//! schedule for the same problem.

use crate::model::{CourseId, ExamProblem, Schedule, SlotId};
use tracing::{debug, trace};

/// How a slot relates to the already placed together courses.
///
/// Ordered from most to least preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Placement {
    /// No together course on the same or an adjacent date.
    Clear,
    /// A together course on an adjacent date, none on the same date.
    AdjacentDay,
    /// Together courses on the same date, none overlapping in time.
    SameDay,
}

/// Deterministic first-fit builder.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use exam_metaheur::construct::GreedyBuilder;
/// use exam_metaheur::model::{ExamProblem, ExamSlot, SlotId};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let mut b = ExamProblem::builder();
/// let math = b.add_course("Math");
/// let physics = b.add_course("Physics");
/// b.add_slot(ExamSlot::new(day, "09:00", "2h", 100).unwrap());
/// b.add_slot(ExamSlot::new(day, "13:00", "2h", 100).unwrap());
/// let g = b.add_group("CS-1", 40);
/// b.enroll(g, math).unwrap();
/// b.enroll(g, physics).unwrap();
/// let problem = b.build();
///
/// let schedule = GreedyBuilder::new(&problem).build();
/// assert_eq!(schedule.get(math), Some(SlotId(0)));
/// assert_eq!(schedule.get(physics), Some(SlotId(1)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GreedyBuilder<'a> {
    problem: &'a ExamProblem,
}

impl<'a> GreedyBuilder<'a> {
    pub fn new(problem: &'a ExamProblem) -> Self {
        Self { problem }
    }

    /// Builds the seed schedule.
    pub fn build(&self) -> Schedule {
        let mut schedule = Schedule::unassigned(self.problem.course_count());

        for course in self.problem.course_ids() {
            let chosen = self
                .problem
                .slot_ids()
                .find_map(|slot| self.classify(&schedule, course, slot).map(|p| (slot, p)));

            match chosen {
                Some((slot, placement)) => {
                    trace!(course = %course, slot = %slot, ?placement, "placed course");
                    schedule.assign(course, slot);
                }
                None => {
                    trace!(course = %course, "no acceptable slot, leaving unassigned");
                }
            }
        }

        debug!(
            assigned = schedule.assigned_count(),
            unassigned = schedule.unassigned_count(),
            "built seed schedule"
        );
        schedule
    }

    /// Classifies placing `course` into `slot` given the courses already
    /// placed in `schedule`.
    ///
    /// Returns `None` if the slot lacks capacity or overlaps in time with a
    /// placed together course.
    pub fn classify(
        &self,
        schedule: &Schedule,
        course: CourseId,
        slot: SlotId,
    ) -> Option<Placement> {
        let candidate = self.problem.slot(slot);
        if candidate.capacity() < self.problem.course(course).enrollment() {
            return None;
        }

        let mut same_day = false;
        let mut adjacent_day = false;
        for other in self.problem.together_with(course) {
            let Some(placed) = schedule.get(other) else {
                continue;
            };
            let placed = self.problem.slot(placed);
            if candidate.overlaps(placed) {
                return None;
            }
            same_day |= candidate.same_day(placed);
            adjacent_day |= candidate.is_adjacent_day(placed);
        }

        Some(if same_day {
            Placement::SameDay
        } else if adjacent_day {
            Placement::AdjacentDay
        } else {
            Placement::Clear
        })
    }
}
