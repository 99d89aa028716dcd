//! The read-only exam timetabling model shared by every search strategy.

use super::course::{Course, StudentGroup};
use super::ids::{CourseId, GroupId, SlotId};
use super::schedule::Schedule;
use super::slot::ExamSlot;
use crate::error::{Error, Result};
use std::fmt;

/// Courses, slots and student groups, plus the precomputed "together"
/// relation between courses.
///
/// Built once with [`ExamProblemBuilder`] and never mutated afterwards,
/// so it can be shared by reference across optimizers and threads.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use exam_metaheur::model::{ExamProblem, ExamSlot};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let mut builder = ExamProblem::builder();
/// let math = builder.add_course("Math");
/// let physics = builder.add_course("Physics");
/// builder.add_slot(ExamSlot::new(day, "09:00", "2h", 100).unwrap());
/// let cohort = builder.add_group("CS-1", 40);
/// builder.enroll(cohort, math).unwrap();
/// builder.enroll(cohort, physics).unwrap();
///
/// let problem = builder.build();
/// assert!(problem.together(math, physics));
/// assert_eq!(problem.course(math).enrollment(), 40);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExamProblem {
    courses: Vec<Course>,
    slots: Vec<ExamSlot>,
    groups: Vec<StudentGroup>,
    /// Row-major `course_count × course_count`; the diagonal is `false`.
    together: Vec<bool>,
}

impl ExamProblem {
    pub fn builder() -> ExamProblemBuilder {
        ExamProblemBuilder::default()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn slots(&self) -> &[ExamSlot] {
        &self.slots
    }

    pub fn groups(&self) -> &[StudentGroup] {
        &self.groups
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// # Panics
    /// Panics if `id` was not issued by this problem.
    pub fn course(&self, id: CourseId) -> &Course {
        &self.courses[id.0]
    }

    /// # Panics
    /// Panics if `id` was not issued by this problem.
    pub fn slot(&self, id: SlotId) -> &ExamSlot {
        &self.slots[id.0]
    }

    /// # Panics
    /// Panics if `id` was not issued by this problem.
    pub fn group(&self, id: GroupId) -> &StudentGroup {
        &self.groups[id.0]
    }

    pub fn course_ids(&self) -> impl Iterator<Item = CourseId> {
        (0..self.courses.len()).map(CourseId)
    }

    pub fn slot_ids(&self) -> impl Iterator<Item = SlotId> {
        (0..self.slots.len()).map(SlotId)
    }

    /// Whether two distinct courses share a student group.
    ///
    /// Always `false` for `a == b`.
    #[inline]
    pub fn together(&self, a: CourseId, b: CourseId) -> bool {
        self.together[a.0 * self.courses.len() + b.0]
    }

    /// Courses that share a group with `course`, excluding itself.
    pub fn together_with(&self, course: CourseId) -> impl Iterator<Item = CourseId> + '_ {
        let n = self.courses.len();
        let row = &self.together[course.0 * n..(course.0 + 1) * n];
        row.iter()
            .enumerate()
            .filter(|&(_, &t)| t)
            .map(|(i, _)| CourseId(i))
    }

    /// Validates an externally produced assignment vector and wraps it as a
    /// [`Schedule`] for this problem.
    ///
    /// # Errors
    /// [`Error::ScheduleSizeMismatch`] if the length differs from the
    /// course count, [`Error::UnknownSlot`] for an out-of-range slot.
    pub fn schedule_from(&self, slots: Vec<Option<SlotId>>) -> Result<Schedule> {
        if slots.len() != self.courses.len() {
            return Err(Error::ScheduleSizeMismatch {
                expected: self.courses.len(),
                actual: slots.len(),
            });
        }
        if let Some(bad) = slots.iter().flatten().find(|s| s.0 >= self.slots.len()) {
            return Err(Error::UnknownSlot(bad.0));
        }
        Ok(Schedule::from_vec(slots))
    }

    /// Returns a [`Display`](fmt::Display) adapter listing each course with
    /// its slot, or `No valid exam` when unassigned.
    pub fn render<'a>(&'a self, schedule: &'a Schedule) -> ScheduleDisplay<'a> {
        ScheduleDisplay {
            problem: self,
            schedule,
        }
    }
}

/// Builder for [`ExamProblem`].
#[derive(Debug, Clone, Default)]
pub struct ExamProblemBuilder {
    courses: Vec<Course>,
    slots: Vec<ExamSlot>,
    groups: Vec<StudentGroup>,
}

impl ExamProblemBuilder {
    /// Adds a course. Courses are searched in insertion order.
    pub fn add_course(&mut self, name: impl Into<String>) -> CourseId {
        self.courses.push(Course::new(name));
        CourseId(self.courses.len() - 1)
    }

    /// Adds a slot. Slots are tried in insertion order by the builder.
    pub fn add_slot(&mut self, slot: ExamSlot) -> SlotId {
        self.slots.push(slot);
        SlotId(self.slots.len() - 1)
    }

    pub fn add_group(&mut self, name: impl Into<String>, size: u32) -> GroupId {
        self.groups.push(StudentGroup::new(name, size));
        GroupId(self.groups.len() - 1)
    }

    /// Enrolls `group` in `course`, adding the group's size to the course's
    /// enrollment. Enrolling the same pair twice is a no-op.
    ///
    /// # Errors
    /// [`Error::UnknownGroup`] / [`Error::UnknownCourse`] for ids not
    /// issued by this builder.
    pub fn enroll(&mut self, group: GroupId, course: CourseId) -> Result<()> {
        let g = self
            .groups
            .get_mut(group.0)
            .ok_or(Error::UnknownGroup(group.0))?;
        let c = self
            .courses
            .get_mut(course.0)
            .ok_or(Error::UnknownCourse(course.0))?;

        if c.add_group(group, g.size()) {
            g.push_course(course);
        }
        Ok(())
    }

    pub fn build(self) -> ExamProblem {
        let n = self.courses.len();
        let mut together = vec![false; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                if self.courses[i].is_together_with(&self.courses[j]) {
                    together[i * n + j] = true;
                    together[j * n + i] = true;
                }
            }
        }

        tracing::debug!(
            courses = n,
            slots = self.slots.len(),
            groups = self.groups.len(),
            "built exam problem"
        );

        ExamProblem {
            courses: self.courses,
            slots: self.slots,
            groups: self.groups,
            together,
        }
    }
}

/// Text rendering of a schedule. See [`ExamProblem::render`].
pub struct ScheduleDisplay<'a> {
    problem: &'a ExamProblem,
    schedule: &'a Schedule,
}

impl fmt::Display for ScheduleDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Exam Schedule:")?;
        for (course, slot) in self.schedule.iter() {
            let name = self.problem.course(course).name();
            match slot {
                Some(id) => {
                    let s = self.problem.slot(id);
                    writeln!(
                        f,
                        "{} - {}, {}, {}",
                        name,
                        s.date(),
                        s.start_text(),
                        s.duration_text()
                    )?;
                }
                None => writeln!(f, "{name} - No valid exam")?,
            }
        }
        Ok(())
    }
}
