//! Course → slot assignment.

use super::ids::{CourseId, SlotId};

/// A complete assignment of every course to a slot or to "unassigned".
///
/// Stored densely by [`CourseId`], so every course has exactly one entry.
/// A `Schedule` is a plain value: optimizers clone it whenever they derive
/// a variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    slots: Vec<Option<SlotId>>,
}

impl Schedule {
    /// Creates a schedule with every course unassigned.
    pub fn unassigned(course_count: usize) -> Self {
        Self {
            slots: vec![None; course_count],
        }
    }

    /// Wraps a raw assignment vector, one entry per course.
    ///
    /// Use [`ExamProblem::schedule_from`](super::ExamProblem::schedule_from)
    /// to validate the entries against a problem.
    pub fn from_vec(slots: Vec<Option<SlotId>>) -> Self {
        Self { slots }
    }

    /// Number of courses covered (assigned or not).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot assigned to `course`, or `None` if unassigned.
    ///
    /// # Panics
    /// Panics if `course` is out of range.
    #[inline]
    pub fn get(&self, course: CourseId) -> Option<SlotId> {
        self.slots[course.0]
    }

    #[inline]
    pub fn assign(&mut self, course: CourseId, slot: SlotId) {
        self.slots[course.0] = Some(slot);
    }

    #[inline]
    pub fn unassign(&mut self, course: CourseId) {
        self.slots[course.0] = None;
    }

    #[inline]
    pub fn set(&mut self, course: CourseId, slot: Option<SlotId>) {
        self.slots[course.0] = slot;
    }

    /// Exchanges the slots of two courses.
    #[inline]
    pub fn swap(&mut self, a: CourseId, b: CourseId) {
        self.slots.swap(a.0, b.0);
    }

    pub fn as_slice(&self) -> &[Option<SlotId>] {
        &self.slots
    }

    /// Iterates `(course, slot)` entries in course order.
    pub fn iter(&self) -> impl Iterator<Item = (CourseId, Option<SlotId>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, &slot)| (CourseId(i), slot))
    }

    /// Iterates `(course, slot)` for assigned courses only.
    pub fn assigned(&self) -> impl Iterator<Item = (CourseId, SlotId)> + '_ {
        self.iter().filter_map(|(c, s)| s.map(|s| (c, s)))
    }

    /// Iterates the courses left without a slot.
    pub fn unassigned_courses(&self) -> impl Iterator<Item = CourseId> + '_ {
        self.iter().filter(|(_, s)| s.is_none()).map(|(c, _)| c)
    }

    pub fn assigned_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn unassigned_count(&self) -> usize {
        self.len() - self.assigned_count()
    }

    /// Whether every course has a slot.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}
