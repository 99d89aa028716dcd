//! Courses and the student groups enrolled in them.

use super::ids::{CourseId, GroupId};
use std::collections::BTreeSet;

/// A cohort of students that sit the same set of exams.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudentGroup {
    name: String,
    size: u32,
    courses: Vec<CourseId>,
}

impl StudentGroup {
    pub(crate) fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into(),
            size,
            courses: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared number of students in the group.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Courses taken by this group, in enrollment order.
    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    pub(crate) fn push_course(&mut self, course: CourseId) {
        self.courses.push(course);
    }
}

/// A course needing one exam slot.
///
/// Enrollment is the sum of the sizes of all linked groups and is
/// accumulated as groups are linked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    name: String,
    groups: BTreeSet<GroupId>,
    enrollment: u32,
}

impl Course {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: BTreeSet::new(),
            enrollment: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn groups(&self) -> &BTreeSet<GroupId> {
        &self.groups
    }

    /// Total number of students sitting this course's exam.
    pub fn enrollment(&self) -> u32 {
        self.enrollment
    }

    /// Two courses are together when at least one group takes both.
    pub fn is_together_with(&self, other: &Course) -> bool {
        !self.groups.is_disjoint(&other.groups)
    }

    /// Links a group. Returns `false` if it was already linked, in which
    /// case enrollment is left unchanged.
    pub(crate) fn add_group(&mut self, group: GroupId, size: u32) -> bool {
        if !self.groups.insert(group) {
            return false;
        }
        self.enrollment = self.enrollment.saturating_add(size);
        true
    }
}
