//! Problem fixtures shared by unit tests.

use crate::model::{CourseId, ExamProblem, ExamProblemBuilder, ExamSlot, GroupId, SlotId};
use chrono::NaiveDate;
use std::collections::HashMap;

pub(crate) fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

/// Incremental problem builder that creates groups on first mention.
pub(crate) struct ProblemFixture {
    builder: ExamProblemBuilder,
    groups: HashMap<String, GroupId>,
}

impl ProblemFixture {
    pub(crate) fn new() -> Self {
        Self {
            builder: ExamProblem::builder(),
            groups: HashMap::new(),
        }
    }

    pub(crate) fn course(&mut self, name: &str, groups: &[(&str, u32)]) -> CourseId {
        let course = self.builder.add_course(name);
        for &(group, size) in groups {
            let id = match self.groups.get(group) {
                Some(&id) => id,
                None => {
                    let id = self.builder.add_group(group, size);
                    self.groups.insert(group.to_string(), id);
                    id
                }
            };
            self.builder.enroll(id, course).unwrap();
        }
        course
    }

    pub(crate) fn slot(
        &mut self,
        date: NaiveDate,
        start: &str,
        duration: &str,
        capacity: u32,
    ) -> SlotId {
        self.builder
            .add_slot(ExamSlot::new(date, start, duration, capacity).unwrap())
    }

    pub(crate) fn build(self) -> ExamProblem {
        self.builder.build()
    }
}

/// Two together courses and two slots (`a` is slot 0, `b` is slot 1),
/// each given as `(day, start, duration)`.
pub(crate) fn pair_problem(
    a: (u32, &str, &str),
    b: (u32, &str, &str),
) -> (ExamProblem, [CourseId; 2]) {
    let mut f = ProblemFixture::new();
    let ca = f.course("A", &[("G", 10)]);
    let cb = f.course("B", &[("G", 10)]);
    f.slot(day(a.0), a.1, a.2, 100);
    f.slot(day(b.0), b.1, b.2, 100);
    (f.build(), [ca, cb])
}

/// `courses` courses where neighbors share a group, and `slots` slots of
/// two hours, two per day (09:00 and 14:00).
pub(crate) fn grid_problem(courses: usize, slots: usize) -> ExamProblem {
    let mut f = ProblemFixture::new();
    for i in 0..courses {
        let left = format!("G{i}");
        let right = format!("G{}", i + 1);
        f.course(&format!("C{i}"), &[(left.as_str(), 20), (right.as_str(), 15)]);
    }
    for j in 0..slots {
        let start = if j % 2 == 0 { "09:00" } else { "14:00" };
        f.slot(day(1 + j as u32 / 2), start, "2h", 60);
    }
    f.build()
}
