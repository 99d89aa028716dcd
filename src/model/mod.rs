//! Domain model for exam timetabling.
//!
//! - [`ExamSlot`]: dated time window with a seating capacity
//! - [`Course`]: exam to place, with its enrolled [`StudentGroup`]s
//! - [`ExamProblem`]: the immutable model shared by all search strategies
//! - [`Schedule`]: dense course → slot assignment, one entry per course

mod course;
mod ids;
mod problem;
mod schedule;
mod slot;
mod time;

pub use course::{Course, StudentGroup};
pub use ids::{CourseId, GroupId, SlotId};
pub use problem::{ExamProblem, ExamProblemBuilder, ScheduleDisplay};
pub use schedule::Schedule;
pub use slot::ExamSlot;
pub use time::{parse_duration, parse_time};
