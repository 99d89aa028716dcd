//! Error type shared by the whole crate.

/// Errors raised while building a problem, parsing slot text, or
/// configuring an optimizer.
///
/// Search itself never fails: a poor run shows up as a high fitness
/// or unassigned courses, not as an `Err`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid start time `{0}`: expected HH:MM")]
    InvalidTime(String),

    #[error("invalid duration `{0}`: expected `<h>h <m>m`")]
    InvalidDuration(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown course id {0}")]
    UnknownCourse(usize),

    #[error("unknown student group id {0}")]
    UnknownGroup(usize),

    #[error("unknown exam slot id {0}")]
    UnknownSlot(usize),

    #[error("schedule has {actual} entries but the problem has {expected} courses")]
    ScheduleSizeMismatch { expected: usize, actual: usize },

    #[error("exact solver failed: {0}")]
    Solver(String),
}

pub type Result<T> = std::result::Result<T, Error>;
