//! Exam slot: a dated time window with a seating capacity.

use super::time::{parse_duration, parse_time};
use crate::error::Result;
use chrono::NaiveDate;
use std::fmt;

/// A candidate time window for an exam.
///
/// The occupied interval on [`date`](Self::date) is
/// `[start, start + duration)` in minutes since midnight. The textual
/// forms are kept for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExamSlot {
    date: NaiveDate,
    start_text: String,
    duration_text: String,
    start: u32,
    duration: u32,
    capacity: u32,
}

impl ExamSlot {
    /// Creates a slot from its textual start time (`HH:MM`) and duration
    /// (`<h>h <m>m`).
    ///
    /// # Errors
    /// Returns a parse error if either text is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use exam_metaheur::model::ExamSlot;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    /// let slot = ExamSlot::new(date, "09:00", "2h 30m", 120).unwrap();
    /// assert_eq!(slot.start_minutes(), 540);
    /// assert_eq!(slot.end_minutes(), 690);
    /// ```
    pub fn new(
        date: NaiveDate,
        start: impl Into<String>,
        duration: impl Into<String>,
        capacity: u32,
    ) -> Result<Self> {
        let start_text = start.into();
        let duration_text = duration.into();
        let start = parse_time(&start_text)?;
        let duration = parse_duration(&duration_text)?;
        Ok(Self {
            date,
            start_text,
            duration_text,
            start,
            duration,
            capacity,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Start time in minutes since midnight.
    pub fn start_minutes(&self) -> u32 {
        self.start
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration
    }

    /// Exclusive end of the occupied interval.
    pub fn end_minutes(&self) -> u32 {
        self.start.saturating_add(self.duration)
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn start_text(&self) -> &str {
        &self.start_text
    }

    pub fn duration_text(&self) -> &str {
        &self.duration_text
    }

    /// Whether this slot ends no later than `other` starts.
    ///
    /// Does not look at dates.
    pub fn finishes_before(&self, other: &ExamSlot) -> bool {
        self.end_minutes() <= other.start
    }

    pub fn same_day(&self, other: &ExamSlot) -> bool {
        self.date == other.date
    }

    /// Whether both slots are on the same date and their intervals intersect.
    pub fn overlaps(&self, other: &ExamSlot) -> bool {
        self.same_day(other) && !(self.finishes_before(other) || other.finishes_before(self))
    }

    /// Whether the dates are exactly one calendar day apart, in either order.
    pub fn is_adjacent_day(&self, other: &ExamSlot) -> bool {
        (self.date - other.date).num_days().abs() == 1
    }
}

impl fmt::Display for ExamSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "exam on {} starting at {} lasting {} for up to {} students",
            self.date, self.start_text, self.duration_text, self.capacity
        )
    }
}
