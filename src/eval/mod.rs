//! Constraint evaluation.
//!
//! Every search strategy compares schedules exclusively through
//! [`Evaluator::evaluate`]:
//!
//! | Violation                                   | Penalty           |
//! |---------------------------------------------|-------------------|
//! | course unassigned                           | `hard - light`    |
//! | slot capacity below enrollment              | `hard`            |
//! | together course overlapping in time         | `hard`            |
//! | together course same day, no overlap        | `2 × light`       |
//! | together course on an adjacent day          | `light`           |
//! | start time (minutes)                        | `× start_time_factor` |

mod evaluator;
mod weights;

pub use evaluator::{Evaluator, PenaltyBreakdown};
pub use weights::{Penalty, PenaltyWeights};
