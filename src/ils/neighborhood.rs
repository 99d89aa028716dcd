//! Swap neighborhood.
//!
//! A neighbor of a schedule exchanges the slots of two distinct assigned
//! courses. Moves are ordered pairs, so `(a, b)` and `(b, a)` are distinct
//! moves producing the same neighbor.

use crate::model::{CourseId, Schedule};
use rand::Rng;

/// Exchange of the slots of two courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapMove {
    pub first: CourseId,
    pub second: CourseId,
}

impl SwapMove {
    /// Applies the move in place. Applying it twice restores the schedule.
    #[inline]
    pub fn apply(&self, schedule: &mut Schedule) {
        schedule.swap(self.first, self.second);
    }

    /// Returns the neighbor produced by this move.
    pub fn neighbor(&self, schedule: &Schedule) -> Schedule {
        let mut next = schedule.clone();
        self.apply(&mut next);
        next
    }
}

/// Enumerates every move: all ordered pairs of distinct assigned courses.
pub fn swap_moves(schedule: &Schedule) -> Vec<SwapMove> {
    let assigned: Vec<CourseId> = schedule.assigned().map(|(c, _)| c).collect();
    let mut moves = Vec::with_capacity(assigned.len() * assigned.len().saturating_sub(1));
    for &first in &assigned {
        for &second in &assigned {
            if first != second {
                moves.push(SwapMove { first, second });
            }
        }
    }
    moves
}

/// Draws one move uniformly from [`swap_moves`] without materializing it.
///
/// Returns `None` when fewer than two courses are assigned.
pub fn random_swap<R: Rng>(schedule: &Schedule, rng: &mut R) -> Option<SwapMove> {
    let assigned: Vec<CourseId> = schedule.assigned().map(|(c, _)| c).collect();
    let m = assigned.len();
    if m < 2 {
        return None;
    }
    let i = rng.random_range(0..m);
    let mut j = rng.random_range(0..m - 1);
    if j >= i {
        j += 1;
    }
    Some(SwapMove {
        first: assigned[i],
        second: assigned[j],
    })
}
