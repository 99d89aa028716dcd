//! Schedule-level genetic operators.
//!
//! All operators act on the dense course-indexed representation of a
//! [`Schedule`] and draw every random choice from the caller's RNG.
//! Population seeding uses [`reassign_random`](crate::perturb::reassign_random).
//!
//! - [`single_point_crossover`]: prefix from one parent, suffix from the other
//! - [`subset_mutation`]: reassign a random subset of courses

use crate::model::{CourseId, Schedule, SlotId};
use rand::seq::index;
use rand::Rng;

/// Single-point crossover.
///
/// Draws a cut uniformly in `[1, n]`; the child takes `parent1`'s
/// assignments at positions before the cut and `parent2`'s from the cut
/// on. A cut of `n` copies `parent1`.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &Schedule,
    parent2: &Schedule,
    rng: &mut R,
) -> Schedule {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    if n == 0 {
        return parent1.clone();
    }

    let cut = rng.random_range(1..=n);
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&parent1.as_slice()[..cut]);
    child.extend_from_slice(&parent2.as_slice()[cut..]);
    Schedule::from_vec(child)
}

/// Subset mutation.
///
/// Picks `k` distinct courses with `k` uniform in `[1, n]`, then
/// reassigns each of them, independently with probability `rate`, to a
/// uniformly random slot.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn subset_mutation<R: Rng>(schedule: &mut Schedule, slot_count: usize, rate: f64, rng: &mut R) {
    let n = schedule.len();
    if n == 0 || slot_count == 0 {
        return;
    }

    let k = rng.random_range(1..=n);
    for course in index::sample(rng, n, k).iter() {
        if rng.random_bool(rate) {
            let slot = rng.random_range(0..slot_count);
            schedule.assign(CourseId(course), SlotId(slot));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn uniform(n: usize, slot: usize) -> Schedule {
        Schedule::from_vec(vec![Some(SlotId(slot)); n])
    }

    #[test]
    fn test_crossover_is_prefix_plus_suffix() {
        let mut rng = create_rng(42);
        let p1 = uniform(8, 1);
        let p2 = uniform(8, 2);
        for _ in 0..200 {
            let child = single_point_crossover(&p1, &p2, &mut rng);
            assert_eq!(child.len(), 8);
            let slots: Vec<_> = child.as_slice().iter().map(|s| s.unwrap().0).collect();
            let cut = slots.iter().position(|&s| s == 2).unwrap_or(8);
            // at least the first gene always comes from parent1
            assert!(cut >= 1);
            assert!(slots[..cut].iter().all(|&s| s == 1));
            assert!(slots[cut..].iter().all(|&s| s == 2));
        }
    }

    #[test]
    fn test_crossover_covers_full_cut_range() {
        let mut rng = create_rng(3);
        let p1 = uniform(3, 1);
        let p2 = uniform(3, 2);
        let mut seen_pure_parent1 = false;
        let mut seen_cut_one = false;
        for _ in 0..300 {
            let child = single_point_crossover(&p1, &p2, &mut rng);
            if child == p1 {
                seen_pure_parent1 = true;
            }
            if child.as_slice()[1] == Some(SlotId(2)) {
                seen_cut_one = true;
            }
        }
        assert!(seen_pure_parent1);
        assert!(seen_cut_one);
    }

    #[test]
    fn test_crossover_empty() {
        let mut rng = create_rng(42);
        let e = Schedule::unassigned(0);
        assert!(single_point_crossover(&e, &e, &mut rng).is_empty());
    }

    #[test]
    fn test_mutation_rate_zero_is_noop() {
        let mut rng = create_rng(42);
        let mut s = uniform(10, 0);
        subset_mutation(&mut s, 4, 0.0, &mut rng);
        assert_eq!(s, uniform(10, 0));
    }

    #[test]
    fn test_mutation_rate_one_touches_courses() {
        let mut rng = create_rng(42);
        let mut touched = false;
        for _ in 0..20 {
            let mut s = Schedule::unassigned(10);
            subset_mutation(&mut s, 4, 1.0, &mut rng);
            assert!(s.assigned_count() >= 1);
            assert!(s.assigned().all(|(_, slot)| slot.0 < 4));
            touched |= s.assigned_count() > 1;
        }
        assert!(touched);
    }
}
