//! Random single-course moves shared by the GA and ILS.

use crate::model::{CourseId, Schedule, SlotId};
use rand::Rng;

/// Reassigns one uniformly chosen course to one uniformly chosen slot.
///
/// No-op when there are no courses or no slots.
pub fn reassign_random<R: Rng>(schedule: &mut Schedule, slot_count: usize, rng: &mut R) {
    if schedule.is_empty() || slot_count == 0 {
        return;
    }
    let course = rng.random_range(0..schedule.len());
    let slot = rng.random_range(0..slot_count);
    schedule.assign(CourseId(course), SlotId(slot));
}
