//! Item id allocation
//!
//! Ids start from wall-clock milliseconds and are bumped past anything already
//! issued or present, so two adds within the same millisecond never collide.
//! Issued ids stay within [`MAX_SAFE_ID`] so a browser can store them exactly.

use std::collections::HashSet;

use crate::domain::{Entity, ItemId, MAX_SAFE_ID};

#[derive(Debug, Clone, Default)]
pub(crate) struct IdAllocator {
    last_issued: Option<u64>,
}

impl IdAllocator {
    pub(crate) fn next<E: Entity<Id = ItemId>>(&mut self, now_millis: u64, existing: &[E]) -> ItemId {
        let floor = existing
            .iter()
            .map(|entity| entity.id().0)
            .chain(self.last_issued)
            .max()
            .map_or(0, |max| max.saturating_add(1));
        let candidate = now_millis.max(floor);
        let id = if candidate <= MAX_SAFE_ID {
            candidate
        } else {
            lowest_unused(existing)
        };
        self.last_issued = Some(id);
        ItemId(id)
    }
}

/// Smallest id not held by any entity; only reached once the safe range is exhausted at the top
fn lowest_unused<E: Entity<Id = ItemId>>(existing: &[E]) -> u64 {
    let taken: HashSet<u64> = existing.iter().map(|entity| entity.id().0).collect();
    (0..).find(|id| !taken.contains(id)).unwrap_or_default()
}

pub(crate) fn now_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Item, Position};

    fn item(id: u64) -> Item {
        Item::new(ItemId(id), "x".to_string(), Category::Other, 0.0, Position::default())
    }

    #[test]
    fn test_uses_clock_when_ahead() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.next(1_000, &[item(5)]), ItemId(1_000));
    }

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let mut ids = IdAllocator::default();
        let first = ids.next::<Item>(1_000, &[]);
        let second = ids.next::<Item>(1_000, &[]);
        assert_eq!(first, ItemId(1_000));
        assert_eq!(second, ItemId(1_001));
    }

    #[test]
    fn test_bumps_past_existing_ids() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.next(10, &[item(50), item(20)]), ItemId(51));
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut ids = IdAllocator::default();
        ids.next::<Item>(2_000, &[]);
        assert_eq!(ids.next::<Item>(1_500, &[]), ItemId(2_001));
    }

    #[test]
    fn test_top_of_safe_range_falls_back_to_unused_id() {
        let mut ids = IdAllocator::default();
        let existing = [item(MAX_SAFE_ID), item(0), item(1)];
        let id = ids.next(1_000, &existing);
        assert_eq!(id, ItemId(2));

        // Later calls keep finding free slots instead of repeating
        let mut existing = existing.to_vec();
        existing.push(item(id.0));
        assert_eq!(ids.next(1_000, &existing), ItemId(3));
    }
}
