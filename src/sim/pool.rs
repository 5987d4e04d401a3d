//! Fixed-capacity entity pools
//!
//! Every entity kind lives in its own preallocated pool. Slots are toggled
//! active/inactive rather than allocated and freed; an inactive slot's
//! non-flag fields are stale and must not be read. Saturation is expected
//! backpressure: a spawn request with no free slot is silently dropped.
//!
//! Allocation always picks the lowest-index free slot. That ordering is part
//! of the contract (deterministic test scenarios rely on it), so do not swap
//! in a free list or FIFO scheme.

/// Implemented by every pooled entity.
pub trait PoolSlot {
    fn is_active(&self) -> bool;
    /// Marks the slot free for reuse. Safe to call on an inactive slot.
    fn deactivate(&mut self);
}

/// Fixed-capacity container of one entity kind.
#[derive(Debug, Clone)]
pub struct EntityPool<T> {
    slots: Vec<T>,
}

impl<T: PoolSlot + Default> EntityPool<T> {
    /// Preallocates `capacity` inactive slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| T::default()).collect(),
        }
    }
}

impl<T: PoolSlot> EntityPool<T> {
    /// Returns the lowest-index free slot for the caller to initialize, or
    /// `None` when the pool is saturated.
    pub fn spawn(&mut self) -> Option<&mut T> {
        self.slots.iter_mut().find(|slot| !slot.is_active())
    }

    /// Iterates active slots in index order.
    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|slot| slot.is_active())
    }

    /// Iterates active slots mutably in index order.
    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|slot| slot.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_active()).count()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Recycles every slot, e.g. on restart.
    pub fn deactivate_all(&mut self) {
        for slot in &mut self.slots {
            slot.deactivate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Default, Clone)]
    struct Marker {
        active: bool,
        tag: u32,
    }

    impl PoolSlot for Marker {
        fn is_active(&self) -> bool {
            self.active
        }
        fn deactivate(&mut self) {
            self.active = false;
        }
    }

    fn fill(pool: &mut EntityPool<Marker>, tag: u32) -> bool {
        match pool.spawn() {
            Some(slot) => {
                slot.active = true;
                slot.tag = tag;
                true
            }
            None => false,
        }
    }

    #[test]
    fn test_spawn_prefers_lowest_free_index() {
        let mut pool = EntityPool::<Marker>::new(4);
        for tag in 0..4 {
            assert!(fill(&mut pool, tag));
        }
        // Free slot 1, then respawn: the new entity must land in slot 1.
        pool.slots[1].deactivate();
        assert!(fill(&mut pool, 99));
        assert_eq!(pool.slots[1].tag, 99);
    }

    #[test]
    fn test_saturated_pool_drops_spawn() {
        let mut pool = EntityPool::<Marker>::new(2);
        assert!(fill(&mut pool, 0));
        assert!(fill(&mut pool, 1));
        assert!(!fill(&mut pool, 2));
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_deactivate_all_is_idempotent() {
        let mut pool = EntityPool::<Marker>::new(3);
        assert!(fill(&mut pool, 0));
        pool.deactivate_all();
        pool.deactivate_all();
        assert_eq!(pool.active_count(), 0);
    }

    proptest! {
        /// Active count never exceeds capacity under any spawn/deactivate mix.
        #[test]
        fn prop_occupancy_bounded(ops in prop::collection::vec(any::<u8>(), 0..200)) {
            let mut pool = EntityPool::<Marker>::new(8);
            for op in ops {
                if op % 3 == 0 {
                    let index = (op as usize / 3) % 8;
                    pool.slots[index].deactivate();
                } else {
                    let _ = fill(&mut pool, op as u32);
                }
                prop_assert!(pool.active_count() <= pool.capacity());
            }
        }
    }
}
