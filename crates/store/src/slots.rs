//! Growable slot store with tombstones.
//!
//! Records live in an ordered sequence of optional slots. Deleting a record
//! clears its slot (a tombstone) and slots are never compacted, so a record's
//! slot index is stable until it is deleted. Lookups are linear scans that stop
//! at the first matching slot.

use core::borrow::Borrow;

use missionstock_core::{DomainError, DomainResult, Entity};

/// Slot count of a fresh store.
pub const INITIAL_CAPACITY: usize = 5;
/// Slots appended each time a full store grows.
pub const GROWTH_INCREMENT: usize = 5;

/// Where `create` put a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub slot: usize,
    /// New slot count when the store had to grow to fit the record.
    pub grown_to: Option<usize>,
}

impl core::fmt::Display for Placement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.grown_to {
            None => write!(f, "record added at slot {}", self.slot),
            Some(capacity) => write!(
                f,
                "store grown to {capacity} slots; record added at new slot {}",
                self.slot
            ),
        }
    }
}

/// Occupancy snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub live: usize,
    pub capacity: usize,
}

impl StoreStats {
    pub fn occupancy_percent(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.live as f64 * 100.0 / self.capacity as f64
    }
}

impl core::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "active records: {}/{} ({:.1}%)",
            self.live,
            self.capacity,
            self.occupancy_percent()
        )
    }
}

/// In-memory record store.
///
/// Single-owner: mutation takes `&mut self`, and no uniqueness is enforced on ids
/// (a duplicate id is stored, and lookups return the earliest slot).
#[derive(Debug, Clone)]
pub struct SlotStore<T> {
    slots: Vec<Option<T>>,
    growth: usize,
}

impl<T> Default for SlotStore<T> {
    fn default() -> Self {
        Self::with_capacity(INITIAL_CAPACITY, GROWTH_INCREMENT)
    }
}

impl<T> SlotStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with `initial` empty slots, growing by `growth` (at least 1).
    pub fn with_capacity(initial: usize, growth: usize) -> Self {
        let mut slots = Vec::with_capacity(initial);
        slots.resize_with(initial, || None);
        Self {
            slots,
            growth: growth.max(1),
        }
    }

    /// Wrap an existing slot sequence (e.g. one restored from a snapshot).
    pub fn from_slots(slots: Vec<Option<T>>) -> Self {
        Self {
            slots,
            growth: GROWTH_INCREMENT,
        }
    }

    /// The full slot sequence, empty slots included.
    pub fn read(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Install a new slot sequence wholesale, dropping the current one.
    pub fn replace_slots(&mut self, slots: Vec<Option<T>>) {
        self.slots = slots;
    }

    /// Live records in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }

    /// Number of live (non-empty) slots.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total slot count, empty slots included.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            live: self.len(),
            capacity: self.capacity(),
        }
    }
}

impl<T: Entity> SlotStore<T> {
    fn position<Q>(&self, id: &Q) -> Option<usize>
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|record| record.has_id(id)))
    }

    /// Store `record` in the first empty slot, growing the store when full.
    pub fn create(&mut self, record: T) -> Placement {
        if let Some(slot) = self.slots.iter().position(Option::is_none) {
            tracing::debug!(id = ?record.id(), slot, "record stored");
            self.slots[slot] = Some(record);
            return Placement {
                slot,
                grown_to: None,
            };
        }

        let slot = self.slots.len();
        self.slots.resize_with(slot + self.growth, || None);
        tracing::debug!(
            id = ?record.id(),
            slot,
            capacity = self.slots.len(),
            "store grown; record stored"
        );
        self.slots[slot] = Some(record);
        Placement {
            slot,
            grown_to: Some(self.slots.len()),
        }
    }

    /// First record whose id equals `id` exactly.
    pub fn read_by_id<Q>(&self, id: &Q) -> Option<&T>
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(id).and_then(|slot| self.slots[slot].as_ref())
    }

    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(id).is_some()
    }

    /// Replace the first record whose id equals `id`, returning its slot.
    ///
    /// The replacement is stored as given, even when it carries a different id
    /// than the one it was looked up by.
    pub fn update<Q>(&mut self, id: &Q, record: T) -> DomainResult<usize>
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let slot = self.position(id).ok_or_else(DomainError::not_found)?;

        if let Some(current) = &self.slots[slot] {
            if current.id() != record.id() {
                tracing::warn!(
                    current = ?current.id(),
                    replacement = ?record.id(),
                    slot,
                    "replacement record carries a different id"
                );
            }
        }

        tracing::debug!(id = ?record.id(), slot, "record replaced");
        self.slots[slot] = Some(record);
        Ok(slot)
    }

    /// Clear the first slot whose record id equals `id` and return the record.
    pub fn delete<Q>(&mut self, id: &Q) -> Option<T>
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let slot = self.position(id)?;
        let removed = self.slots[slot].take();
        tracing::debug!(slot, "record deleted");
        removed
    }
}
