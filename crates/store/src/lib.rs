//! Record storage: the in-memory slot store and its snapshot persistence.

pub mod error;
pub mod slots;
pub mod snapshot;

pub use error::PersistenceError;
pub use slots::{Placement, SlotStore, StoreStats, GROWTH_INCREMENT, INITIAL_CAPACITY};
pub use snapshot::{
    FRESH_LOAD_SLOTS, FileSnapshotStore, InMemorySnapshotStore, SaveReport, SnapshotStore,
};
