//! Keyed records.

use core::borrow::Borrow;

/// A record with a stable key.
///
/// The slot store finds records by comparing this key, so lookups can use any
/// borrowed form of it (a `&str` for [`crate::ProductId`]).
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;

    /// Whether the record can be written out and read back unchanged.
    ///
    /// Records are accepted into a store without checks; persistence calls this
    /// before writing anything.
    fn check_storable(&self) -> crate::DomainResult<()> {
        Ok(())
    }

    /// Exact key match against a borrowed form of the id.
    fn has_id<Q>(&self, id: &Q) -> bool
    where
        Self::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        Borrow::<Q>::borrow(self.id()) == id
    }
}
