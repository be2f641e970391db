//! Domain Layer - Core Record Trait
//!
//! Every row of an admin list editor (partner banner, rank label) implements
//! this trait. The draft list and the sync controller are generic over it.

use std::fmt::Debug;

use crate::validation::ValidationIssue;

/// Identity carried by a record that has never been saved.
pub const SENTINEL_ID: u32 = 0;

/// Core trait for all editable list records
pub trait Record: Sized + Clone + PartialEq + Debug {
    /// Closed set of field edits this record accepts
    type Change: Clone + Debug;

    /// Human readable name used in logs and notices
    const KIND: &'static str;

    /// Success notice text used when the server sends none
    const SAVED_MESSAGE: &'static str;

    /// Returns the record's identity ([`SENTINEL_ID`] until first saved)
    fn id(&self) -> u32;

    /// Sets the identity handed out by the store
    fn assign_id(&mut self, id: u32);

    /// Resets the identity to [`SENTINEL_ID`]
    fn clear_id(&mut self) {
        self.assign_id(SENTINEL_ID);
    }

    fn is_new(&self) -> bool {
        self.id() == SENTINEL_ID
    }

    /// Applies `change` to `rows[index]`.
    ///
    /// The whole list is passed so that derived fields (rank-label slugs)
    /// can take sibling rows into account. `index` is always in bounds.
    fn apply(rows: &mut [Self], index: usize, change: Self::Change);

    /// Called on a record about to be appended at `position`.
    fn placed(&mut self, _position: usize) {}

    /// Called after two rows have been swapped.
    fn reorder(_rows: &mut [Self]) {}

    /// Returns every rule the list violates; empty means the list may be saved.
    fn validate(_rows: &[Self]) -> Vec<ValidationIssue> {
        Vec::new()
    }
}
