//! # ResourceEntity Trait
//!
//! The contract every record kind (customer, supplier, product, order) implements to be
//! kept in a [`ResourceStore`](crate::ResourceStore).
//!
//! # Provided Methods (Hooks)
//! - [`ResourceEntity::on_replace`]
//!
//! You do **not** need to implement the hook unless replacing a record has rules of its
//! own. The default implementation accepts every replacement.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be kept in a `ResourceStore`.
pub trait ResourceEntity: Clone + Debug + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Copy + Display + Debug;

    /// The error returned when a hook rejects an operation.
    type Error: std::error::Error + 'static;

    /// The identifier the record is stored under.
    fn id(&self) -> Self::Id;

    /// Called before `self` overwrites `previous` during an upsert.
    ///
    /// Returning an error aborts the upsert and leaves the stored record untouched.
    fn on_replace(&self, _previous: &Self) -> Result<(), Self::Error> {
        Ok(())
    }
}
