//! # Store Errors
//!
//! Errors raised by the store itself, independent of any entity's own rules.

/// Errors that can occur within the resource store.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
}
