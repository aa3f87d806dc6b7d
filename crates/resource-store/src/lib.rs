//! # Resource Store
//!
//! This crate provides the generic building blocks the catalog manager is assembled from:
//! a keyed, insertion-ordered store for any entity type, and the tracing setup shared by
//! binaries.
//!
//! ## Why a generic store?
//!
//! Customers, suppliers, products and orders all need the same plumbing: insert a record
//! under its id, refuse duplicates, replace a record in full, look it up, remove it, and
//! iterate in the order records were first stored. Writing that once behind the
//! [`ResourceEntity`] trait keeps the domain components down to their actual rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use resource_store::{ResourceEntity, ResourceStore};
//!
//! #[derive(Clone, Debug)]
//! struct Widget { id: u32, label: String }
//!
//! impl ResourceEntity for Widget {
//!     type Id = u32;
//!     type Error = std::convert::Infallible;
//!
//!     fn id(&self) -> u32 { self.id }
//! }
//!
//! let mut store = ResourceStore::new();
//! store.insert(Widget { id: 7, label: "gear".into() }).unwrap();
//! assert_eq!(store.get(7).map(|w| w.label.as_str()), Some("gear"));
//! ```
//!
//! ## Ordering
//!
//! Every record gets a sequence number the first time it is stored. Replacing a record
//! keeps its number, so [`ResourceStore::iter`] always reflects first-insertion order and
//! callers can use [`ResourceStore::iter_sequenced`] as an explicit tie-breaker.
//!
//! ## Observability
//!
//! Every mutation is logged with the `tracing` crate, tagged with the short entity type
//! name. See [`telemetry`] for the subscriber setup.

pub mod entity;
pub mod error;
pub mod store;
pub mod telemetry;

pub use entity::ResourceEntity;
pub use error::StoreError;
pub use store::ResourceStore;
pub use telemetry::setup_tracing;
