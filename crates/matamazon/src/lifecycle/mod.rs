//! # System Lifecycle & Orchestration
//!
//! Individual components are simple; wiring them together is where the rules that span
//! components live. This module provides [`Matamazon`], the owner of every component.
//!
//! **Key Responsibilities:**
//! 1. **Ownership** - one registry, one catalog and one ledger per system
//! 2. **Dependency passing** - each call hands a component exactly the collaborators it
//!    needs (the ledger for removal checks, the catalog for stock, the registry for
//!    supplier checks)
//! 3. **Loading and saving** - building a system from a catalog file and writing it back
//!
//! ## Dependency passing
//!
//! Components never hold references to each other. The system borrows its fields
//! separately for each call:
//!
//! ```rust,ignore
//! pub fn remove_object(&mut self, id: i64, kind: RecordKind) -> Result<Option<u32>> {
//!     match kind {
//!         RecordKind::Product => self.catalog.remove(id, &self.ledger)?,
//!         // ...
//!     }
//! }
//! ```
//!
//! ## Reloading
//!
//! Catalog files carry no orders. A system loaded from a file starts with an empty
//! ledger whose next order id is 1.

pub mod system;

pub use system::*;
