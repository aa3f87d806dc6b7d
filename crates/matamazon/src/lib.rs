//! # Matamazon
//!
//! > **An in-memory catalog and order manager.**
//!
//! Tracks customers, suppliers, products and orders, enforces the rules that tie them
//! together, and moves the catalog in and out of a line-oriented text format.
//!
//! ## Core Rules
//!
//! - Customers and suppliers share one id namespace.
//! - A product always belongs to a registered supplier, and never changes supplier.
//! - Placing an order takes stock; removing it gives the stock back.
//! - A customer, supplier or product cannot be removed while a live order references it.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! Identifiers and the four record types, each rendering as its canonical one-line record.
//!
//! ### 2. The Components ([`registry`], [`catalog`], [`ledger`], [`query`])
//! Each owns one collection, stored in a [`resource_store::ResourceStore`]. Components
//! never hold each other; the collaborator a call needs is passed in.
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! [`Matamazon`] owns one of each component and routes every operation.
//!
//! ### 4. The Edges ([`exchange`], [`commands`])
//! Catalog files, the orders export, and command logs.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info matamazon -l commands.log -s catalog.txt -o orders.json --os catalog.out
//! ```

pub mod catalog;
pub mod commands;
pub mod error;
pub mod exchange;
pub mod ledger;
pub mod lifecycle;
pub mod model;
pub mod query;
pub mod registry;

pub use error::{MatamazonError, Result};
pub use lifecycle::Matamazon;
