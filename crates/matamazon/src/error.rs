//! Error types for the catalog manager.

use crate::model::{PartyId, ProductId, RecordKind};
use thiserror::Error;

/// Errors that can occur during catalog, ledger and exchange operations.
///
/// Order placement never fails for an unknown product or short stock: those are
/// [`OrderOutcome`](crate::ledger::OrderOutcome) values, not errors.
#[derive(Debug, Error)]
pub enum MatamazonError {
    /// A negative (or out of range) identifier was supplied.
    #[error("Invalid id: {0}")]
    InvalidIdentifier(i64),

    /// A negative or NaN price or total price was supplied.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// The id is already taken by a customer or a supplier.
    #[error("ID already exists: {0}")]
    DuplicateIdentifier(PartyId),

    /// A product referenced a supplier that is not registered.
    #[error("Supplier does not exist: {0}")]
    UnknownSupplier(PartyId),

    /// A product update tried to move the product to another supplier.
    #[error("Product {product} belongs to supplier {existing}, not {requested}")]
    SupplierMismatch {
        product: ProductId,
        existing: PartyId,
        requested: PartyId,
    },

    /// Removal blocked because a live order still references the record.
    #[error("Dependent order still exists for {kind} {id}")]
    DependentOrderExists { kind: RecordKind, id: u32 },

    /// Giving an order's units back would push the product's stock past `u32::MAX`.
    #[error("Restoring {quantity} units to product {product} would overflow its stock of {stock}")]
    StockOverflow {
        product: ProductId,
        stock: u32,
        quantity: u32,
    },

    /// Every order id has been handed out.
    #[error("No order ids left")]
    OrderIdsExhausted,

    /// A line carried a record marker but not a well-formed record.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// A command log line with a known verb but unusable arguments.
    #[error("Invalid command '{line}': {reason}")]
    InvalidCommand { line: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(#[from] resource_store::StoreError),
}

pub type Result<T> = std::result::Result<T, MatamazonError>;
