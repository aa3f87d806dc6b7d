//! Results of order placement.

use crate::model::OrderId;
use std::fmt;

/// What happened to an order request.
///
/// An unknown product or short stock is an expected answer, not an error, so these come
/// back as values. `Display` renders the message shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOutcome {
    /// The order was stored under the given id and stock was taken.
    Accepted(OrderId),
    /// No product has the requested id. Nothing changed.
    ProductNotFound,
    /// The product has fewer units than requested. Nothing changed.
    InsufficientStock,
}

impl OrderOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            OrderOutcome::Accepted(_) => "The order has been accepted in the system",
            OrderOutcome::ProductNotFound => "The product does not exist in the system",
            OrderOutcome::InsufficientStock => {
                "The quantity requested for this product is greater than the quantity in stock"
            }
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, OrderOutcome::Accepted(_))
    }
}

impl fmt::Display for OrderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
