//! Dependency checks used to block removals while orders still reference a record.

use crate::error::MatamazonError;
use crate::model::{PartyId, ProductId, RecordKind};

/// A record that live orders may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    /// Orders placed by this customer.
    Customer(PartyId),
    /// Orders for a product owned by this supplier.
    Supplier(PartyId),
    /// Orders for this product.
    Product(ProductId),
}

impl Dependency {
    pub fn kind(&self) -> RecordKind {
        match self {
            Dependency::Customer(_) => RecordKind::Customer,
            Dependency::Supplier(_) => RecordKind::Supplier,
            Dependency::Product(_) => RecordKind::Product,
        }
    }

    /// The error reported when a removal of this record is blocked.
    pub fn blocked(&self) -> MatamazonError {
        let id = match *self {
            Dependency::Customer(id) | Dependency::Supplier(id) => id.0,
            Dependency::Product(id) => id.0,
        };
        MatamazonError::DependentOrderExists {
            kind: self.kind(),
            id,
        }
    }
}

/// Answers whether any live order depends on a record.
///
/// Removal operations take this as a parameter instead of reaching into the ledger, so
/// the registry and catalog can be exercised with a plain closure in tests:
///
/// ```rust
/// use matamazon::ledger::{Dependency, DependentOrders};
/// use matamazon::model::ProductId;
///
/// let no_orders = |_: Dependency| false;
/// assert!(!no_orders.has_dependent_orders(Dependency::Product(ProductId(3))));
/// ```
pub trait DependentOrders {
    fn has_dependent_orders(&self, dependency: Dependency) -> bool;
}

impl<F> DependentOrders for F
where
    F: Fn(Dependency) -> bool,
{
    fn has_dependent_orders(&self, dependency: Dependency) -> bool {
        self(dependency)
    }
}
