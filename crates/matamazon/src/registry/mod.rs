//! # Entity Registry
//!
//! Owns customers and suppliers.
//!
//! ## Overview
//!
//! Customers and suppliers live in separate stores but share one id namespace: an id
//! used by a customer can never be registered as a supplier, and the other way round.
//! Registered parties are never modified, only removed, and removal is refused while a
//! live order depends on the party.
//!
//! ## Usage
//!
//! ```rust
//! use matamazon::ledger::Dependency;
//! use matamazon::model::{Customer, PartyKind, Supplier};
//! use matamazon::registry::EntityRegistry;
//!
//! # fn main() -> matamazon::Result<()> {
//! let mut registry = EntityRegistry::new();
//! registry.register(Supplier::new(1, "Acme", "Haifa", "1 St")?.into())?;
//!
//! // Id 1 is taken by the supplier.
//! assert!(registry.register(Customer::new(1, "Dan", "Karmiel", "2 St")?.into()).is_err());
//!
//! let no_orders = |_: Dependency| false;
//! registry.remove(1, PartyKind::Supplier, &no_orders)?;
//! # Ok(())
//! # }
//! ```

use crate::error::{MatamazonError, Result};
use crate::ledger::{Dependency, DependentOrders};
use crate::model::{Customer, Party, PartyId, PartyKind, Supplier};
use resource_store::ResourceStore;
use tracing::{instrument, warn};

#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    customers: ResourceStore<Customer>,
    suppliers: ResourceStore<Supplier>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a customer or a supplier.
    ///
    /// # Errors
    /// `DuplicateIdentifier` if the id is already used by any customer or supplier.
    #[instrument(skip(self))]
    pub fn register(&mut self, party: Party) -> Result<()> {
        let id = party.id();
        if self.contains(id) {
            warn!(%id, "Id already registered");
            return Err(MatamazonError::DuplicateIdentifier(id));
        }
        let inserted = match party {
            Party::Customer(customer) => self.customers.insert(customer),
            Party::Supplier(supplier) => self.suppliers.insert(supplier),
        };
        inserted.map_err(|_| MatamazonError::DuplicateIdentifier(id))
    }

    /// Removes a customer or supplier. Removing an unknown id is not an error.
    ///
    /// # Errors
    /// - `InvalidIdentifier` if `id` is negative.
    /// - `DependentOrderExists` if a live order was placed by the customer, or is for a
    ///   product of the supplier.
    #[instrument(skip(self, orders))]
    pub fn remove(
        &mut self,
        id: i64,
        kind: PartyKind,
        orders: &impl DependentOrders,
    ) -> Result<()> {
        let id = PartyId::try_from(id)?;
        let dependency = match kind {
            PartyKind::Customer => Dependency::Customer(id),
            PartyKind::Supplier => Dependency::Supplier(id),
        };
        if orders.has_dependent_orders(dependency) {
            warn!("Removal blocked by dependent order");
            return Err(dependency.blocked());
        }
        match kind {
            PartyKind::Customer => {
                self.customers.remove(id);
            }
            PartyKind::Supplier => {
                self.suppliers.remove(id);
            }
        }
        Ok(())
    }

    /// Looks up a party of the given kind.
    pub fn lookup(&self, id: PartyId, kind: PartyKind) -> Option<Party> {
        match kind {
            PartyKind::Customer => self.customer(id).cloned().map(Party::from),
            PartyKind::Supplier => self.supplier(id).cloned().map(Party::from),
        }
    }

    pub fn customer(&self, id: PartyId) -> Option<&Customer> {
        self.customers.get(id)
    }

    pub fn supplier(&self, id: PartyId) -> Option<&Supplier> {
        self.suppliers.get(id)
    }

    /// True if the id is used by a customer or a supplier.
    pub fn contains(&self, id: PartyId) -> bool {
        self.customers.contains(id) || self.suppliers.contains(id)
    }

    pub fn customers(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.customers.iter()
    }

    pub fn suppliers(&self) -> impl Iterator<Item = &Supplier> + '_ {
        self.suppliers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_orders(_: Dependency) -> bool {
        false
    }

    fn dan() -> Party {
        Customer::new(2, "Dan", "Karmiel", "2 St").unwrap().into()
    }

    fn acme() -> Party {
        Supplier::new(1, "Acme", "Haifa", "1 St").unwrap().into()
    }

    #[test]
    fn test_ids_are_unique_across_kinds() {
        let mut registry = EntityRegistry::new();
        registry.register(dan()).unwrap();
        registry.register(acme()).unwrap();

        let clash = Supplier::new(2, "Other", "Eilat", "3 St").unwrap();
        assert!(matches!(
            registry.register(clash.into()),
            Err(MatamazonError::DuplicateIdentifier(PartyId(2)))
        ));
        assert!(matches!(
            registry.register(acme()),
            Err(MatamazonError::DuplicateIdentifier(PartyId(1)))
        ));
        assert!(registry.supplier(PartyId(2)).is_none());
    }

    #[test]
    fn test_lookup_respects_kind() {
        let mut registry = EntityRegistry::new();
        registry.register(dan()).unwrap();

        assert_eq!(registry.lookup(PartyId(2), PartyKind::Customer), Some(dan()));
        assert_eq!(registry.lookup(PartyId(2), PartyKind::Supplier), None);
    }

    #[test]
    fn test_remove_blocked_by_dependent_order() {
        let mut registry = EntityRegistry::new();
        registry.register(dan()).unwrap();

        let dan_has_orders = |dep: Dependency| dep == Dependency::Customer(PartyId(2));
        let err = registry.remove(2, PartyKind::Customer, &dan_has_orders).unwrap_err();
        assert!(matches!(
            err,
            MatamazonError::DependentOrderExists { id: 2, .. }
        ));
        assert!(registry.customer(PartyId(2)).is_some());

        registry.remove(2, PartyKind::Customer, &no_orders).unwrap();
        assert!(registry.customer(PartyId(2)).is_none());
    }

    #[test]
    fn test_remove_negative_or_absent() {
        let mut registry = EntityRegistry::new();
        assert!(matches!(
            registry.remove(-1, PartyKind::Supplier, &no_orders),
            Err(MatamazonError::InvalidIdentifier(-1))
        ));
        assert!(registry.remove(77, PartyKind::Supplier, &no_orders).is_ok());
    }

    #[test]
    fn test_remove_wrong_kind_keeps_party() {
        let mut registry = EntityRegistry::new();
        registry.register(acme()).unwrap();

        registry.remove(1, PartyKind::Customer, &no_orders).unwrap();
        assert!(registry.supplier(PartyId(1)).is_some());
    }
}
