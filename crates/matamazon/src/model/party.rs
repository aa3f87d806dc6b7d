//! Customers and suppliers.
//!
//! Both kinds carry the same fields and share one id namespace; a supplier's `city` is
//! the origin city its products ship from.

use super::{PartyId, PartyKind};
use crate::error::{MatamazonError, Result};
use resource_store::ResourceEntity;
use std::fmt;

macro_rules! define_party {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub id: PartyId,
            pub name: String,
            pub city: String,
            pub address: String,
        }

        impl $name {
            /// Creates a new instance.
            ///
            /// # Errors
            /// `InvalidIdentifier` if `id` is negative.
            pub fn new(
                id: i64,
                name: impl Into<String>,
                city: impl Into<String>,
                address: impl Into<String>,
            ) -> Result<Self> {
                Ok(Self {
                    id: PartyId::try_from(id)?,
                    name: name.into(),
                    city: city.into(),
                    address: address.into(),
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "{}(id={}, name='{}', city='{}', address='{}')",
                    stringify!($name),
                    self.id,
                    self.name,
                    self.city,
                    self.address
                )
            }
        }

        impl ResourceEntity for $name {
            type Id = PartyId;
            type Error = MatamazonError;

            fn id(&self) -> PartyId {
                self.id
            }
        }
    };
}

define_party!(
    /// A registered customer. Immutable once registered.
    Customer
);
define_party!(
    /// A registered supplier. Immutable once registered.
    Supplier
);

/// Either kind of party, as accepted by the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum Party {
    Customer(Customer),
    Supplier(Supplier),
}

impl Party {
    pub fn id(&self) -> PartyId {
        match self {
            Party::Customer(c) => c.id,
            Party::Supplier(s) => s.id,
        }
    }

    pub fn kind(&self) -> PartyKind {
        match self {
            Party::Customer(_) => PartyKind::Customer,
            Party::Supplier(_) => PartyKind::Supplier,
        }
    }
}

impl From<Customer> for Party {
    fn from(customer: Customer) -> Self {
        Party::Customer(customer)
    }
}

impl From<Supplier> for Party {
    fn from(supplier: Supplier) -> Self {
        Party::Supplier(supplier)
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Customer(c) => fmt::Display::fmt(c, f),
            Party::Supplier(s) => fmt::Display::fmt(s, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_record_format() {
        let customer = Customer::new(42, "Daniel Elgarici", "Karmiel", "123 Main Street").unwrap();
        assert_eq!(
            customer.to_string(),
            "Customer(id=42, name='Daniel Elgarici', city='Karmiel', address='123 Main Street')"
        );
    }

    #[test]
    fn test_supplier_rejects_negative_id() {
        let err = Supplier::new(-3, "Acme", "Haifa", "1 St").unwrap_err();
        assert!(matches!(err, MatamazonError::InvalidIdentifier(-3)));
    }

    #[test]
    fn test_party_reports_kind() {
        let party = Party::from(Supplier::new(1, "Acme", "Haifa", "1 St").unwrap());
        assert_eq!(party.kind(), PartyKind::Supplier);
        assert_eq!(party.id(), PartyId(1));
    }
}
