//! Type-safe identifiers and record kinds.

use crate::error::MatamazonError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        /// Rejects negative and out of range ids with `InvalidIdentifier`.
        impl TryFrom<i64> for $name {
            type Error = MatamazonError;

            fn try_from(id: i64) -> Result<Self, Self::Error> {
                u32::try_from(id)
                    .map(Self)
                    .map_err(|_| MatamazonError::InvalidIdentifier(id))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Identifier shared by customers and suppliers (one namespace for both).
    PartyId
);
define_id!(
    /// Identifier of a catalog product.
    ProductId
);
define_id!(
    /// Identifier of a placed order, assigned by the ledger.
    OrderId
);

/// Which side of the party namespace an id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartyKind {
    Customer,
    Supplier,
}

/// Every kind of record the system stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Customer,
    Supplier,
    Product,
    Order,
}

impl From<PartyKind> for RecordKind {
    fn from(kind: PartyKind) -> Self {
        match kind {
            PartyKind::Customer => RecordKind::Customer,
            PartyKind::Supplier => RecordKind::Supplier,
        }
    }
}

impl Display for PartyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        RecordKind::from(*self).fmt(f)
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Customer => "customer",
            RecordKind::Supplier => "supplier",
            RecordKind::Product => "product",
            RecordKind::Order => "order",
        };
        f.write_str(name)
    }
}

/// Parses `customer`, `Supplier`, ` ORDER ` and so on (case and surrounding whitespace
/// are ignored).
impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "customer" => Ok(RecordKind::Customer),
            "supplier" => Ok(RecordKind::Supplier),
            "product" => Ok(RecordKind::Product),
            "order" => Ok(RecordKind::Order),
            other => Err(format!("unknown record kind '{other}'")),
        }
    }
}
