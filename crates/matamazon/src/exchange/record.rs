//! Parser for the one-line catalog records.
//!
//! Only the three fixed shapes below are accepted; anything else carrying a record marker
//! is rejected as malformed:
//!
//! ```text
//! Customer(id=<int>, name='<str>', city='<str>', address='<str>')
//! Supplier(id=<int>, name='<str>', city='<str>', address='<str>')
//! Product(id=<int>, name='<str>', price=<float>, supplier_id=<int>, quantity=<int>)
//! ```
//!
//! String fields run to the delimiter that introduces the next field, so names may
//! contain quotes and commas.

use crate::error::{MatamazonError, Result};
use crate::model::{Customer, Party, Product, Supplier};
use regex::{Captures, Regex};
use std::str::FromStr;
use std::sync::LazyLock;

static PARTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Customer|Supplier)\(id=(-?\d+), name='(.*)', city='(.*)', address='(.*)'\)$")
        .expect("party record pattern is valid")
});

static PRODUCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Product\(id=(-?\d+), name='(.*)', price=([^,]+), supplier_id=(-?\d+), quantity=(\d+)\)$",
    )
    .expect("product record pattern is valid")
});

/// Which record a line announces, judged by its leading marker only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Party,
    Product,
}

impl Marker {
    /// The marker a (trimmed) line starts with, if any.
    pub fn of(line: &str) -> Option<Marker> {
        if line.starts_with("Customer") || line.starts_with("Supplier") {
            Some(Marker::Party)
        } else if line.starts_with("Product") {
            Some(Marker::Product)
        } else {
            None
        }
    }
}

/// Parses a customer or supplier record.
///
/// # Errors
/// `MalformedRecord` if the line does not have the record shape; otherwise whatever the
/// entity constructor rejects (e.g. `InvalidIdentifier` for a negative id).
pub fn parse_party(line: &str) -> Result<Party> {
    let caps = PARTY.captures(line).ok_or_else(|| malformed(line))?;
    let id: i64 = field(&caps, 2, line)?;
    let (name, city, address) = (&caps[3], &caps[4], &caps[5]);
    match &caps[1] {
        "Customer" => Ok(Customer::new(id, name, city, address)?.into()),
        _ => Ok(Supplier::new(id, name, city, address)?.into()),
    }
}

/// Parses a product record.
///
/// # Errors
/// `MalformedRecord` if the line does not have the record shape; otherwise whatever
/// [`Product::new`] rejects.
pub fn parse_product(line: &str) -> Result<Product> {
    let caps = PRODUCT.captures(line).ok_or_else(|| malformed(line))?;
    Product::new(
        field(&caps, 1, line)?,
        &caps[2],
        field(&caps, 3, line)?,
        field(&caps, 4, line)?,
        field(&caps, 5, line)?,
    )
}

fn field<T: FromStr>(caps: &Captures<'_>, index: usize, line: &str) -> Result<T> {
    caps[index].trim().parse().map_err(|_| malformed(line))
}

fn malformed(line: &str) -> MatamazonError {
    MatamazonError::MalformedRecord(line.to_string())
}
