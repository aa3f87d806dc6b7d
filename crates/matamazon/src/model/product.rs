//! Represents a product sold through the catalog.
//!
//! # Resource Store
//! [`Product`] implements [`ResourceEntity`], allowing it to be kept in a
//! [`ResourceStore`](resource_store::ResourceStore). Its
//! [`on_replace`](ResourceEntity::on_replace) hook enforces that a product never moves to
//! another supplier.

use super::{format_float, PartyId, ProductId};
use crate::error::{MatamazonError, Result};
use resource_store::ResourceEntity;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub supplier_id: PartyId,
    pub quantity: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique product identifier
    /// * `name` - Product name
    /// * `price` - Unit price, must not be negative
    /// * `supplier_id` - Supplier that provides the product
    /// * `quantity` - Units in stock
    ///
    /// # Errors
    /// `InvalidIdentifier` if `id` or `supplier_id` is negative, then `InvalidPrice` if
    /// `price` is negative or NaN.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: f64,
        supplier_id: i64,
        quantity: u32,
    ) -> Result<Self> {
        let id = ProductId::try_from(id)?;
        let supplier_id = PartyId::try_from(supplier_id)?;
        if price.is_nan() || price < 0.0 {
            return Err(MatamazonError::InvalidPrice(price));
        }
        Ok(Self {
            id,
            name: name.into(),
            price,
            supplier_id,
            quantity,
        })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product(id={}, name='{}', price={}, supplier_id={}, quantity={})",
            self.id,
            self.name,
            format_float(self.price),
            self.supplier_id,
            self.quantity
        )
    }
}

impl ResourceEntity for Product {
    type Id = ProductId;
    type Error = MatamazonError;

    fn id(&self) -> ProductId {
        self.id
    }

    /// Name, price and quantity may all change; the supplier may not.
    fn on_replace(&self, previous: &Self) -> Result<()> {
        if self.supplier_id != previous.supplier_id {
            return Err(MatamazonError::SupplierMismatch {
                product: self.id,
                existing: previous.supplier_id,
                requested: self.supplier_id,
            });
        }
        Ok(())
    }
}
