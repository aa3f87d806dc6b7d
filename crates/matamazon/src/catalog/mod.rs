//! # Product Catalog
//!
//! Owns products and their stock.
//!
//! ## Overview
//!
//! A product is bound to its supplier when first stored. Later upserts of the same id
//! replace the name, price and quantity in full but must name the same supplier; the
//! check lives in the product's [`on_replace`](resource_store::ResourceEntity::on_replace)
//! hook. Stock only moves through [`ProductCatalog::adjust_stock`], which the order
//! ledger calls when orders are placed or removed.

use crate::error::{MatamazonError, Result};
use crate::ledger::{Dependency, DependentOrders};
use crate::model::{Product, ProductId};
use crate::registry::EntityRegistry;
use resource_store::ResourceStore;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: ResourceStore<Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product, or replaces the stored product with the same id.
    ///
    /// # Errors
    /// - `UnknownSupplier` if `product.supplier_id` is not a registered supplier.
    /// - `SupplierMismatch` if the stored product belongs to another supplier.
    ///
    /// The catalog is unchanged on error.
    #[instrument(skip(self, registry), fields(product_id = %product.id))]
    pub fn upsert(&mut self, product: Product, registry: &EntityRegistry) -> Result<()> {
        if registry.supplier(product.supplier_id).is_none() {
            warn!(supplier_id = %product.supplier_id, "Supplier does not exist");
            return Err(MatamazonError::UnknownSupplier(product.supplier_id));
        }
        self.products.upsert(product)?;
        Ok(())
    }

    /// Removes a product. Removing an unknown id is not an error.
    ///
    /// # Errors
    /// - `InvalidIdentifier` if `id` is negative.
    /// - `DependentOrderExists` if a live order is for this product.
    #[instrument(skip(self, orders))]
    pub fn remove(&mut self, id: i64, orders: &impl DependentOrders) -> Result<()> {
        let id = ProductId::try_from(id)?;
        let dependency = Dependency::Product(id);
        if orders.has_dependent_orders(dependency) {
            warn!("Removal blocked by dependent order");
            return Err(dependency.blocked());
        }
        self.products.remove(id);
        Ok(())
    }

    /// Adds `delta` units to the stock of a product and returns the new quantity.
    ///
    /// Returns `None`, leaving the stock as it was, if the product does not exist or the
    /// result would be negative. Callers check availability first.
    pub(crate) fn adjust_stock(&mut self, id: ProductId, delta: i64) -> Option<u32> {
        let product = self.products.get_mut(id)?;
        let adjusted = u32::try_from(i64::from(product.quantity) + delta).ok()?;
        debug!(product_id = %id, from = product.quantity, to = adjusted, "Stock adjusted");
        product.quantity = adjusted;
        Some(adjusted)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// Products in the order their ids were first stored.
    pub fn products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter()
    }

    /// Products in first-stored order, each with its insertion sequence number.
    pub fn products_sequenced(&self) -> impl Iterator<Item = (u64, &Product)> + '_ {
        self.products.iter_sequenced()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
