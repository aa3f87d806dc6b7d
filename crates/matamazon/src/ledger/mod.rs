//! # Order Ledger
//!
//! Owns the placed orders and the order-id counter.
//!
//! ## Overview
//!
//! Placing an order checks the product and its stock in the [`ProductCatalog`], takes
//! the stock through the catalog's stock adjustment, and stores the order with a price
//! snapshot. Removing an order gives the stock back.
//!
//! ## Order ids
//!
//! Ids start at 1 and only grow. Removing an order never frees its id. The counter lives
//! in memory only: a ledger built from a catalog file starts empty, at id 1 again.
//!
//! ## Customers
//!
//! The customer id on an order is not checked against the registry. Any non-negative id
//! is accepted.

pub mod dependents;
pub mod outcome;

pub use dependents::*;
pub use outcome::*;

use crate::catalog::ProductCatalog;
use crate::error::{MatamazonError, Result};
use crate::model::{Order, OrderId, PartyId, ProductId};
use resource_store::{ResourceEntity, ResourceStore};
use tracing::{debug, info, instrument, warn};

/// An order together with the supplier that owned its product when it was placed.
///
/// A product's supplier never changes and the product cannot be removed while the order
/// lives, so the recorded supplier always matches the catalog.
#[derive(Debug, Clone)]
struct LedgerEntry {
    order: Order,
    supplier_id: PartyId,
}

impl ResourceEntity for LedgerEntry {
    type Id = OrderId;
    type Error = MatamazonError;

    fn id(&self) -> OrderId {
        self.order.id
    }
}

#[derive(Debug, Clone)]
pub struct OrderLedger {
    orders: ResourceStore<LedgerEntry>,
    next_order_id: u32,
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderLedger {
    pub fn new() -> Self {
        Self {
            orders: ResourceStore::new(),
            next_order_id: 1,
        }
    }

    /// Places an order for `quantity` units of a product.
    ///
    /// Returns [`OrderOutcome::ProductNotFound`] or [`OrderOutcome::InsufficientStock`]
    /// without touching any state when the request cannot be served. Otherwise takes the
    /// stock, stores the order priced at `quantity * unit price`, and returns
    /// [`OrderOutcome::Accepted`].
    ///
    /// # Errors
    /// - `InvalidIdentifier` if `customer_id` is negative on an order that would otherwise
    ///   be accepted.
    /// - `OrderIdsExhausted` once every order id has been used.
    ///
    /// Nothing is mutated on error.
    #[instrument(skip(self, catalog))]
    pub fn place_order(
        &mut self,
        catalog: &mut ProductCatalog,
        customer_id: i64,
        product_id: i64,
        quantity: u32,
    ) -> Result<OrderOutcome> {
        let product = match ProductId::try_from(product_id)
            .ok()
            .and_then(|id| catalog.get(id))
        {
            Some(product) => product,
            None => {
                info!("Product does not exist");
                return Ok(OrderOutcome::ProductNotFound);
            }
        };
        if quantity > product.quantity {
            info!(available = product.quantity, "Quantity exceeds stock");
            return Ok(OrderOutcome::InsufficientStock);
        }

        let customer_id = PartyId::try_from(customer_id)?;
        let order_id = OrderId(self.next_order_id);
        let following = self
            .next_order_id
            .checked_add(1)
            .ok_or(MatamazonError::OrderIdsExhausted)?;
        let total_price = f64::from(quantity) * product.price;
        let supplier_id = product.supplier_id;
        let order = Order::new(order_id, customer_id, product.id, quantity, total_price)?;
        debug!(?order, "Order priced");

        let product_id = order.product_id;
        self.orders.insert(LedgerEntry { order, supplier_id })?;
        self.next_order_id = following;
        let remaining = catalog.adjust_stock(product_id, -i64::from(quantity));
        info!(%order_id, ?remaining, "Order accepted");
        Ok(OrderOutcome::Accepted(order_id))
    }

    /// Removes an order and returns its stock to the product.
    ///
    /// Returns the removed order's quantity, or `None` if no live order has this id.
    ///
    /// # Errors
    /// - `InvalidIdentifier` if `id` is negative.
    /// - `StockOverflow` if the product's stock cannot take the units back. The order is
    ///   kept in that case.
    #[instrument(skip(self, catalog))]
    pub fn remove_order(&mut self, catalog: &mut ProductCatalog, id: i64) -> Result<Option<u32>> {
        let id = OrderId::try_from(id)?;
        let Some(entry) = self.orders.get(id) else {
            debug!("No such order");
            return Ok(None);
        };
        let (product_id, quantity) = (entry.order.product_id, entry.order.quantity);
        if let Some(product) = catalog.get(product_id) {
            if product.quantity.checked_add(quantity).is_none() {
                warn!(%product_id, stock = product.quantity, quantity, "Stock would overflow, order kept");
                return Err(MatamazonError::StockOverflow {
                    product: product_id,
                    stock: product.quantity,
                    quantity,
                });
            }
        }

        self.orders.remove(id);
        match catalog.adjust_stock(product_id, i64::from(quantity)) {
            Some(restored) => info!(%product_id, restored, "Stock restored"),
            None => warn!(%product_id, "Product missing, stock not restored"),
        }
        Ok(Some(quantity))
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(id).map(|entry| &entry.order)
    }

    /// Live orders, oldest first.
    pub fn orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter().map(|entry| &entry.order)
    }

    /// Live orders paired with the supplier that owns each order's product.
    pub fn orders_with_supplier(&self) -> impl Iterator<Item = (&Order, PartyId)> + '_ {
        self.orders.iter().map(|entry| (&entry.order, entry.supplier_id))
    }

    /// The id the next accepted order will receive.
    pub fn next_order_id(&self) -> OrderId {
        OrderId(self.next_order_id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl DependentOrders for OrderLedger {
    fn has_dependent_orders(&self, dependency: Dependency) -> bool {
        self.orders.iter().any(|entry| match dependency {
            Dependency::Customer(id) => entry.order.customer_id == id,
            Dependency::Supplier(id) => entry.supplier_id == id,
            Dependency::Product(id) => entry.order.product_id == id,
        })
    }
}
