//! Represents a placed order.
//!
//! `total_price` is fixed when the order is accepted; later price changes on the product
//! never touch it.

use super::{format_float, OrderId, PartyId, ProductId};
use crate::error::{MatamazonError, Result};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: PartyId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub total_price: f64,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// Ids are already validated by their types; `total_price` must not be negative.
    pub fn new(
        id: OrderId,
        customer_id: PartyId,
        product_id: ProductId,
        quantity: u32,
        total_price: f64,
    ) -> Result<Self> {
        if total_price.is_nan() || total_price < 0.0 {
            return Err(MatamazonError::InvalidPrice(total_price));
        }
        Ok(Self {
            id,
            customer_id,
            product_id,
            quantity,
            total_price,
        })
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order(id={}, customer_id={}, product_id={}, quantity={}, total_price={})",
            self.id,
            self.customer_id,
            self.product_id,
            self.quantity,
            format_float(self.total_price)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_record_format() {
        let order = Order::new(OrderId(1), PartyId(42), ProductId(101), 10, 299.9).unwrap();
        assert_eq!(
            order.to_string(),
            "Order(id=1, customer_id=42, product_id=101, quantity=10, total_price=299.9)"
        );
    }

    #[test]
    fn test_negative_total_is_rejected() {
        let err = Order::new(OrderId(1), PartyId(1), ProductId(1), 1, -3.0).unwrap_err();
        assert!(matches!(err, MatamazonError::InvalidPrice(_)));
    }
}
