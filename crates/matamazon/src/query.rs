//! Read-only product search.

use crate::catalog::ProductCatalog;
use crate::model::Product;
use std::cmp::Ordering;
use tracing::debug;

/// Searches a [`ProductCatalog`] without modifying it.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    catalog: &'a ProductCatalog,
}

impl<'a> QueryEngine<'a> {
    pub fn new(catalog: &'a ProductCatalog) -> Self {
        Self { catalog }
    }

    /// Products in stock whose name contains `query`, cheapest first.
    ///
    /// Matching is a plain, case-sensitive substring test. With `max_price`, only
    /// products priced at or below it are kept. Equal prices keep the order in which the
    /// products were first added to the catalog.
    pub fn search(&self, query: &str, max_price: Option<f64>) -> Vec<&'a Product> {
        let mut hits: Vec<(u64, &'a Product)> = self
            .catalog
            .products_sequenced()
            .filter(|(_, p)| p.quantity > 0 && p.name.contains(query))
            .filter(|(_, p)| max_price.map_or(true, |max| p.price <= max))
            .collect();
        hits.sort_by(|(seq_a, a), (seq_b, b)| {
            a.price
                .partial_cmp(&b.price)
                .unwrap_or(Ordering::Equal)
                .then(seq_a.cmp(seq_b))
        });
        debug!(query, ?max_price, hits = hits.len(), "Search");
        hits.into_iter().map(|(_, p)| p).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductId, Supplier};
    use crate::registry::EntityRegistry;

    fn catalog(products: &[(i64, &str, f64, u32)]) -> ProductCatalog {
        let mut registry = EntityRegistry::new();
        registry
            .register(Supplier::new(1, "Acme", "Haifa", "1 St").unwrap().into())
            .unwrap();
        let mut catalog = ProductCatalog::new();
        for &(id, name, price, quantity) in products {
            catalog
                .upsert(Product::new(id, name, price, 1, quantity).unwrap(), &registry)
                .unwrap();
        }
        catalog
    }

    fn ids(products: Vec<&Product>) -> Vec<u32> {
        products.into_iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_search_sorts_by_price_stably() {
        let catalog = catalog(&[
            (5, "Blue Mug", 8.0, 1),
            (3, "Red Mug", 4.0, 1),
            (9, "Mug Tree", 8.0, 2),
            (1, "Green Mug", 8.0, 3),
        ]);
        let engine = QueryEngine::new(&catalog);
        assert_eq!(ids(engine.search("Mug", None)), vec![3, 5, 9, 1]);
    }

    #[test]
    fn test_search_skips_out_of_stock_and_is_case_sensitive() {
        let catalog = catalog(&[(1, "Mug", 1.0, 0), (2, "mug", 1.0, 4), (3, "Mugs", 2.0, 1)]);
        let engine = QueryEngine::new(&catalog);
        assert_eq!(ids(engine.search("Mug", None)), vec![3]);
    }

    #[test]
    fn test_search_max_price_is_inclusive() {
        let catalog = catalog(&[(1, "Lamp", 10.0, 1), (2, "Lamp XL", 10.5, 1), (3, "Lamp S", 2.0, 1)]);
        let engine = QueryEngine::new(&catalog);
        assert_eq!(ids(engine.search("Lamp", Some(10.0))), vec![3, 1]);
        assert!(engine.search("Lamp", Some(1.0)).is_empty());
        assert!(engine.search("Chair", None).is_empty());
    }

    #[test]
    fn test_search_literal_substring() {
        let catalog = catalog(&[(1, "a.b", 1.0, 1), (2, "axb", 1.0, 1)]);
        let engine = QueryEngine::new(&catalog);
        assert_eq!(ids(engine.search("a.b", None)), vec![1]);
        assert_eq!(ids(engine.search("", None)).len(), 2);
    }

    #[test]
    fn test_updated_product_keeps_tie_position() {
        let mut registry = EntityRegistry::new();
        registry
            .register(Supplier::new(1, "Acme", "Haifa", "1 St").unwrap().into())
            .unwrap();
        let mut catalog = ProductCatalog::new();
        for id in [1, 2] {
            catalog
                .upsert(Product::new(id, "Pen", 1.0, 1, 1).unwrap(), &registry)
                .unwrap();
        }
        catalog
            .upsert(Product::new(1, "Pen", 1.0, 1, 9).unwrap(), &registry)
            .unwrap();

        let engine = QueryEngine::new(&catalog);
        let found: Vec<ProductId> = engine.search("Pen", None).iter().map(|p| p.id).collect();
        assert_eq!(found, vec![ProductId(1), ProductId(2)]);
    }
}
