use crate::catalog::ProductCatalog;
use crate::error::Result;
use crate::exchange;
use crate::ledger::{OrderLedger, OrderOutcome};
use crate::model::{Party, PartyKind, Product, RecordKind};
use crate::query::QueryEngine;
use crate::registry::EntityRegistry;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, instrument};

/// The catalog-and-order manager.
///
/// `Matamazon` owns:
/// - **EntityRegistry**: customers and suppliers
/// - **ProductCatalog**: products and stock
/// - **OrderLedger**: orders and the order-id counter
///
/// # Example
///
/// ```rust
/// use matamazon::lifecycle::Matamazon;
/// use matamazon::model::{Customer, Product, RecordKind, Supplier};
///
/// # fn main() -> matamazon::Result<()> {
/// let mut system = Matamazon::new();
/// system.register_entity(Supplier::new(1, "Acme", "Haifa", "1 St")?)?;
/// system.register_entity(Customer::new(2, "Dan", "Karmiel", "2 St")?)?;
/// system.add_or_update_product(Product::new(10, "Widget", 9.99, 1, 5)?)?;
///
/// let outcome = system.place_order(2, 10, 3)?;
/// assert!(outcome.is_accepted());
/// assert_eq!(system.remove_object(1, RecordKind::Order)?, Some(3));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Matamazon {
    registry: EntityRegistry,
    catalog: ProductCatalog,
    ledger: OrderLedger,
}

impl Matamazon {
    /// Creates an empty system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a system around an existing registry and catalog, with no orders.
    pub fn from_parts(registry: EntityRegistry, catalog: ProductCatalog) -> Self {
        Self {
            registry,
            catalog,
            ledger: OrderLedger::new(),
        }
    }

    /// Registers a customer or supplier. See [`EntityRegistry::register`].
    pub fn register_entity(&mut self, party: impl Into<Party>) -> Result<()> {
        self.registry.register(party.into())
    }

    /// Adds or replaces a product. See [`ProductCatalog::upsert`].
    pub fn add_or_update_product(&mut self, product: Product) -> Result<()> {
        self.catalog.upsert(product, &self.registry)
    }

    /// Places an order. See [`OrderLedger::place_order`].
    pub fn place_order(
        &mut self,
        customer_id: i64,
        product_id: i64,
        quantity: u32,
    ) -> Result<OrderOutcome> {
        self.ledger
            .place_order(&mut self.catalog, customer_id, product_id, quantity)
    }

    /// Removes a record by id and kind.
    ///
    /// For orders, returns the removed order's quantity (which has been put back in
    /// stock), or `None` if there was no such order. Other kinds return `None`.
    ///
    /// # Errors
    /// `InvalidIdentifier` for a negative id; `DependentOrderExists` when a customer,
    /// supplier or product is still referenced by a live order.
    #[instrument(skip(self))]
    pub fn remove_object(&mut self, id: i64, kind: RecordKind) -> Result<Option<u32>> {
        match kind {
            RecordKind::Order => return self.ledger.remove_order(&mut self.catalog, id),
            RecordKind::Product => self.catalog.remove(id, &self.ledger)?,
            RecordKind::Customer => self.registry.remove(id, PartyKind::Customer, &self.ledger)?,
            RecordKind::Supplier => self.registry.remove(id, PartyKind::Supplier, &self.ledger)?,
        }
        Ok(None)
    }

    /// In-stock products whose name contains `query`, cheapest first.
    /// See [`QueryEngine::search`].
    pub fn search_products(&self, query: &str, max_price: Option<f64>) -> Vec<&Product> {
        QueryEngine::new(&self.catalog).search(query, max_price)
    }

    /// Writes customers, suppliers and products to `sink`, one record per line.
    pub fn export_catalog<W: Write>(&self, sink: &mut W) -> Result<()> {
        exchange::export_catalog(&self.registry, &self.catalog, sink)
    }

    /// Writes the orders as JSON, grouped by origin city.
    pub fn export_orders<W: Write>(&self, sink: W) -> Result<()> {
        exchange::export_orders(&self.ledger, &self.registry, sink)
    }

    /// Builds a system from catalog records. The ledger starts empty.
    pub fn import_catalog<R: std::io::BufRead>(source: R) -> Result<Self> {
        let (registry, catalog) = exchange::import_catalog(source)?;
        Ok(Self::from_parts(registry, catalog))
    }

    /// Writes the catalog to a file, replacing its contents.
    ///
    /// # Errors
    /// Failures to create or write the file are returned unchanged.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut sink = BufWriter::new(File::create(path.as_ref())?);
        self.export_catalog(&mut sink)
    }

    /// Loads a system from a catalog file.
    ///
    /// # Errors
    /// Failures to open or read the file, and any import error.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = BufReader::new(File::open(path.as_ref())?);
        let system = Self::import_catalog(source)?;
        info!(
            customers = system.registry.customers().count(),
            suppliers = system.registry.suppliers().count(),
            products = system.catalog.len(),
            "System loaded"
        );
        Ok(system)
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }
}
