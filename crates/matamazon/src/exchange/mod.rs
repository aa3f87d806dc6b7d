//! # Catalog Exchange
//!
//! Moves the catalog in and out of the line-oriented text format, and exports the order
//! ledger grouped by origin city.
//!
//! ## Catalog files
//!
//! One record per line: every customer, then every supplier, then every product. Orders
//! are never written. Import reads the lines twice: customers and suppliers first, so
//! products can name suppliers that appear later in the file, then products. Lines
//! without a record marker are skipped; a marked line that is malformed or breaks an
//! entity rule stops the import with that error.
//!
//! ## Orders export
//!
//! A JSON object mapping each origin city (the city of the supplier owning the ordered
//! product) to the list of order records shipping from it.

pub mod record;

pub use record::Marker;

use crate::catalog::ProductCatalog;
use crate::error::Result;
use crate::ledger::OrderLedger;
use crate::registry::EntityRegistry;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

/// Order records grouped by origin city, in the shape written by [`export_orders`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OrdersByCity(pub BTreeMap<String, Vec<String>>);

/// Writes every customer, supplier and product record, one per line.
///
/// # Errors
/// Write failures are returned unchanged.
#[instrument(skip_all)]
pub fn export_catalog<W: Write>(
    registry: &EntityRegistry,
    catalog: &ProductCatalog,
    sink: &mut W,
) -> Result<()> {
    let mut written = 0usize;
    for customer in registry.customers() {
        writeln!(sink, "{customer}")?;
        written += 1;
    }
    for supplier in registry.suppliers() {
        writeln!(sink, "{supplier}")?;
        written += 1;
    }
    for product in catalog.products() {
        writeln!(sink, "{product}")?;
        written += 1;
    }
    sink.flush()?;
    info!(records = written, "Catalog exported");
    Ok(())
}

/// Builds a registry and a catalog from catalog records.
///
/// # Errors
/// Read failures, `MalformedRecord`, and any registration or upsert error raised by a
/// record. Records applied before the failing line are not rolled back, but the partly
/// built state is dropped with the error.
#[instrument(skip_all)]
pub fn import_catalog<R: BufRead>(source: R) -> Result<(EntityRegistry, ProductCatalog)> {
    let lines = source
        .lines()
        .map(|line| line.map(|l| l.trim().to_string()))
        .collect::<std::io::Result<Vec<String>>>()?;

    let mut registry = EntityRegistry::new();
    for line in lines.iter().filter(|l| Marker::of(l) == Some(Marker::Party)) {
        registry.register(record::parse_party(line)?)?;
    }

    let mut catalog = ProductCatalog::new();
    for line in lines.iter().filter(|l| Marker::of(l) == Some(Marker::Product)) {
        catalog.upsert(record::parse_product(line)?, &registry)?;
    }

    info!(lines = lines.len(), products = catalog.len(), "Catalog imported");
    Ok((registry, catalog))
}

/// Groups the textual form of every live order under its origin city.
pub fn orders_by_city(ledger: &OrderLedger, registry: &EntityRegistry) -> OrdersByCity {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (order, supplier_id) in ledger.orders_with_supplier() {
        match registry.supplier(supplier_id) {
            Some(supplier) => grouped
                .entry(supplier.city.clone())
                .or_default()
                .push(order.to_string()),
            None => warn!(order_id = %order.id, %supplier_id, "Origin supplier missing, order skipped"),
        }
    }
    OrdersByCity(grouped)
}

/// Writes the orders, grouped by origin city, as one JSON object.
///
/// # Errors
/// Write and encoding failures are returned unchanged.
#[instrument(skip_all)]
pub fn export_orders<W: Write>(
    ledger: &OrderLedger,
    registry: &EntityRegistry,
    mut sink: W,
) -> Result<()> {
    let grouped = orders_by_city(ledger, registry);
    serde_json::to_writer(&mut sink, &grouped)?;
    sink.flush()?;
    info!(cities = grouped.0.len(), orders = ledger.len(), "Orders exported");
    Ok(())
}
