use matamazon::model::{Customer, OrderId, PartyId, Product, ProductId, RecordKind, Supplier};
use matamazon::{Matamazon, MatamazonError};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = "\
Customer(id=2, name='Dan', city='Karmiel', address='2 St')
Supplier(id=1, name='Acme', city='Haifa', address='1 St')
Supplier(id=3, name='Bolt', city='Akko', address='4 St')
Product(id=10, name='Widget', price=9.99, supplier_id=1, quantity=5)
Product(id=11, name='Gadget', price=100.0, supplier_id=3, quantity=2)
";

fn populated() -> Matamazon {
    let mut system = Matamazon::new();
    system
        .register_entity(Customer::new(2, "Dan", "Karmiel", "2 St").unwrap())
        .unwrap();
    system
        .register_entity(Supplier::new(1, "Acme", "Haifa", "1 St").unwrap())
        .unwrap();
    system
        .register_entity(Supplier::new(3, "Bolt", "Akko", "4 St").unwrap())
        .unwrap();
    system
        .add_or_update_product(Product::new(10, "Widget", 9.99, 1, 5).unwrap())
        .unwrap();
    system
        .add_or_update_product(Product::new(11, "Gadget", 100.0, 3, 2).unwrap())
        .unwrap();
    system
}

#[test]
fn test_export_catalog_writes_canonical_records() {
    let mut out = Vec::new();
    populated().export_catalog(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), CATALOG);
}

/// Orders never reach the catalog file, and a reloaded ledger starts again at id 1.
#[test]
fn test_file_round_trip_drops_orders() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.txt");

    let mut system = populated();
    system.place_order(2, 10, 2).unwrap();
    system.place_order(2, 11, 1).unwrap();
    system.export_to_file(&path).expect("Failed to export catalog");

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("Order("));

    let reloaded = Matamazon::load_from_file(&path).expect("Failed to load catalog");
    assert!(reloaded.ledger().is_empty());
    assert_eq!(reloaded.ledger().next_order_id(), OrderId(1));
    assert_eq!(
        reloaded.catalog().get(ProductId(10)).unwrap().quantity,
        3,
        "stock taken by orders is kept"
    );

    let mut again = Vec::new();
    reloaded.export_catalog(&mut again).unwrap();
    assert_eq!(String::from_utf8(again).unwrap(), text);
}

#[test]
fn test_import_allows_products_before_suppliers() {
    let text = "\
Product(id=10, name='Widget', price=9.99, supplier_id=1, quantity=5)

some stray line
Supplier(id=1, name='Acme', city='Haifa', address='1 St')
";
    let system = Matamazon::import_catalog(text.as_bytes()).unwrap();
    assert_eq!(system.catalog().len(), 1);
    assert!(system.registry().supplier(PartyId(1)).is_some());
}

#[test]
fn test_import_rejects_malformed_records() {
    let text = "Customer(id=2, name='Dan', city='Karmiel')\n";
    let err = Matamazon::import_catalog(text.as_bytes()).unwrap_err();
    assert!(matches!(err, MatamazonError::MalformedRecord(_)));

    let text = "Product(id=10, name='Widget', price=9.99, supplier_id=1, quantity=5)\n";
    let err = Matamazon::import_catalog(text.as_bytes()).unwrap_err();
    assert!(matches!(err, MatamazonError::UnknownSupplier(_)));
}

#[test]
fn test_export_orders_groups_by_origin_city() {
    let mut system = populated();
    system.place_order(2, 10, 3).unwrap();
    system.place_order(2, 11, 1).unwrap();
    system.place_order(2, 10, 1).unwrap();

    let mut out = Vec::new();
    system.export_orders(&mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "Akko": ["Order(id=2, customer_id=2, product_id=11, quantity=1, total_price=100.0)"],
            "Haifa": [
                "Order(id=1, customer_id=2, product_id=10, quantity=3, total_price=29.97)",
                "Order(id=3, customer_id=2, product_id=10, quantity=1, total_price=9.99)"
            ]
        })
    );
}

#[test]
fn test_export_orders_empty_ledger() {
    let mut out = Vec::new();
    populated().export_orders(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "{}");
}

#[test]
fn test_removed_order_leaves_export() {
    let mut system = populated();
    system.place_order(2, 10, 1).unwrap();
    system.remove_object(1, RecordKind::Order).unwrap();

    let mut out = Vec::new();
    system.export_orders(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "{}");
}

#[test]
fn test_io_errors_propagate() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no-such-dir").join("catalog.txt");

    let err = populated().export_to_file(&missing).unwrap_err();
    assert!(matches!(err, MatamazonError::Io(_)));

    let err = Matamazon::load_from_file(&missing).unwrap_err();
    assert!(matches!(err, MatamazonError::Io(_)));
}
