use matamazon::commands::{run_log, Command};
use matamazon::model::{OrderId, ProductId};
use matamazon::{Matamazon, MatamazonError};
use pretty_assertions::assert_eq;

const LOG: &str = "\
register supplier 1 Acme Haifa 1St
register customer 2 Dan Karmiel 2St
add 10 Widget 9.99 1 5
add 11 Gizmo 3.5 1 4
order 2 10 3
order 2 10 10
search i
search Widget 5

remove order 1
update 10 Widget 8.0 1 7
search Widget
order 2 11
";

fn run(log: &str) -> (Matamazon, String) {
    let mut system = Matamazon::new();
    let mut out = Vec::new();
    run_log(&mut system, log.as_bytes(), &mut out).expect("Log failed");
    (system, String::from_utf8(out).unwrap())
}

#[test]
fn test_log_runs_end_to_end() {
    let (system, out) = run(LOG);
    assert_eq!(
        out,
        "\
[Product(id=11, name='Gizmo', price=3.5, supplier_id=1, quantity=4), Product(id=10, name='Widget', price=9.99, supplier_id=1, quantity=2)]
[]
[Product(id=10, name='Widget', price=8.0, supplier_id=1, quantity=7)]
"
    );

    // Order 1 was removed; the default quantity applies to the last line
    assert!(system.ledger().get(OrderId(1)).is_none());
    let order = system.ledger().get(OrderId(2)).expect("Order not found");
    assert_eq!(order.quantity, 1);
    assert_eq!(system.catalog().get(ProductId(11)).unwrap().quantity, 3);
}

#[test]
fn test_unknown_verbs_are_ignored() {
    let (system, out) = run("frobnicate 1 2 3\nregister customer 5 Eve Eilat 3St\n");
    assert_eq!(out, "");
    assert_eq!(system.registry().customers().count(), 1);
}

#[test]
fn test_core_errors_stop_the_run() {
    let mut system = Matamazon::new();
    let mut out = Vec::new();
    let log = "register customer 1 Dan Karmiel 2St\nregister supplier 1 Acme Haifa 1St\nsearch x\n";
    let err = run_log(&mut system, log.as_bytes(), &mut out).unwrap_err();
    assert!(matches!(err, MatamazonError::DuplicateIdentifier(_)));
    assert!(out.is_empty());
    assert_eq!(system.registry().customers().count(), 1);
}

#[test]
fn test_bad_arguments_report_the_line() {
    let err = Command::parse("order 2 ten").unwrap_err();
    match err {
        MatamazonError::InvalidCommand { line, reason } => {
            assert_eq!(line, "order 2 ten");
            assert_eq!(reason, "invalid product id 'ten'");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
