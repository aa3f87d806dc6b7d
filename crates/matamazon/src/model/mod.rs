//! Pure data structures for the catalog: identifiers, parties, products and orders.
//!
//! Every entity renders, through `Display`, as the canonical one-line record used by the
//! catalog export file and the orders export:
//!
//! ```text
//! Customer(id=2, name='Dan', city='Karmiel', address='2 St')
//! Supplier(id=1, name='Acme', city='Haifa', address='1 St')
//! Product(id=10, name='Widget', price=9.99, supplier_id=1, quantity=5)
//! Order(id=1, customer_id=2, product_id=10, quantity=3, total_price=29.97)
//! ```

pub mod ids;
pub mod order;
pub mod party;
pub mod product;

pub use ids::*;
pub use order::*;
pub use party::*;
pub use product::*;

/// Renders a float the way the record format expects: shortest round-trip digits,
/// integral values keep a trailing `.0` (`100.0`, not `100`), and magnitudes from `1e16`
/// up or below `1e-4` switch to scientific notation with a signed two-digit exponent
/// (`1e+16`, `2.5e-05`).
pub(crate) fn format_float(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        let text = value.to_string();
        return if value == 0.0 { format!("{text}.0") } else { text };
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }

    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::format_float;

    #[test]
    fn test_format_float_keeps_decimal_point() {
        assert_eq!(format_float(100.0), "100.0");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(9.99), "9.99");
        assert_eq!(format_float(3.0 * 9.99), "29.97");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(0.0001), "0.0001");
    }

    #[test]
    fn test_format_float_scientific_range() {
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e16), "1.5e+16");
        assert_eq!(format_float(1e100), "1e+100");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(2.5e-7), "2.5e-07");
        assert_eq!(format_float(f64::INFINITY), "inf");
    }
}
