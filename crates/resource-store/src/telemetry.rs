//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** that hides the module prefix (`with_target(false)`)
//! - **stderr output**, so command output on stdout stays machine-readable
//!
//! ## Usage Examples
//!
//! ```bash
//! # State changes (registrations, orders, removals)
//! RUST_LOG=info matamazon -l commands.log
//!
//! # Full payloads and lookups
//! RUST_LOG=debug matamazon -l commands.log
//!
//! # Only the store
//! RUST_LOG=resource_store=debug matamazon -l commands.log
//! ```
//!
//! Store events carry an `entity_type` field (`Customer`, `Product`, ...) and the store
//! `size` after the change:
//!
//! ```text
//! INFO Created entity_type="Supplier" id=1 size=1
//! INFO Created entity_type="Product" id=10 size=1
//! INFO place_order: Order accepted order_id=1 product_id=10 quantity=3
//! ```

/// Installs the global `tracing` subscriber.
///
/// Call once, at process start. Later calls are ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
