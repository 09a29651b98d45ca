//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber once, at process start.
//!
//! The log level comes from `RUST_LOG` and defaults to `info`. Output is the compact format
//! without module targets; actors identify themselves with an `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run                 # lifecycle and request summaries
//! RUST_LOG=debug cargo run                # full payloads, skipped order lines
//! RUST_LOG=actor_framework=debug cargo run
//! ```
//!
//! Placing an order at `info` looks like:
//!
//! ```text
//! INFO create_order{table=5}: Created entity_type="Order" id=order_1 size=1
//! INFO create_order{table=5}: Order placed order_id=order_1
//! INFO request{method=POST uri=/api/orders}: finished processing request latency=2 ms status=201
//! ```
//!
//! HTTP requests are traced by `tower-http`'s `TraceLayer` in [`crate::api`].
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type identifies the actor
        .compact()
        .init();
}
