//! # Observability & Tracing
//!
//! Resolvers log through `tracing` with structured fields:
//!
//! - `DEBUG` for every reason a link came back empty (unknown link name, no
//!   template for the message type, incomplete params)
//! - `TRACE` for each resolved link
//! - `WARN` for malformed templates, `ERROR` for resolvers missing their implementation
//!
//! ```bash
//! # Why did a link not show up?
//! RUST_LOG=notification_links=debug
//! ```

/// Initializes a compact `tracing-subscriber` filtered by `RUST_LOG`.
///
/// Call once at application start; a second call panics because the global
/// subscriber is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
