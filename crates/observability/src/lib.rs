//! Tracing setup for binaries and tests that use the similarity crates.
//!
//! The library crates only emit `tracing` events; installing a subscriber is
//! left to the process that embeds them.

/// Initialize process-wide tracing.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
