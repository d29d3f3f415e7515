//! Tracing/logging setup shared by binaries and tests.
//!
//! The workspace ships only libraries: [`init`] is the entry point for an
//! embedding binary, [`init_for_tests`] is what the test suites call.

/// Initialize process-wide tracing (JSON to stdout, `RUST_LOG` filter).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize tracing for test runs (human-readable, captured by the harness).
pub fn init_for_tests() {
    tracing::init_for_tests();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
