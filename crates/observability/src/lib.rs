//! Process-wide logging for the simulator and any other binary in the
//! workspace: JSON lines on stderr, filtered by `RUST_LOG`.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber construction (env filter, JSON formatter, stderr writer).
pub mod tracing;
