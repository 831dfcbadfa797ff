//! Compute-time probe

use std::time::{Duration, Instant};

/// Run `f` and return its output with the wall-clock time it took.
///
/// The clock is read immediately before and immediately after the call.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    (value, elapsed)
}
