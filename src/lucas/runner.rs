//! Calculation thread
//!
//! The recursion is `n` frames deep before it ever branches, so it runs on a
//! dedicated thread whose stack grows with `n` instead of on a runtime thread
//! with a fixed 2 MiB stack.

use std::io;
use std::thread::{self, JoinHandle};

use super::types::CalculationResult;

/// Stack reserved on top of the recursion itself
const BASE_STACK_BYTES: usize = 2 * 1024 * 1024;

/// Upper bound on one `compute` frame, unoptimized builds included
const FRAME_BYTES: usize = 256;

/// Stack size needed to recurse `n` levels deep
fn stack_size_for(n: u64) -> usize {
    usize::try_from(n)
        .unwrap_or(usize::MAX)
        .saturating_mul(FRAME_BYTES)
        .saturating_add(BASE_STACK_BYTES)
}

/// Start the timed calculation on its own thread.
///
/// Fails when the OS cannot reserve a stack that large.
pub fn spawn_calculation(n: u64) -> io::Result<JoinHandle<CalculationResult>> {
    thread::Builder::new()
        .name(format!("lucas-{n}"))
        .stack_size(stack_size_for(n))
        .spawn(move || super::calculate(n))
}
