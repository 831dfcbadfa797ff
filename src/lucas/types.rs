//! Request and result types for a single calculation

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Inbound payload, `{"n": <integer>}`.
///
/// `n` is signed so negative values parse and are rejected by the
/// validator instead of surfacing as a JSON type error.
#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    pub n: i64,
}

/// Outbound payload, `{"result": <integer>, "process_time": <ms>}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CalculationResult {
    pub result: u128,
    /// Milliseconds spent inside the engine
    pub process_time: f64,
}

impl CalculationResult {
    pub fn new(result: u128, elapsed: Duration) -> Self {
        Self {
            result,
            process_time: elapsed.as_secs_f64() * 1000.0,
        }
    }
}
