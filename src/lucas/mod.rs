//! Lucas number calculation core
//!
//! Pure computation, input validation and the compute-time probe.
//! Nothing in here knows about HTTP; the handler layer wires it to requests.

mod engine;
mod error;
mod probe;
mod runner;
mod types;
mod validator;

pub use engine::compute;
pub use error::CalculationError;
pub use probe::measure;
pub use runner::spawn_calculation;
pub use types::CalculationResult;
pub use validator::validate;

/// Run the engine under the timing probe and assemble the result.
///
/// Only the call to [`compute`] is inside the measured window.
pub fn calculate(n: u64) -> CalculationResult {
    let (result, elapsed) = measure(|| compute(n));
    CalculationResult::new(result, elapsed)
}
