//! Request handler module
//!
//! Routes requests to the calculator page, the calculation endpoint and
//! the health probes.

mod calculate;
mod homepage;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
