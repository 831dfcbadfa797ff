//! HTTP protocol layer module
//!
//! Response builders shared by every route, independent of the calculation logic.

pub mod response;

// Re-export commonly used types
pub use response::{
    apply_common_headers, build_400_response, build_404_response, build_405_response,
    build_413_response, build_500_response, build_health_response, build_html_response,
    build_json_response, build_options_response, HttpResponse,
};
