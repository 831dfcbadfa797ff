//! Calculation endpoint
//!
//! Reads the body, validates `n`, runs the timed computation and assembles
//! the JSON reply. Any rejection becomes an empty-bodied 400.

use crate::config::AppState;
use crate::http::{self, HttpResponse};
use crate::logger;
use crate::lucas::{self, CalculationError, CalculationResult};
use http_body_util::{BodyExt, Limited};
use hyper::body::{Body, Bytes};
use hyper::{HeaderMap, Request};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Handle `POST <lucas.path>`
pub async fn handle_calculate<B>(req: Request<B>, state: &AppState) -> HttpResponse
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let max_body_size = state.config.http.max_body_size;
    if let Some(resp) = check_body_size(req.headers(), max_body_size) {
        return resp;
    }

    let n = match read_body(req.into_body(), max_body_size)
        .await
        .and_then(|payload| lucas::validate(&payload, state.config.lucas.max_n))
    {
        Ok(n) => n,
        Err(e) => {
            logger::log_rejected(&e.to_string());
            return http::build_400_response();
        }
    };

    let outcome = match run_calculation(n, state.config.lucas.offload).await {
        Ok(outcome) => outcome,
        Err(e) => {
            logger::log_error(&format!("Calculation for n={n} failed: {e}"));
            return http::build_500_response();
        }
    };

    logger::log_calculation(n, outcome.result, outcome.process_time);
    assemble_response(&outcome)
}

/// Run the timed computation on a thread sized for its recursion depth.
///
/// With `offload` the wait happens on the blocking pool; otherwise the async
/// worker itself blocks until the thread finishes.
async fn run_calculation(n: u64, offload: bool) -> Result<CalculationResult, String> {
    let handle = lucas::spawn_calculation(n)
        .map_err(|e| format!("cannot start calculation thread: {e}"))?;

    let joined = if offload {
        tokio::task::spawn_blocking(move || handle.join())
            .await
            .map_err(|e| format!("blocking task failed: {e}"))?
    } else {
        handle.join()
    };

    joined.map_err(|_| "calculation thread panicked".to_string())
}

/// Collect the request body, refusing anything over `max_body_size`
async fn read_body<B>(body: B, max_body_size: u64) -> Result<Bytes, CalculationError>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);
    Limited::new(body, limit)
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(|e| CalculationError::invalid(format!("unreadable body: {e}")))
}

/// Reject early when the declared Content-Length exceeds the limit
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<HttpResponse> {
    let size_str = headers.get("content-length")?.to_str().ok()?;
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_warning(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response())
        }
        _ => None,
    }
}

fn assemble_response(outcome: &CalculationResult) -> HttpResponse {
    match serde_json::to_string(outcome) {
        Ok(json) => http::build_json_response(json),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize calculation result: {e}"));
            http::build_500_response()
        }
    }
}
