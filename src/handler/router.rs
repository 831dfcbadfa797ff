//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method checks, route matching,
//! common headers and access logging.

use crate::config::AppState;
use crate::handler::{calculate, homepage};
use crate::http::{self, HttpResponse};
use crate::logger::{self, AccessLogEntry};
use hyper::body::Body;
use hyper::header::{HeaderName, REFERER, USER_AGENT};
use hyper::{Method, Request, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main entry point for HTTP request handling
///
/// Generic over the body so tests can drive it without a socket.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<HttpResponse, Infallible>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let started = Instant::now();
    let access_log = state.access_log_enabled();
    let entry = access_log.then(|| access_entry(&req, peer_addr));

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let mut response = route_request(req, &state).await;
    http::apply_common_headers(
        &mut response,
        &state.config.http.server_name,
        state.config.http.enable_cors,
    );

    if let Some(mut entry) = entry {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on path and method
async fn route_request<B>(req: Request<B>, state: &AppState) -> HttpResponse
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let health = &state.config.health;
    let is_read = method == Method::GET || method == Method::HEAD;

    // Preflight is answered for every path
    if method == Method::OPTIONS {
        return http::build_options_response(state.config.http.enable_cors);
    }

    // Health check endpoints
    if health.enabled && (path == health.liveness_path || path == health.readiness_path) {
        return if is_read {
            http::build_health_response("ok")
        } else {
            method_not_allowed(&method, &path, "GET, HEAD")
        };
    }

    if path == state.config.lucas.path {
        return if method == Method::POST {
            calculate::handle_calculate(req, state).await
        } else {
            method_not_allowed(&method, &path, "POST, OPTIONS")
        };
    }

    if path == "/" {
        return if is_read {
            homepage::serve_homepage(&state.config.lucas.path, method == Method::HEAD)
        } else {
            method_not_allowed(&method, &path, "GET, HEAD")
        };
    }

    http::build_404_response()
}

fn method_not_allowed(method: &Method, path: &str, allow: &str) -> HttpResponse {
    logger::log_warning(&format!("Method not allowed: {method} {path}"));
    http::build_405_response(allow)
}

/// Capture the request side of the access log before the body is consumed
fn access_entry<B>(req: &Request<B>, peer_addr: SocketAddr) -> AccessLogEntry {
    let header = |name: HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = match req.version() {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
    .to_string();
    entry.referer = header(REFERER);
    entry.user_agent = header(USER_AGENT);
    entry
}
