//! HTTP response building module
//!
//! Builders for the status codes the server emits, decoupled from request handling.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderValue;
use hyper::{Response, StatusCode};

pub type HttpResponse = Response<Full<Bytes>>;

/// Build a response, falling back to a bare one if the builder rejects a header
fn build(
    status: StatusCode,
    headers: &[(&str, &str)],
    body: impl Into<Bytes>,
) -> HttpResponse {
    let mut builder = Response::builder().status(status);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Full::new(body.into())).unwrap_or_else(|e| {
        log_build_error(status, &e);
        let mut resp = Response::new(Full::new(Bytes::new()));
        *resp.status_mut() = status;
        resp
    })
}

/// Build 200 JSON response
pub fn build_json_response(json: String) -> HttpResponse {
    build(
        StatusCode::OK,
        &[("Content-Type", "application/json")],
        json,
    )
}

/// Build 400 Bad Request response with no body
pub fn build_400_response() -> HttpResponse {
    build(StatusCode::BAD_REQUEST, &[], Bytes::new())
}

/// Build 404 Not Found response
pub fn build_404_response() -> HttpResponse {
    build(
        StatusCode::NOT_FOUND,
        &[("Content-Type", "text/plain")],
        "404 Not Found",
    )
}

/// Build 405 Method Not Allowed response
pub fn build_405_response(allow: &str) -> HttpResponse {
    build(
        StatusCode::METHOD_NOT_ALLOWED,
        &[("Content-Type", "text/plain"), ("Allow", allow)],
        "405 Method Not Allowed",
    )
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> HttpResponse {
    build(
        StatusCode::PAYLOAD_TOO_LARGE,
        &[("Content-Type", "text/plain")],
        "413 Payload Too Large",
    )
}

/// Build 500 Internal Server Error response with no body
pub fn build_500_response() -> HttpResponse {
    build(StatusCode::INTERNAL_SERVER_ERROR, &[], Bytes::new())
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> HttpResponse {
    const ALLOW: &str = "GET, HEAD, POST, OPTIONS";
    if enable_cors {
        build(
            StatusCode::NO_CONTENT,
            &[
                ("Allow", ALLOW),
                ("Access-Control-Allow-Methods", ALLOW),
                ("Access-Control-Allow-Headers", "Content-Type"),
                ("Access-Control-Max-Age", "86400"),
            ],
            Bytes::new(),
        )
    } else {
        build(StatusCode::NO_CONTENT, &[("Allow", ALLOW)], Bytes::new())
    }
}

/// Build health check response
pub fn build_health_response(status: &str) -> HttpResponse {
    build(
        StatusCode::OK,
        &[
            ("Content-Type", "application/json"),
            ("Cache-Control", "no-cache"),
        ],
        serde_json::json!({ "status": status }).to_string(),
    )
}

/// Build HTML page response; HEAD keeps the headers and drops the body
pub fn build_html_response(content: String, is_head: bool) -> HttpResponse {
    let content_length = content.len().to_string();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    build(
        StatusCode::OK,
        &[
            ("Content-Type", "text/html; charset=utf-8"),
            ("Content-Length", content_length.as_str()),
            ("Cache-Control", "no-cache"),
        ],
        body,
    )
}

/// Stamp the headers every response carries
pub fn apply_common_headers(resp: &mut HttpResponse, server_name: &str, enable_cors: bool) {
    let headers = resp.headers_mut();
    match HeaderValue::from_str(server_name) {
        Ok(v) => {
            headers.insert("Server", v);
        }
        Err(e) => crate::logger::log_warning(&format!("Invalid server_name header: {e}")),
    }
    if enable_cors {
        headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    }
}

/// Log response build error
fn log_build_error(status: StatusCode, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_400_has_empty_body() {
        let resp = build_400_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(resp.headers().get("Content-Type").is_none());
    }

    #[test]
    fn test_405_lists_allowed_methods() {
        let resp = build_405_response("POST");
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["Allow"], "POST");
    }

    #[test]
    fn test_options_cors_headers() {
        let plain = build_options_response(false);
        assert!(plain.headers().get("Access-Control-Allow-Methods").is_none());

        let cors = build_options_response(true);
        assert_eq!(cors.status(), StatusCode::NO_CONTENT);
        assert!(cors.headers().get("Access-Control-Allow-Methods").is_some());
    }

    #[test]
    fn test_head_html_keeps_length() {
        let resp = build_html_response("<p>hi</p>".to_string(), true);
        assert_eq!(resp.headers()["Content-Length"], "9");
    }

    #[test]
    fn test_common_headers() {
        let mut resp = build_404_response();
        apply_common_headers(&mut resp, "Lucas-Hyper/1.0", true);
        assert_eq!(resp.headers()["Server"], "Lucas-Hyper/1.0");
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
    }
}
