//! Calculator web page

use crate::http::{self, HttpResponse};

const INDEX_HTML: &str = include_str!("index.html");

/// Serve the calculator page, pointed at the configured calculate path
pub fn serve_homepage(calculate_path: &str, is_head: bool) -> HttpResponse {
    let html = INDEX_HTML.replace("{{CALCULATE_PATH}}", calculate_path);
    http::build_html_response(html, is_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_page_posts_to_configured_path() {
        let resp = serve_homepage("/api/lucas", false);
        assert_eq!(resp.status(), hyper::StatusCode::OK);

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("fetch('/api/lucas'"));
        assert!(!html.contains("{{CALCULATE_PATH}}"));
    }
}
