//! Request-derived base URL.
//!
//! Locally stored locators are resolved against the inbound request's
//! scheme and host, so responses stay correct across domain changes. The
//! handler threads the derived value into the storage resolver explicitly;
//! the configured `PUBLIC_BASE_URL` is the fallback when no usable Host
//! header is present.

use axum::http::{header, HeaderMap};

/// Derive `scheme://host` from the request headers.
///
/// The scheme honors `x-forwarded-proto` (set by any fronting proxy) and
/// defaults to `http`.
pub fn request_base_url(headers: &HeaderMap, fallback: &str) -> String {
    match headers.get(header::HOST).and_then(|v| v.to_str().ok()) {
        Some(host) if !host.is_empty() => {
            let scheme = headers
                .get("x-forwarded-proto")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("http");
            format!("{scheme}://{host}")
        }
        _ => fallback.trim_end_matches('/').to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn uses_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("gifcamp.example"));
        assert_eq!(
            request_base_url(&headers, "http://fallback"),
            "http://gifcamp.example"
        );
    }

    #[test]
    fn honors_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("gifcamp.example"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert_eq!(
            request_base_url(&headers, "http://fallback"),
            "https://gifcamp.example"
        );
    }

    #[test]
    fn falls_back_to_configured_base() {
        let headers = HeaderMap::new();
        assert_eq!(
            request_base_url(&headers, "http://localhost:3000/"),
            "http://localhost:3000"
        );
    }
}
