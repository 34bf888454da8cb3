//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::config;

/// Get the base URL for API requests
///
/// # Returns
/// - Configured base URL without a trailing slash, e.g. "http://localhost:5000"
pub fn api_base() -> String {
    config().api.base_url.trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/orders");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Join a base URL and an absolute path without doubling the slash
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:5000/", "/api/orders"),
            "http://localhost:5000/api/orders"
        );
        assert_eq!(
            join_url("http://localhost:5000", "api/orders"),
            "http://localhost:5000/api/orders"
        );
    }
}
