//! Endpoint URL builders for the data service.

/// List endpoint: `GET {base}/api/v1/data/get`.
pub fn list_url(base_url: &str) -> String {
    format!("{}/api/v1/data/get", base_url)
}

/// Create endpoint: `POST {base}/api/v1/data/post`.
pub fn create_url(base_url: &str) -> String {
    format!("{}/api/v1/data/post", base_url)
}
