use crate::shared::api_utils::api_url;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::common::AggregateRoot;
use gloo_net::http::Request;

/// `GET /api/products/new`
pub async fn fetch_new_products() -> Result<Vec<Product>, String> {
    let url = api_url(&format!("{}/new", Product::collection_path()));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse: {}", e))
}
