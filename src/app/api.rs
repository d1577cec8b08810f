//! Outbound HTTP for the client.
//!
//! The browser build goes through `window.fetch`; native builds use reqwest.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::catalog::Product;

/// Public product listing, limited to six records.
pub const CATALOG_URL: &str = "https://fakestoreapi.com/products?limit=6";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Source of catalog products.
#[async_trait(?Send)]
pub trait ProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Remote catalog over HTTP.
#[derive(Clone, Debug)]
pub struct HttpCatalog {
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(CATALOG_URL)
    }
}

#[async_trait(?Send)]
impl ProductSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let products: Vec<Product> = fetch_json(&self.url).await?;
        debug!(count = products.len(), "Fetched catalog products");
        Ok(products)
    }
}

/// GET `url` and decode the JSON body. Non-2xx responses are errors.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, CatalogError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let js_err = |e: wasm_bindgen::JsValue| CatalogError::Network(format!("{:?}", e));

    let window =
        web_sys::window().ok_or_else(|| CatalogError::Network("no window".to_string()))?;

    let opts = web_sys::RequestInit::new();
    opts.set_method("GET");
    let request = web_sys::Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_err)?;

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: web_sys::Response = value.dyn_into().map_err(js_err)?;
    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }

    let body = JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(|e| CatalogError::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| CatalogError::Decode(e.to_string()))
}

/// GET `url` and decode the JSON body. Non-2xx responses are errors.
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, CatalogError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status.as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| CatalogError::Decode(e.to_string()))
}
