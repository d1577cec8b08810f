//! Product catalog model and display formatting for the home page.

use serde::Deserialize;
use tracing::warn;

use super::api::CatalogError;

/// Maximum characters of a product title shown on a card.
pub const TITLE_LIMIT: usize = 50;

/// Maximum characters of a product description shown on a card.
pub const DESCRIPTION_LIMIT: usize = 100;

/// Message shown when the catalog cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load products";

/// Product record as returned by the catalog endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}

/// Load state of the home page catalog.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogState {
    Loading,
    Loaded(Vec<Product>),
    Errored(String),
}

impl CatalogState {
    /// Resolve a fetch outcome. Failures collapse to a generic message.
    pub fn from_result(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(products) => Self::Loaded(products),
            Err(e) => {
                warn!("Product fetch failed: {}", e);
                Self::Errored(LOAD_ERROR_MESSAGE.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Errored(message) => Some(message),
            _ => None,
        }
    }

    /// Cards to render. Empty unless loaded.
    pub fn cards(&self) -> Vec<ProductCard> {
        match self {
            Self::Loaded(products) => products.iter().map(ProductCard::from).collect(),
            _ => Vec::new(),
        }
    }
}

/// Display-ready product card.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCard {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
    /// Untruncated title, used as the image alt text.
    pub alt: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: truncate(&product.title, TITLE_LIMIT),
            description: truncate(&product.description, DESCRIPTION_LIMIT),
            price: format_price(product.price),
            image: product.image.clone(),
            alt: product.title.clone(),
        }
    }
}

/// Cut `text` to `limit` characters, appending `...` when anything was removed.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// `$` followed by the price with exactly two decimals.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, description: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: description.to_string(),
            price,
            image: format!("https://img.example/{id}.jpg"),
            category: "misc".to_string(),
        }
    }

    #[test]
    fn test_truncate_boundaries() {
        assert_eq!(truncate("short", 50), "short");
        let exact = "a".repeat(50);
        assert_eq!(truncate(&exact, 50), exact);
        let long = "b".repeat(51);
        assert_eq!(truncate(&long, 50), format!("{}...", "b".repeat(50)));
    }

    #[test]
    fn test_truncate_counts_characters() {
        let text = "é".repeat(60);
        let cut = truncate(&text, 50);
        assert_eq!(cut.chars().count(), 53);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(9.5), "$9.50");
        assert_eq!(format_price(109.95), "$109.95");
        assert_eq!(format_price(22.3), "$22.30");
        assert_eq!(format_price(7.0), "$7.00");
    }

    #[test]
    fn test_cards_for_loaded_products() {
        let long_title = "T".repeat(80);
        let long_desc = "D".repeat(150);
        let state = CatalogState::from_result(Ok(vec![
            product(1, &long_title, &long_desc, 9.5),
            product(2, "Backpack", "Fits 15 inch laptops", 109.95),
            product(3, "Shirt", "Slim fit", 22.3),
        ]));

        let cards = state.cards();
        assert_eq!(cards.len(), 3);
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);

        assert_eq!(cards[0].title, format!("{}...", "T".repeat(50)));
        assert_eq!(cards[0].description, format!("{}...", "D".repeat(100)));
        assert_eq!(cards[0].price, "$9.50");
        assert_eq!(cards[0].alt, long_title);
        assert_eq!(cards[1].title, "Backpack");
        assert_eq!(cards[1].description, "Fits 15 inch laptops");
    }

    #[test]
    fn test_failed_fetch_shows_single_error() {
        for err in [
            CatalogError::Network("connection refused".to_string()),
            CatalogError::Status(500),
            CatalogError::Decode("expected array".to_string()),
        ] {
            let state = CatalogState::from_result(Err(err));
            assert_eq!(state, CatalogState::Errored(LOAD_ERROR_MESSAGE.to_string()));
            assert!(state.cards().is_empty());
            assert!(!state.is_loading());
        }
    }

    #[test]
    fn test_loading_has_no_cards() {
        assert!(CatalogState::Loading.is_loading());
        assert!(CatalogState::Loading.cards().is_empty());
        assert_eq!(CatalogState::Loading.error(), None);
    }

    #[test]
    fn test_product_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;
        let parsed: Product = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, 1);
        assert_eq!(parsed.category, "men's clothing");
    }
}
