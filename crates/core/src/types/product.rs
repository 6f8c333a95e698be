//! Catalog product records.
//!
//! These mirror the JSON shape returned by the remote catalog API. Products
//! are immutable once fetched; the cart copies them on add.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;

/// A catalog item with price, category, rating, and descriptive metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    pub title: String,
    /// Unit price. Decimal keeps cart totals exact.
    pub price: Decimal,
    /// Category label, e.g. "electronics".
    pub category: String,
    /// Image URL.
    pub image: String,
    pub description: String,
    pub rating: Rating,
}

/// Aggregate review rating for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0 to 5.
    pub rate: f64,
    /// Number of reviews.
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_api_json() {
        // The catalog API returns prices and rates as JSON numbers.
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Fits 15 inch laptops",
            "category": "men's clothing",
            "image": "https://example.test/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).expect("valid product JSON");
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.title, "Fjallraven Backpack");
        assert_eq!(product.price, Decimal::new(10995, 2));
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating.count, 120);
        assert!((product.rating.rate - 3.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_product_round_trips_through_serde() {
        let product = Product {
            id: ProductId::new(7),
            title: "White Gold Ring".to_string(),
            price: Decimal::new(999, 2),
            category: "jewelery".to_string(),
            image: "https://example.test/7.jpg".to_string(),
            description: "Classic ring".to_string(),
            rating: Rating { rate: 3.0, count: 400 },
        };

        let json = serde_json::to_string(&product).expect("serialize");
        let back: Product = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, product);
    }
}
