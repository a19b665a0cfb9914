//! SearchResultItem - One product listed on a search-results page
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Sentinel for optional fields that were not present on the page
pub const NOT_AVAILABLE: &str = "N/A";

/// A single product extracted from a search-results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    pub product_name: String,
    pub price: String,
    pub rating: String,
    pub availability: String,
}

impl SearchResultItem {
    /// Build an item from located field texts.
    ///
    /// `price` and `availability` fall back to [`NOT_AVAILABLE`] when absent.
    pub fn new(
        product_name: impl Into<String>,
        price: Option<String>,
        rating: impl Into<String>,
        availability: Option<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            price: price.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            rating: rating.into(),
            availability: availability.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_use_sentinel() {
        let item = SearchResultItem::new("Desk Lamp", None, "4.5 out of 5 stars", None);
        assert_eq!(item.price, "N/A");
        assert_eq!(item.availability, "N/A");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let item = SearchResultItem::new(
            "Desk Lamp",
            Some("$19.99".into()),
            "4.5 out of 5 stars",
            Some("In Stock".into()),
        );
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "productName": "Desk Lamp",
                "price": "$19.99",
                "rating": "4.5 out of 5 stars",
                "availability": "In Stock"
            })
        );
    }

    #[test]
    fn list_survives_json_round_trip() {
        let items = vec![
            SearchResultItem::new("A", Some("$1.00".into()), "5.0 out of 5 stars", None),
            SearchResultItem::new("B \"quoted\"", None, "3.9 out of 5 stars", Some("Only 2 left".into())),
        ];
        let json = serde_json::to_string(&items).expect("serialize");
        let parsed: Vec<SearchResultItem> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, items);
    }
}
