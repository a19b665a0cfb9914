//! ResultSelectors - CSS selectors locating fields on a results page

use serde::{Deserialize, Serialize};

/// CSS selectors for one search-results page layout.
///
/// `item` matches each result container; the remaining selectors are
/// evaluated against the descendants of a matched container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSelectors {
    pub item: String,
    pub title: String,
    pub price: String,
    pub rating: String,
    pub availability: String,
}

impl ResultSelectors {
    /// Selectors for the Amazon search-results layout
    pub fn amazon() -> Self {
        Self {
            item: ".s-result-item".to_string(),
            title: "h2 .a-text-normal".to_string(),
            price: ".a-price .a-offscreen".to_string(),
            rating: ".a-icon-alt".to_string(),
            availability: ".a-size-small .a-color-success".to_string(),
        }
    }
}

impl Default for ResultSelectors {
    fn default() -> Self {
        Self::amazon()
    }
}
