//! Product Extraction
//!
//! Maps the result containers of a parsed search-results page to
//! [`SearchResultItem`]s.
//!
//! An item is kept only when both its title and its rating are found.
//! A missing price or availability is replaced by [`NOT_AVAILABLE`].
//!
//! [`NOT_AVAILABLE`]: crate::domain::entities::NOT_AVAILABLE

use crate::domain::entities::SearchResultItem;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::ResultSelectors;
use crate::ports::document::{DocumentNode, DocumentParser, HtmlDocument};

/// Extracts result items using a fixed set of selectors
#[derive(Debug, Clone, Default)]
pub struct ProductExtractor {
    selectors: ResultSelectors,
}

impl ProductExtractor {
    pub fn new(selectors: ResultSelectors) -> Self {
        Self { selectors }
    }

    pub fn selectors(&self) -> &ResultSelectors {
        &self.selectors
    }

    /// Parse `body` with `parser` and extract its items
    pub fn extract_from<P: DocumentParser>(
        &self,
        parser: &P,
        body: &str,
    ) -> Result<Vec<SearchResultItem>, DomainError> {
        let document = parser.parse(body);
        self.extract(&document)
    }

    /// Extract items from an already parsed document, in document order
    pub fn extract<D: HtmlDocument>(
        &self,
        document: &D,
    ) -> Result<Vec<SearchResultItem>, DomainError> {
        let candidates = document.select_all(&self.selectors.item)?;
        let total = candidates.len();

        let mut items = Vec::with_capacity(total);
        for node in candidates {
            if let Some(item) = self.extract_item(&node)? {
                items.push(item);
            }
        }

        tracing::debug!(
            candidates = total,
            kept = items.len(),
            "Search results extracted"
        );
        Ok(items)
    }

    fn extract_item<N: DocumentNode>(
        &self,
        node: &N,
    ) -> Result<Option<SearchResultItem>, DomainError> {
        let Some(title) = field_text(node, &self.selectors.title)? else {
            return Ok(None);
        };
        let Some(rating) = field_text(node, &self.selectors.rating)? else {
            return Ok(None);
        };
        let price = field_text(node, &self.selectors.price)?;
        let availability = field_text(node, &self.selectors.availability)?;

        Ok(Some(SearchResultItem::new(title, price, rating, availability)))
    }
}

/// Trimmed text of the first descendant matching `selector`
fn field_text<N: DocumentNode>(node: &N, selector: &str) -> Result<Option<String>, DomainError> {
    Ok(node
        .select_first(selector)?
        .map(|found| found.text().trim().to_string()))
}
