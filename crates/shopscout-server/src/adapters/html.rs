//! HTML document adapter backed by the `scraper` crate.

use scraper::{ElementRef, Html, Selector};
use shopscout::{DocumentNode, DocumentParser, DomainError, HtmlDocument};

/// Parses response bodies with html5ever via `scraper`
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperParser;

/// A parsed document. Not `Send`; keep it inside synchronous code.
pub struct ScrapedDocument(Html);

#[derive(Clone, Copy)]
pub struct ScrapedNode<'a>(ElementRef<'a>);

fn compile(selector: &str) -> Result<Selector, DomainError> {
    Selector::parse(selector).map_err(|e| DomainError::invalid_selector(selector, format!("{e:?}")))
}

impl DocumentParser for ScraperParser {
    type Document = ScrapedDocument;

    fn parse(&self, body: &str) -> ScrapedDocument {
        ScrapedDocument(Html::parse_document(body))
    }
}

impl HtmlDocument for ScrapedDocument {
    type Node<'a> = ScrapedNode<'a>;

    fn select_all(&self, selector: &str) -> Result<Vec<ScrapedNode<'_>>, DomainError> {
        let selector = compile(selector)?;
        Ok(self.0.select(&selector).map(ScrapedNode).collect())
    }
}

impl<'a> DocumentNode for ScrapedNode<'a> {
    fn select_first(&self, selector: &str) -> Result<Option<Self>, DomainError> {
        let selector = compile(selector)?;
        Ok(self.0.select(&selector).next().map(ScrapedNode))
    }

    fn text(&self) -> String {
        self.0.text().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RESULTS_PAGE;
    use shopscout::ProductExtractor;

    #[test]
    fn selects_result_containers_in_order() {
        let document = ScraperParser.parse(RESULTS_PAGE);
        let nodes = document.select_all(".s-result-item").expect("valid selector");
        assert_eq!(nodes.len(), 4);
    }

    #[test]
    fn select_first_searches_descendants() {
        let document = ScraperParser.parse(RESULTS_PAGE);
        let nodes = document.select_all(".s-result-item").expect("valid selector");
        let price = nodes[0]
            .select_first(".a-price .a-offscreen")
            .expect("valid selector")
            .map(|n| n.text());
        assert_eq!(price.as_deref(), Some("$19.99"));
    }

    #[test]
    fn text_concatenates_nested_text() {
        let document = ScraperParser.parse("<div class=\"x\"><b>Hello</b> <i>world</i></div>");
        let nodes = document.select_all(".x").expect("valid selector");
        assert_eq!(nodes[0].text(), "Hello world");
    }

    #[test]
    fn invalid_selector_is_reported() {
        let document = ScraperParser.parse("<html></html>");
        let err = document.select_all("div[").err().expect("should fail");
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn extracts_amazon_results_page() {
        let items = ProductExtractor::default()
            .extract_from(&ScraperParser, RESULTS_PAGE)
            .expect("extract");

        assert_eq!(items.len(), 2);

        assert_eq!(items[0].product_name, "Anker 4-Port USB 3.0 Hub");
        assert_eq!(items[0].price, "$19.99");
        assert_eq!(items[0].rating, "4.7 out of 5 stars");
        assert_eq!(items[0].availability, "In Stock");

        // Listed without a price: kept, with sentinels
        assert_eq!(items[1].product_name, "Generic USB-C Hub");
        assert_eq!(items[1].price, "N/A");
        assert_eq!(items[1].availability, "N/A");
    }

    #[test]
    fn page_without_results_extracts_nothing() {
        let items = ProductExtractor::default()
            .extract_from(&ScraperParser, "<html><body><p>No results</p></body></html>")
            .expect("extract");
        assert!(items.is_empty());
    }
}
