//! Document Port
//!
//! Abstract interface for querying a parsed HTML document with CSS selectors.

use crate::domain::errors::DomainError;

/// A node in a parsed document
pub trait DocumentNode: Sized {
    /// First descendant matching `selector`, in document order
    fn select_first(&self, selector: &str) -> Result<Option<Self>, DomainError>;

    /// Concatenated text content of this node and its descendants
    fn text(&self) -> String;
}

/// A parsed HTML document
pub trait HtmlDocument {
    type Node<'a>: DocumentNode
    where
        Self: 'a;

    /// All nodes matching `selector`, in document order
    fn select_all(&self, selector: &str) -> Result<Vec<Self::Node<'_>>, DomainError>;
}

/// Parses response bodies into queryable documents
pub trait DocumentParser: Send + Sync {
    type Document: HtmlDocument;

    fn parse(&self, body: &str) -> Self::Document;
}
