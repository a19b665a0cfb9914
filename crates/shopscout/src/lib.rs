//! ShopScout Domain Library
//!
//! Core domain types and interfaces for scraping e-commerce search results.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (SearchResultItem)
//!   - `value_objects/`: Immutable value types (SearchQuery, ResultSelectors)
//!   - `services/`: Extraction of result items from a parsed document
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `document`: HTML document querying
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use shopscout::domain::{ProductExtractor, SearchQuery};
//! use shopscout::ports::{DocumentParser, ProductSearchService};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    DomainError, ProductExtractor, ResultSelectors, SearchQuery, SearchResultItem, NOT_AVAILABLE,
};
pub use ports::{DocumentNode, DocumentParser, HtmlDocument, ProductSearchService};
