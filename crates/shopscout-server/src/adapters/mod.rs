//! Infrastructure Adapters
//!
//! Concrete implementations of the ports defined in the `shopscout` crate.

pub mod amazon;
pub mod html;

pub use amazon::AmazonProductSearch;
pub use html::ScraperParser;
