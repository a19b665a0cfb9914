//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod result_selectors;
mod search_query;

pub use result_selectors::*;
pub use search_query::*;
