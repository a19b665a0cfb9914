//! ShopScout API Models
//!
//! - Search: query parameters and product listings
//! - Error: JSON error body

mod error;
mod search;

pub use error::*;
pub use search::*;
