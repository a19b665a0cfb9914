//! Service Ports
//!
//! Abstract interfaces for external services.

mod product_search;

pub use product_search::*;
