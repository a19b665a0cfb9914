//! Domain Entities

mod search_result_item;

pub use search_result_item::*;
