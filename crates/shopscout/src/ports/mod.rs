//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (HTML parsing, product search).
//!
//! Implementations of these traits live in the infrastructure layer.

pub mod document;
pub mod services;

// Re-exports
pub use document::*;
pub use services::*;
