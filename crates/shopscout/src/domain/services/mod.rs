//! Domain Services
//!
//! Stateless logic operating on entities and ports.

mod extraction;

pub use extraction::*;
