//! # Menu Core
//! 
//! Domain entities, record-operation services, and repository traits for the
//! restaurant menu catalog.

pub mod domain;
pub mod ids;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
