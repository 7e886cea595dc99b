//! # Menu API
//! 
//! HTTP handlers, routing, DTOs, and error mapping for the menu catalog.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{normalize, router};
pub use state::AppState;
