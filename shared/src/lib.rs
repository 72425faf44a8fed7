//! # Shared Module
//!
//! Cross-cutting types used by every layer of the lor-api backend:
//! environment-driven configuration structs and common request types
//! such as pagination.

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::pagination::Pagination;
