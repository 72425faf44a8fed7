//! Character route handlers
//!
//! - Paginated listing with optional name filter
//! - Single character lookup (cache-aside)
//! - Favorites listing, add and remove

pub mod favorites;
pub mod get;
pub mod list;
