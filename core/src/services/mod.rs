//! Service layer
//!
//! - `token`: JWT issue/verify and the blacklist-backed token store
//! - `auth`: signup, login, refresh rotation and signout
//! - `character`: cache-aside reads, listing and favorites
//! - `sync`: the periodic upstream sync task

pub mod auth;
pub mod character;
pub mod sync;
pub mod token;
