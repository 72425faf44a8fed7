//! Character service: cache-aside reads, listing and favorites

pub mod cache;
pub mod service;

pub use cache::CharacterCache;
pub use service::CharacterService;

#[cfg(test)]
pub use cache::mock::MockCharacterCache;
