//! Cache module - Redis-backed implementations

pub mod character_cache;
pub mod redis_client;
pub mod token_store;

pub use character_cache::RedisCharacterCache;
pub use redis_client::RedisClient;
pub use token_store::RedisTokenStore;
