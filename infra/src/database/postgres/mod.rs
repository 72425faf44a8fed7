//! PostgreSQL repository implementations

pub mod character_repository_impl;
pub mod user_repository_impl;

pub use character_repository_impl::PgCharacterRepository;
pub use user_repository_impl::PgUserRepository;
