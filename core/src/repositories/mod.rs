//! Repository traits for persisted entities
//!
//! Concrete implementations live in the infra crate; in-memory mocks are
//! compiled for tests only.

pub mod character;
pub mod user;

pub use character::CharacterRepository;
pub use user::UserRepository;
