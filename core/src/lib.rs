//! # Core Domain Layer
//!
//! Business logic for the lor-api backend, independent of any web
//! framework or storage driver. The crate defines:
//!
//! - **Entities**: users, characters, favorites and JWT token types
//! - **Errors**: the domain error taxonomy shared by every layer
//! - **Repositories**: persistence traits implemented by the infra crate
//! - **Services**: token issue/verify/blacklist, authentication,
//!   the cache-aside character service and the periodic sync task
//!
//! Concrete Postgres/Redis/HTTP implementations live in `lor_infra`;
//! the traits here keep the services testable with in-memory mocks.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
