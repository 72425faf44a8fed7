//! Database module - Postgres implementations using SQLx

pub mod connection;
pub mod postgres;

pub use connection::create_pool;
pub use postgres::{PgCharacterRepository, PgUserRepository};
