//! Domain model: entities and value types

pub mod entities;
