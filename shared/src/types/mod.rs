//! Common types shared across layers

pub mod pagination;
