//! External character source - The One API client

pub mod one_api;

pub use one_api::OneApiClient;
