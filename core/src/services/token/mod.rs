//! JWT token service: issuing, verification and blacklisting

pub mod config;
pub mod service;
pub mod store;

pub use config::TokenServiceConfig;
pub use service::TokenService;
pub use store::TokenStore;

#[cfg(test)]
pub use store::mock::MockTokenStore;
