//! Authentication service: signup, login, refresh and signout

pub mod config;
pub mod service;

pub use config::AuthServiceConfig;
pub use service::AuthService;
