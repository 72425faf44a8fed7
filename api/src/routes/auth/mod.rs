//! Authentication route handlers
//!
//! - Signup and login with email/password
//! - Refresh token rotation
//! - Signout (token blacklisting)
//! - Current user lookup

pub mod login;
pub mod me;
pub mod refresh;
pub mod signout;
pub mod signup;
