//! Domain entities

pub mod character;
pub mod favorite;
pub mod token;
pub mod user;

pub use character::Character;
pub use favorite::Favorite;
pub use token::{Claims, TokenPair, TokenType};
pub use user::User;
