//! Request and response shapes for the HTTP boundary

pub mod auth_dto;
pub mod character_dto;

pub use auth_dto::{
    LoginRequest, RefreshTokenRequest, SignoutRequest, SignupRequest, TokenPairResponse,
    UserResponse,
};
pub use character_dto::{CharacterListQuery, CharacterResponse};
