//! Route handlers grouped by resource

pub mod auth;
pub mod characters;

use std::sync::Arc;

use lor_core::repositories::{CharacterRepository, UserRepository};
use lor_core::services::auth::AuthService;
use lor_core::services::character::{CharacterCache, CharacterService};
use lor_core::services::token::TokenStore;

/// Application state that holds the shared services
pub struct AppState<U, B, R, C>
where
    U: UserRepository,
    B: TokenStore,
    R: CharacterRepository,
    C: CharacterCache,
{
    pub auth_service: Arc<AuthService<U, B>>,
    pub character_service: Arc<CharacterService<R, C>>,
}
