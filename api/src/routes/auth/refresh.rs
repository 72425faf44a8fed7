use actix_web::{web, HttpResponse};

use crate::dto::auth_dto::{RefreshTokenRequest, TokenPairResponse};
use crate::handlers::error_handler::handle_domain_error;
use crate::routes::AppState;

use lor_core::repositories::{CharacterRepository, UserRepository};
use lor_core::services::character::CharacterCache;
use lor_core::services::token::TokenStore;

/// Handler for POST /api/v1/auth/refresh
///
/// Rotates a refresh token into a new token pair. The presented refresh
/// token is blacklisted, so it cannot be replayed.
///
/// # Response
/// - 200 OK: new token pair
/// - 401 Unauthorized: invalid, expired or already-used refresh token
pub async fn refresh<U, B, R, C>(
    state: web::Data<AppState<U, B, R, C>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: TokenStore + 'static,
    R: CharacterRepository + 'static,
    C: CharacterCache + 'static,
{
    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
