use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth_dto::SignoutRequest;
use crate::handlers::error_handler::handle_domain_error;
use crate::middleware::auth::extract_bearer_token;
use crate::routes::AppState;

use lor_core::errors::{DomainError, TokenError};
use lor_core::repositories::{CharacterRepository, UserRepository};
use lor_core::services::character::CharacterCache;
use lor_core::services::token::TokenStore;

/// Handler for POST /api/v1/auth/signout
///
/// Ends the session by blacklisting both the presented access token and
/// the refresh token from the request body. Requires authentication.
///
/// # Response
/// - 204 No Content: session ended
/// - 401 Unauthorized: missing/invalid access token or refresh token
pub async fn signout<U, B, R, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, B, R, C>>,
    request: web::Json<SignoutRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: TokenStore + 'static,
    R: CharacterRepository + 'static,
    C: CharacterCache + 'static,
{
    // The middleware already verified this token; re-extract the raw
    // value since blacklisting needs the token itself, not the claims.
    let access_token = match extract_bearer_token(&req) {
        Some(token) => token,
        None => {
            return handle_domain_error(DomainError::Token(TokenError::InvalidToken));
        }
    };

    match state
        .auth_service
        .signout(&access_token, &request.refresh_token)
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
