use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, TokenPairResponse};
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use lor_core::repositories::{CharacterRepository, UserRepository};
use lor_core::services::character::CharacterCache;
use lor_core::services::token::TokenStore;

/// Handler for POST /api/v1/auth/login
///
/// Authenticates an account and issues an access/refresh token pair.
///
/// # Response
/// - 200 OK: token pair
/// - 400 Bad Request: malformed request body
/// - 401 Unauthorized: unknown email or wrong password
pub async fn login<U, B, R, C>(
    state: web::Data<AppState<U, B, R, C>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: TokenStore + 'static,
    R: CharacterRepository + 'static,
    C: CharacterCache + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
