use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{SignupRequest, UserResponse};
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use lor_core::repositories::{CharacterRepository, UserRepository};
use lor_core::services::character::CharacterCache;
use lor_core::services::token::TokenStore;

/// Handler for POST /api/v1/auth/signup
///
/// Registers a new account.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "frodo@shire.me",
///     "password": "string (8-128 chars)"
/// }
/// ```
///
/// # Response
/// - 201 Created: the new account (id, email, created_at)
/// - 400 Bad Request: malformed email or password
/// - 409 Conflict: email already registered
pub async fn signup<U, B, R, C>(
    state: web::Data<AppState<U, B, R, C>>,
    request: web::Json<SignupRequest>,
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
        .signup(&request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
