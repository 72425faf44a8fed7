use actix_web::{web, HttpResponse};

use crate::dto::auth_dto::UserResponse;
use crate::handlers::error_handler::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use lor_core::repositories::{CharacterRepository, UserRepository};
use lor_core::services::character::CharacterCache;
use lor_core::services::token::TokenStore;

/// Handler for GET /api/v1/auth/me
///
/// Returns the account behind the presented access token.
///
/// # Response
/// - 200 OK: the account (id, email, created_at)
/// - 401 Unauthorized: missing or invalid access token
/// - 404 Not Found: account no longer exists
pub async fn me<U, B, R, C>(
    state: web::Data<AppState<U, B, R, C>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: TokenStore + 'static,
    R: CharacterRepository + 'static,
    C: CharacterCache + 'static,
{
    match state.auth_service.current_user(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
