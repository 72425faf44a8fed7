use actix_web::{web, HttpResponse};

use crate::dto::character_dto::CharacterResponse;
use crate::handlers::error_handler::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use lor_core::repositories::{CharacterRepository, UserRepository};
use lor_core::services::character::CharacterCache;
use lor_core::services::token::TokenStore;

/// Handler for GET /api/v1/characters/favorites
///
/// Lists the authenticated user's favorited characters, ordered by name.
pub async fn list_favorites<U, B, R, C>(
    state: web::Data<AppState<U, B, R, C>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: TokenStore + 'static,
    R: CharacterRepository + 'static,
    C: CharacterCache + 'static,
{
    match state.character_service.favorites(auth.user_id).await {
        Ok(characters) => {
            let data: Vec<CharacterResponse> =
                characters.into_iter().map(CharacterResponse::from).collect();
            HttpResponse::Ok().json(data)
        }
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/characters/{id}/favorites
///
/// Adds the character to the user's favorites. Idempotent: repeating the
/// call leaves a single favorite row.
///
/// # Response
/// - 204 No Content: favorite recorded (or already present)
/// - 404 Not Found: no character with this id
pub async fn add_favorite<U, B, R, C>(
    state: web::Data<AppState<U, B, R, C>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: TokenStore + 'static,
    R: CharacterRepository + 'static,
    C: CharacterCache + 'static,
{
    let external_id = path.into_inner();

    match state
        .character_service
        .add_favorite(auth.user_id, &external_id)
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/characters/{id}/favorites
///
/// Removes the character from the user's favorites.
///
/// # Response
/// - 204 No Content: favorite removed
/// - 404 Not Found: character unknown, or it was never favorited
pub async fn remove_favorite<U, B, R, C>(
    state: web::Data<AppState<U, B, R, C>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: TokenStore + 'static,
    R: CharacterRepository + 'static,
    C: CharacterCache + 'static,
{
    let external_id = path.into_inner();

    match state
        .character_service
        .remove_favorite(auth.user_id, &external_id)
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
