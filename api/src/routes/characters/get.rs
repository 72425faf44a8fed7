use actix_web::{web, HttpResponse};

use crate::dto::character_dto::CharacterResponse;
use crate::handlers::error_handler::handle_domain_error;
use crate::routes::AppState;

use lor_core::repositories::{CharacterRepository, UserRepository};
use lor_core::services::character::CharacterCache;
use lor_core::services::token::TokenStore;

/// Handler for GET /api/v1/characters/{id}
///
/// Fetches one character by upstream id, served cache-aside: cache hit
/// first, otherwise the database (repopulating the cache on the way out).
///
/// # Response
/// - 200 OK: the character
/// - 401 Unauthorized: missing or invalid access token
/// - 404 Not Found: no character with this id
pub async fn get<U, B, R, C>(
    state: web::Data<AppState<U, B, R, C>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: TokenStore + 'static,
    R: CharacterRepository + 'static,
    C: CharacterCache + 'static,
{
    let external_id = path.into_inner();

    match state.character_service.get(&external_id).await {
        Ok(character) => HttpResponse::Ok().json(CharacterResponse::from(character)),
        Err(error) => handle_domain_error(error),
    }
}
