use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::character_dto::{CharacterListQuery, CharacterResponse};
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use lor_core::repositories::{CharacterRepository, UserRepository};
use lor_core::services::character::CharacterCache;
use lor_core::services::token::TokenStore;
use lor_shared::types::pagination::PaginatedResponse;

/// Handler for GET /api/v1/characters
///
/// Lists characters ordered by name, paginated, with an optional
/// case-insensitive `name` substring filter.
///
/// # Query Parameters
/// - `page`: 1-indexed page number (default 1)
/// - `per_page`: items per page, clamped to 1-100 (default 20)
/// - `name`: optional substring filter
///
/// # Response
/// - 200 OK: `{ "data": [...], "page": N, "per_page": N, "total": N }`
/// - 401 Unauthorized: missing or invalid access token
pub async fn list<U, B, R, C>(
    state: web::Data<AppState<U, B, R, C>>,
    query: web::Query<CharacterListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: TokenStore + 'static,
    R: CharacterRepository + 'static,
    C: CharacterCache + 'static,
{
    if let Err(errors) = query.validate() {
        return handle_validation_errors(errors);
    }

    let pagination = query.pagination();
    let name_filter = query.name.as_deref();

    match state
        .character_service
        .list(&pagination, name_filter)
        .await
    {
        Ok((characters, total)) => {
            let data: Vec<CharacterResponse> =
                characters.into_iter().map(CharacterResponse::from).collect();
            HttpResponse::Ok().json(PaginatedResponse::new(data, &pagination, total))
        }
        Err(error) => handle_domain_error(error),
    }
}
