//! Mapping from the domain error taxonomy to HTTP responses.
//!
//! Every handler funnels its error path through `handle_domain_error`
//! so status codes and response bodies stay uniform across routes.

use actix_web::{http::StatusCode, HttpResponse};
use validator::ValidationErrors;

use lor_core::errors::{AuthError, CharacterError, DomainError, ErrorResponse, TokenError};

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Auth(AuthError::DuplicateEmail) => StatusCode::CONFLICT,
        DomainError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
        DomainError::Auth(AuthError::UserNotFound) => StatusCode::NOT_FOUND,
        DomainError::Token(TokenError::InvalidToken)
        | DomainError::Token(TokenError::ExpiredToken)
        | DomainError::Token(TokenError::BlacklistedToken) => StatusCode::UNAUTHORIZED,
        DomainError::Token(TokenError::TokenGenerationFailed) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::Character(CharacterError::NotFound)
        | DomainError::Character(CharacterError::FavoriteNotFound) => StatusCode::NOT_FOUND,
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::StoreUnavailable { .. } | DomainError::CacheUnavailable { .. } => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        DomainError::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert a domain error into its HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = status_for(&error);

    if status.is_server_error() {
        log::error!("API error ({}): {}", error.code(), error);
    } else {
        log::debug!("Request failed ({}): {}", error.code(), error);
    }

    HttpResponse::build(status).json(ErrorResponse::from(&error))
}

/// Convert validator failures into the standard 400 response
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .iter()
        .map(|(field, _)| format!("invalid value for '{}'", field))
        .collect::<Vec<_>>()
        .join(", ");

    handle_domain_error(DomainError::Validation { message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_is_conflict() {
        let status = status_for(&DomainError::Auth(AuthError::DuplicateEmail));
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn token_failures_are_unauthorized() {
        for err in [
            TokenError::InvalidToken,
            TokenError::ExpiredToken,
            TokenError::BlacklistedToken,
        ] {
            assert_eq!(
                status_for(&DomainError::Token(err)),
                StatusCode::UNAUTHORIZED
            );
        }
    }

    #[test]
    fn unavailable_stores_are_503_upstream_is_502() {
        let store = DomainError::StoreUnavailable {
            message: "down".to_string(),
        };
        let upstream = DomainError::UpstreamUnavailable {
            message: "down".to_string(),
        };
        assert_eq!(status_for(&store), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_for(&upstream), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn missing_character_is_not_found() {
        assert_eq!(
            status_for(&DomainError::Character(CharacterError::NotFound)),
            StatusCode::NOT_FOUND
        );
    }
}
