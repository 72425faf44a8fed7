//! Tests for the domain error to HTTP response mapping

use actix_web::body::to_bytes;
use actix_web::http::StatusCode;

use lor_api::handlers::error_handler::handle_domain_error;
use lor_core::errors::{AuthError, CharacterError, DomainError, TokenError};

async fn body_json(response: actix_web::HttpResponse) -> serde_json::Value {
    let bytes = to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[actix_web::test]
async fn duplicate_email_is_409_with_stable_code() {
    let response = handle_domain_error(DomainError::Auth(AuthError::DuplicateEmail));
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["error"], "DUPLICATE_EMAIL");
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn blacklisted_token_is_401() {
    let response = handle_domain_error(DomainError::Token(TokenError::BlacklistedToken));
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "BLACKLISTED_TOKEN");
}

#[actix_web::test]
async fn missing_favorite_is_404_not_found() {
    let response =
        handle_domain_error(DomainError::Character(CharacterError::FavoriteNotFound));
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn store_failure_is_503_upstream_failure_is_502() {
    let store = handle_domain_error(DomainError::StoreUnavailable {
        message: "pool exhausted".to_string(),
    });
    assert_eq!(store.status(), StatusCode::SERVICE_UNAVAILABLE);

    let upstream = handle_domain_error(DomainError::UpstreamUnavailable {
        message: "timeout".to_string(),
    });
    assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);
}

#[actix_web::test]
async fn validation_failure_is_400() {
    let response = handle_domain_error(DomainError::Validation {
        message: "invalid value for 'email'".to_string(),
    });
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}
