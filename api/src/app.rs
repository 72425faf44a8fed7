//! Application factory
//!
//! Builds the actix-web application with all routes, middleware and the
//! shared application state. Generic over the repository, cache and
//! token store implementations so tests can run it against in-memory
//! mocks.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::auth::{AccessTokenVerifier, JwtAuth};
use crate::middleware::cors::create_cors;
use crate::routes::auth::{login, me, refresh, signout, signup};
use crate::routes::characters::{favorites, get, list};
use crate::routes::AppState;

use lor_core::repositories::{CharacterRepository, UserRepository};
use lor_core::services::character::CharacterCache;
use lor_core::services::token::TokenStore;

/// Create and configure the application with all dependencies
pub fn create_app<U, B, R, C>(
    app_state: web::Data<AppState<U, B, R, C>>,
    verifier: Arc<dyn AccessTokenVerifier>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    B: TokenStore + 'static,
    R: CharacterRepository + 'static,
    C: CharacterCache + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(signup::signup::<U, B, R, C>))
                        .route("/login", web::post().to(login::login::<U, B, R, C>))
                        .route("/refresh", web::post().to(refresh::refresh::<U, B, R, C>))
                        .route(
                            "/signout",
                            web::post()
                                .to(signout::signout::<U, B, R, C>)
                                .wrap(JwtAuth::new(Arc::clone(&verifier))),
                        )
                        .route(
                            "/me",
                            web::get()
                                .to(me::me::<U, B, R, C>)
                                .wrap(JwtAuth::new(Arc::clone(&verifier))),
                        ),
                )
                .service(
                    web::scope("/characters")
                        .wrap(JwtAuth::new(Arc::clone(&verifier)))
                        // Literal segment must be registered before "/{id}"
                        .route(
                            "/favorites",
                            web::get().to(favorites::list_favorites::<U, B, R, C>),
                        )
                        .route("", web::get().to(list::list::<U, B, R, C>))
                        .route("/{id}", web::get().to(get::get::<U, B, R, C>))
                        .route(
                            "/{id}/favorites",
                            web::post().to(favorites::add_favorite::<U, B, R, C>),
                        )
                        .route(
                            "/{id}/favorites",
                            web::delete().to(favorites::remove_favorite::<U, B, R, C>),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "lor-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "NOT_FOUND",
        "message": "The requested resource was not found"
    }))
}
