//! JWT authentication middleware.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! through the token service (signature, expiry and blacklist) and
//! injects an `AuthContext` into the request extensions. Handlers pull
//! the context back out with the `AuthContext` extractor.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    http::StatusCode,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse, ResponseError,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    fmt,
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use lor_core::domain::entities::token::Claims;
use lor_core::errors::{DomainError, ErrorResponse, TokenError};
use lor_core::services::token::{TokenService, TokenStore};

/// Access token verification behind a trait object, so the middleware
/// does not carry the token store's type parameter.
#[async_trait]
pub trait AccessTokenVerifier: Send + Sync {
    async fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError>;
}

#[async_trait]
impl<S: TokenStore> AccessTokenVerifier for TokenService<S> {
    async fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        TokenService::verify_access_token(self, token).await
    }
}

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
    /// JWT ID of the presented access token
    pub jti: String,
}

impl AuthContext {
    /// Creates an authentication context from verified claims
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;
        Ok(Self {
            user_id,
            jti: claims.jti,
        })
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    verifier: Arc<dyn AccessTokenVerifier>,
}

impl JwtAuth {
    /// Creates the middleware around a token verifier
    pub fn new(verifier: Arc<dyn AccessTokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<dyn AccessTokenVerifier>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);

        Box::pin(async move {
            let token = match extract_bearer_token(req.request()) {
                Some(token) => token,
                None => {
                    return Err(unauthorized(DomainError::Token(TokenError::InvalidToken)));
                }
            };

            let claims = verifier
                .verify_access_token(&token)
                .await
                .map_err(unauthorized)?;

            let context = AuthContext::from_claims(claims).map_err(unauthorized)?;
            req.extensions_mut().insert(context);

            service.call(req).await
        })
    }
}

/// Extracts the bearer token from the Authorization header
pub fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// 401 carrying the standard error body
fn unauthorized(error: DomainError) -> Error {
    AuthFailure(error).into()
}

#[derive(Debug)]
struct AuthFailure(DomainError);

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for AuthFailure {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized().json(ErrorResponse::from(&self.0))
    }
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized(DomainError::Token(TokenError::InvalidToken)));

        ready(result)
    }
}
