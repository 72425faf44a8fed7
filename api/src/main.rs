use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

mod app;
mod dto;
mod handlers;
mod middleware;
mod routes;

use crate::middleware::auth::AccessTokenVerifier;
use crate::routes::AppState;

use lor_core::services::auth::{AuthService, AuthServiceConfig};
use lor_core::services::character::CharacterService;
use lor_core::services::sync::{SyncRunner, SyncTask, SyncTaskConfig};
use lor_core::services::token::{TokenService, TokenServiceConfig};
use lor_infra::cache::{RedisCharacterCache, RedisClient, RedisTokenStore};
use lor_infra::database::{create_pool, PgCharacterRepository, PgUserRepository};
use lor_infra::source::OneApiClient;
use lor_shared::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting lor-api server");

    let config = AppConfig::from_env();

    let pool = create_pool(&config.database)
        .await
        .map_err(into_io_error)?;
    let redis = RedisClient::new(config.cache.clone())
        .await
        .map_err(into_io_error)?;

    let token_store = RedisTokenStore::new(redis.clone(), pool.clone());
    let token_config = TokenServiceConfig::from(&config.auth);

    // One token service lives inside the auth service; a second, sharing
    // the same store, backs the JWT middleware as a trait object.
    let verifier: Arc<dyn AccessTokenVerifier> = Arc::new(TokenService::new(
        token_store.clone(),
        token_config.clone(),
    ));

    let auth_service = Arc::new(AuthService::new(
        PgUserRepository::new(pool.clone()),
        TokenService::new(token_store.clone(), token_config),
        AuthServiceConfig::from(&config.auth),
    ));

    let character_service = Arc::new(CharacterService::new(
        PgCharacterRepository::new(pool.clone()),
        RedisCharacterCache::new(redis.clone()),
        config.cache.character_ttl,
    ));

    // Background character sync, sharing the pool and the Redis connection
    let source = OneApiClient::new(&config.external_api).map_err(into_io_error)?;
    let sync_task = SyncTask::new(
        PgCharacterRepository::new(pool.clone()),
        RedisCharacterCache::new(redis.clone()),
        source,
        SyncTaskConfig {
            page_size: config.external_api.page_size,
            max_retries: config.external_api.max_retries,
            retry_delay_ms: config.external_api.retry_delay_ms,
        },
    );
    let runner = SyncRunner::new(
        sync_task,
        token_store,
        config.sync.interval(),
        config.sync.run_on_startup,
    );
    tokio::spawn(runner.run());

    let app_state = web::Data::new(AppState {
        auth_service,
        character_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;
    let mut server = HttpServer::new(move || {
        app::create_app(app_state.clone(), Arc::clone(&verifier))
    });
    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}

fn into_io_error(error: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, error.to_string())
}
