//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service wiring, and the Axum
//! server lifecycle. The storage handle is constructed here and injected
//! into each component; nothing reads it from ambient state.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;

use crate::application::services::{AccountService, LinkService};
use crate::config::{AliasStrategy, Config};
use crate::domain::AliasGenerator;
use crate::infrastructure::alias::{HttpProviderAlias, RandomAlias};
use crate::infrastructure::persistence::{PgShortLinkRepository, PgUserRepository};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Alias generator strategy
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migrations, bind, or server
/// runtime fail.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let pool = Arc::new(pool);
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let link_repository = Arc::new(PgShortLinkRepository::new(pool.clone()));

    let generator: Arc<dyn AliasGenerator> = match config.alias_strategy {
        AliasStrategy::Random => Arc::new(RandomAlias),
        AliasStrategy::ExternalProvider => {
            let endpoint = config
                .alias_provider_url
                .clone()
                .context("ALIAS_PROVIDER_URL must be set for the external-provider strategy")?;
            Arc::new(HttpProviderAlias::new(
                endpoint,
                Duration::from_millis(config.alias_provider_timeout_ms),
            ))
        }
    };
    tracing::info!(strategy = generator.name(), "Alias generator ready");

    let account_service = Arc::new(AccountService::new(user_repository));
    let link_service = Arc::new(LinkService::new(
        link_repository,
        generator,
        config.base_url.clone(),
        config.alias_max_attempts,
    ));

    let state = AppState::new(pool, account_service, link_service);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
