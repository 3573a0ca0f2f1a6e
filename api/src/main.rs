use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use scribe_api::app::{create_app, AppState};
use scribe_api::telemetry::init_tracing;
use scribe_core::repositories::{
    BlogRepository, InMemoryBlogRepository, InMemoryUserRepository, UserRepository,
};
use scribe_infra::database::{ensure_schema, DatabasePool, MySqlBlogRepository, MySqlUserRepository};
use scribe_infra::mail::{create_mail_service, MailServiceAdapter};
use scribe_shared::config::{AppConfig, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging)?;

    tracing::info!(
        environment = ?config.environment,
        backend = ?config.database.backend,
        mail_provider = ?config.mail.provider,
        "Starting Scribe API server"
    );

    if config.auth.jwt.is_using_default_secret() {
        if config.is_production() {
            anyhow::bail!("JWT_SECRET must be set in production");
        }
        tracing::warn!("JWT_SECRET not set, using the development default");
    }

    let mail_service = create_mail_service(&config.mail, config.environment)
        .context("mail relay must be configured in production")?;
    let mailer = Arc::new(MailServiceAdapter::from_boxed(mail_service));
    tracing::info!(provider = mailer.provider_name(), "Mail service ready");

    match config.database.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on restart");
            let state = AppState::new(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryBlogRepository::new()),
                mailer,
                &config,
            );
            serve(state, None, config).await
        }
        StorageBackend::Mysql => {
            let pool = DatabasePool::new(&config.database)
                .await
                .context("failed to connect to MySQL")?;
            ensure_schema(pool.get_pool())
                .await
                .context("failed to create database schema")?;
            tracing::info!(stats = %pool.get_statistics(), "Database ready");

            let state = AppState::new(
                Arc::new(MySqlUserRepository::new(pool.get_pool().clone())),
                Arc::new(MySqlBlogRepository::new(pool.get_pool().clone())),
                mailer,
                &config,
            );
            serve(state, Some(pool), config).await
        }
    }
}

async fn serve<U, B>(
    state: AppState<U, B, MailServiceAdapter>,
    pool: Option<DatabasePool>,
    config: AppConfig,
) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
{
    let state = web::Data::new(state);
    let pool = pool.map(web::Data::new);
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;

    let server_pool = pool.clone();
    let mut server = HttpServer::new(move || {
        let app = create_app(state.clone(), &config);
        match &server_pool {
            Some(pool) => app.app_data(pool.clone()),
            None => app,
        }
    })
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?;

    if workers > 0 {
        server = server.workers(workers);
    }

    tracing::info!(address = %bind_address, "Server listening");
    server.run().await?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    tracing::info!("Server stopped");
    Ok(())
}
