//! Application state - database pool, configuration, and services

use std::sync::Arc;

use anyhow::Context as _;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::db::{
    CertificateRepository, OrderRepository, SearchEngine, TagRepository, UserRepository,
};
use crate::services::{CertificateService, OrderService, TagService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_pool: PgPool,
    pub certificate_service: Arc<CertificateService>,
    pub tag_service: Arc<TagService>,
    pub order_service: Arc<OrderService>,
    pub user_service: Arc<UserService>,
}

#[derive(Debug, Clone, Copy)]
pub struct AppStateOptions {
    pub run_migrations: bool,
}

impl Default for AppStateOptions {
    fn default() -> Self {
        Self {
            run_migrations: true,
        }
    }
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        Self::new_with_options(config, AppStateOptions::default()).await
    }

    pub async fn new_with_options(
        config: Config,
        options: AppStateOptions,
    ) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .min_connections(config.database.pool_min_size)
            .max_connections(config.database.pool_max_size)
            .acquire_timeout(std::time::Duration::from_secs(
                config.database.pool_timeout_seconds,
            ))
            .connect(&config.database.url)
            .await
            .context("Failed to connect to PostgreSQL")?;

        if options.run_migrations {
            sqlx::migrate!("./migrations")
                .run(&db_pool)
                .await
                .context("Failed to run database migrations")?;
        }

        let search_config = config.search.clone();

        let certificate_service = Arc::new(CertificateService::new(
            CertificateRepository::new(db_pool.clone()),
            Arc::new(SearchEngine::new(db_pool.clone())),
            search_config.clone(),
        ));
        let tag_service = Arc::new(TagService::new(
            TagRepository::new(db_pool.clone()),
            search_config.clone(),
        ));
        let order_service = Arc::new(OrderService::new(
            OrderRepository::new(db_pool.clone()),
            UserRepository::new(db_pool.clone()),
            search_config.clone(),
        ));
        let user_service = Arc::new(UserService::new(
            UserRepository::new(db_pool.clone()),
            search_config,
        ));

        Ok(Self {
            config: Arc::new(config),
            db_pool,
            certificate_service,
            tag_service,
            order_service,
            user_service,
        })
    }
}
