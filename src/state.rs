use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::{
    accounts::{
        repo::{PgUserStore, UserStore},
        services::AccountService,
    },
    config::AppConfig,
};

#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
}

impl AppState {
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
            tracing::warn!(error = %e, "migration failed; continuing");
        }

        Ok(Self::from_store(Arc::new(PgUserStore::new(db))))
    }

    pub fn from_store(store: Arc<dyn UserStore>) -> Self {
        Self {
            accounts: AccountService::new(store),
        }
    }
}
