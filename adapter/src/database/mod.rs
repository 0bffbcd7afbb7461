use shared::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};
use sqlx::{PgPool, Postgres, Transaction};

pub mod model;

/// Cloneable handle over the process-wide pool; acquired once at startup
/// and injected into every repository.
#[derive(Clone)]
pub struct ConnectionPool(PgPool);

impl ConnectionPool {
    pub fn new(pool: PgPool) -> Self {
        Self(pool)
    }

    pub fn inner_ref(&self) -> &PgPool {
        &self.0
    }

    pub async fn begin(&self) -> AppResult<Transaction<'_, Postgres>> {
        self.0.begin().await.map_err(AppError::TransactionError)
    }
}

pub fn connect_database_with(cfg: &DatabaseConfig) -> AppResult<ConnectionPool> {
    let pool = PgPool::connect_lazy(&cfg.connection_string)
        .map_err(AppError::SpecificOperationError)?;
    Ok(ConnectionPool::new(pool))
}
