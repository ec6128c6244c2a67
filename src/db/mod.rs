//! Database Module
//!
//! PostgreSQL through SQLx: pooled connections, embedded migrations, and the
//! generic per-entity repositories. The pool serializes concurrent writers to
//! the same row; the application adds no locking of its own.

pub mod models;
pub mod repository;

pub use models::{Investment, Microgrid, Report, Space, User};
pub use repository::{PgRepository, Repository};

use anyhow::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Database connection handle.
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to the database.
    ///
    /// # Connection Pool Settings
    ///
    /// - max_connections: 10
    /// - min_connections: 1
    /// - acquire_timeout: 3s
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .min_connections(1)
            .acquire_timeout(std::time::Duration::from_secs(3))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Pool that defers connecting until first use. Handler unit tests run
    /// entirely against mock repositories and never touch it.
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    /// Run embedded migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Liveness ping used by the health endpoint.
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// One generic repository per entity table.
    pub fn repository<T: repository::Entity>(&self) -> PgRepository<T> {
        PgRepository::new(self.pool.clone())
    }
}
