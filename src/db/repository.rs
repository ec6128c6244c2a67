//! Generic Repository
//!
//! One parametrized CRUD gateway reused by every resource handler. Handlers
//! depend on the [`Repository`] trait, never on the pool, so the Postgres
//! adapter can be swapped for the in-memory mock in unit tests.
//!
//! Each statement auto-commits; callers observe no batched or deferred
//! writes.

use std::marker::PhantomData;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};

/// Row type persisted by the generic repository.
///
/// The model supplies its table metadata and its own insert/full-replace
/// statements with the binds already applied; the adapter only executes them.
pub trait Entity:
    for<'r> FromRow<'r, PgRow> + Clone + Send + Sync + Unpin + 'static
{
    const TABLE: &'static str;
    const ID_COLUMN: &'static str;

    fn id(&self) -> i32;

    /// Copy of the entity with the store-assigned identifier set.
    fn with_id(&self, id: i32) -> Self;

    /// `INSERT ... RETURNING *`, id column omitted (store-assigned).
    fn insert(&self) -> QueryAs<'_, Postgres, Self, PgArguments>;

    /// `UPDATE ... WHERE id = $n RETURNING *`, every column written.
    fn replace(&self) -> QueryAs<'_, Postgres, Self, PgArguments>;
}

/// CRUD contract, parametrized over the entity type.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// `None` when no row matches; absence is not an error at this layer.
    async fn get_by_id(&self, id: i32) -> Result<Option<T>>;

    /// Every row, order unspecified. Empty is a valid outcome.
    async fn get_all(&self) -> Result<Vec<T>>;

    /// Persists a new row and returns it with the assigned identifier.
    async fn add(&self, entity: T) -> Result<T>;

    /// Full replace of the row keyed by the entity's own id.
    async fn update(&self, entity: T) -> Result<T>;

    async fn delete(&self, entity: &T) -> Result<()>;
}

/// Postgres adapter. A single generic implementation covers all five tables.
pub struct PgRepository<T> {
    pool: PgPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> PgRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for PgRepository<T> {
    async fn get_by_id(&self, id: i32) -> Result<Option<T>> {
        let sql = format!(
            "SELECT * FROM {} WHERE {} = $1",
            T::TABLE,
            T::ID_COLUMN
        );
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get_all(&self) -> Result<Vec<T>> {
        let sql = format!("SELECT * FROM {} ORDER BY {}", T::TABLE, T::ID_COLUMN);
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn add(&self, entity: T) -> Result<T> {
        let stored = entity.insert().fetch_one(&self.pool).await?;
        Ok(stored)
    }

    async fn update(&self, entity: T) -> Result<T> {
        let stored = entity.replace().fetch_one(&self.pool).await?;
        Ok(stored)
    }

    async fn delete(&self, entity: &T) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE {} = $1", T::TABLE, T::ID_COLUMN);
        sqlx::query(&sql).bind(entity.id()).execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
pub mod mock {
    //! In-memory repository used by handler unit tests. Assigns ids the way
    //! the store would: monotonically increasing, starting at 1.

    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::RwLock;

    pub struct MockRepository<T> {
        rows: RwLock<BTreeMap<i32, T>>,
        next_id: AtomicI32,
    }

    impl<T: Entity> MockRepository<T> {
        pub fn new() -> Self {
            Self {
                rows: RwLock::new(BTreeMap::new()),
                next_id: AtomicI32::new(1),
            }
        }
    }

    #[async_trait]
    impl<T: Entity> Repository<T> for MockRepository<T> {
        async fn get_by_id(&self, id: i32) -> Result<Option<T>> {
            let rows = self.rows.read().unwrap();
            Ok(rows.get(&id).cloned())
        }

        async fn get_all(&self) -> Result<Vec<T>> {
            let rows = self.rows.read().unwrap();
            Ok(rows.values().cloned().collect())
        }

        async fn add(&self, entity: T) -> Result<T> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let stored = entity.with_id(id);
            self.rows.write().unwrap().insert(id, stored.clone());
            Ok(stored)
        }

        async fn update(&self, entity: T) -> Result<T> {
            self.rows
                .write()
                .unwrap()
                .insert(entity.id(), entity.clone());
            Ok(entity)
        }

        async fn delete(&self, entity: &T) -> Result<()> {
            self.rows.write().unwrap().remove(&entity.id());
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::db::models::Report;

        fn report(microgrid_id: i32) -> Report {
            Report {
                report_id: 0,
                microgrid_id,
                energy_generated: 120.5,
                panel_temperature: 31.0,
                profit: 42.0,
            }
        }

        #[tokio::test]
        async fn test_add_assigns_monotonic_ids() {
            let repo = MockRepository::<Report>::new();
            let first = repo.add(report(1)).await.unwrap();
            let second = repo.add(report(1)).await.unwrap();
            assert_eq!(first.report_id, 1);
            assert_eq!(second.report_id, 2);
        }

        #[tokio::test]
        async fn test_get_after_add_round_trips() {
            let repo = MockRepository::<Report>::new();
            let stored = repo.add(report(7)).await.unwrap();
            let fetched = repo.get_by_id(stored.report_id).await.unwrap().unwrap();
            assert_eq!(fetched.microgrid_id, 7);
            assert_eq!(fetched.energy_generated, 120.5);
        }

        #[tokio::test]
        async fn test_delete_removes_row() {
            let repo = MockRepository::<Report>::new();
            let stored = repo.add(report(1)).await.unwrap();
            repo.delete(&stored).await.unwrap();
            assert!(repo.get_by_id(stored.report_id).await.unwrap().is_none());
        }
    }
}
