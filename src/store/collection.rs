//! Generic CRUD over a single table

use std::marker::PhantomData;

use rusqlite::{params, params_from_iter, Row, ToSql};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use super::db::{Database, StoreError};

/// A row type stored in its own table.
///
/// `New` carries every required column for an insert; `Patch` carries each
/// mutable column as an `Option`, and is also what request bodies decode into.
pub trait Record: Serialize + Send + Sized + 'static {
    /// Table name
    const TABLE: &'static str;
    /// `CREATE TABLE IF NOT EXISTS` statement for the table
    const SCHEMA: &'static str;

    type New: Send + 'static;
    type Patch: DeserializeOwned + Default + Send + 'static;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Promote a patch to an insert when every required field is present
    fn complete(patch: Self::Patch) -> Option<Self::New>;

    fn insert_assignments(new: &Self::New) -> Assignments;

    /// Assignments for only the fields present in the patch
    fn patch_assignments(patch: &Self::Patch) -> Assignments;
}

/// Column/value pairs that render to a parameterized statement.
///
/// Column names are `'static` so only compile-time identifiers ever reach the
/// SQL text; values always travel as bound parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignments {
    columns: Vec<&'static str>,
    values: Vec<String>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.columns.push(column);
        self.values.push(value.into());
        self
    }

    /// Add the column only when a value is supplied
    pub fn set_opt(self, column: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.set(column, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// `INSERT INTO t (a, b) VALUES (?1, ?2)`
    pub fn insert_sql(&self, table: &str) -> String {
        let placeholders: Vec<String> = (1..=self.columns.len()).map(|i| format!("?{}", i)).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            self.columns.join(", "),
            placeholders.join(", ")
        )
    }

    /// `UPDATE t SET a = ?1, b = ?2 WHERE id = ?3`
    pub fn update_sql(&self, table: &str) -> String {
        let sets: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ?{}", column, i + 1))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            table,
            sets.join(", "),
            self.columns.len() + 1
        )
    }
}

/// Typed access to one table
pub struct Collection<R> {
    db: Database,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for Collection<R> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> Collection<R> {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            _record: PhantomData,
        }
    }

    /// Ensure the backing table exists
    pub async fn init(&self) -> Result<(), StoreError> {
        self.db
            .run(|conn| {
                conn.execute_batch(R::SCHEMA)?;
                Ok(())
            })
            .await
    }

    /// All rows in SQLite's native order
    pub async fn list(&self) -> Result<Vec<R>, StoreError> {
        let records = self
            .db
            .run(|conn| {
                let mut stmt = conn.prepare(&format!("SELECT * FROM {}", R::TABLE))?;
                let rows = stmt
                    .query_map([], |row| R::from_row(row))?
                    .collect::<Result<Vec<R>, _>>()?;
                Ok(rows)
            })
            .await?;

        debug!(table = R::TABLE, count = records.len(), "Listed records");
        Ok(records)
    }

    /// Insert a row and return its assigned id
    pub async fn create(&self, new: R::New) -> Result<i64, StoreError> {
        let assignments = R::insert_assignments(&new);
        let id = self
            .db
            .run(move |conn| {
                conn.execute(
                    &assignments.insert_sql(R::TABLE),
                    params_from_iter(assignments.values()),
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await?;

        info!(table = R::TABLE, id, "Record created");
        Ok(id)
    }

    /// Apply the supplied fields to row `id`. Returns `false` when no such row exists.
    pub async fn update(&self, id: i64, patch: R::Patch) -> Result<bool, StoreError> {
        let assignments = R::patch_assignments(&patch);
        if assignments.is_empty() {
            return Err(StoreError::EmptyPatch);
        }

        let changed = self
            .db
            .run(move |conn| {
                let mut bound: Vec<&dyn ToSql> = assignments
                    .values()
                    .iter()
                    .map(|value| value as &dyn ToSql)
                    .collect();
                bound.push(&id);
                Ok(conn.execute(&assignments.update_sql(R::TABLE), bound.as_slice())?)
            })
            .await?;

        debug!(table = R::TABLE, id, found = changed > 0, "Record update");
        Ok(changed > 0)
    }

    /// Remove row `id` if present
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let removed = self
            .db
            .run(move |conn| {
                Ok(conn.execute(
                    &format!("DELETE FROM {} WHERE id = ?1", R::TABLE),
                    params![id],
                )?)
            })
            .await?;

        info!(table = R::TABLE, id, removed, "Record delete");
        Ok(())
    }
}
