//! Database handle - one SQLite connection per operation

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rusqlite::Connection;
use tracing::info;

use super::collection::{Collection, Record};
use super::inventory::InventoryItem;
use super::suppliers::Supplier;

/// Handle to the SQLite file backing every collection.
///
/// Holds only the path. Each operation opens its own connection on the
/// blocking pool and drops it when done, so concurrent requests share nothing
/// beyond SQLite's file-level locking.
#[derive(Clone, Debug)]
pub struct Database {
    path: Arc<PathBuf>,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Typed view over one collection
    pub fn collection<R: Record>(&self) -> Collection<R> {
        Collection::new(self.clone())
    }

    /// Create every table that is missing. Safe to call repeatedly.
    pub async fn init(&self) -> Result<(), StoreError> {
        self.collection::<InventoryItem>().init().await?;
        self.collection::<Supplier>().init().await?;

        info!(path = %self.path.display(), "Database schema ready");
        Ok(())
    }

    /// Run `op` against a fresh connection on the blocking thread pool
    pub async fn run<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || {
            let conn = Connection::open(path.as_path())?;
            op(&conn)
        })
        .await?
    }
}

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Update carries no fields")]
    EmptyPatch,
}
