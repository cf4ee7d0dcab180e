use std::sync::Arc;

use thiserror::Error;

use crate::repository::{SessionStore, Storage};

mod migrate;
mod session_repo;

pub use session_repo::SqliteSessionStore;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SqliteInitError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl Storage {
    /// Build a `Storage` whose session state lives in `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the database cannot be opened or migrated.
    pub async fn sqlite(database_url: &str) -> Result<Self, SqliteInitError> {
        let store = SqliteSessionStore::open(database_url).await?;
        let session: Arc<dyn SessionStore> = Arc::new(store);
        Ok(Self { session })
    }
}
