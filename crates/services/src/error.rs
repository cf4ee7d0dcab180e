//! Shared error types for the services crate.

use thiserror::Error;

use roadmap_core::model::{ChatSettingsError, CredentialsError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `SessionManager`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("CREDENTIALS REQUIRED")]
    InvalidCredentials(#[from] CredentialsError),
    #[error("access locked until the next calendar day")]
    LockedOut,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors raised while talking to the generative-text service.
///
/// `ChatRelay` folds these into reply text; they never reach the view.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatError {
    #[error("chat service returned an empty response")]
    EmptyResponse,
    #[error("chat request failed with status {status}: {message}")]
    HttpStatus {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Content(#[from] roadmap_core::Error),
    #[error(transparent)]
    ChatSettings(#[from] ChatSettingsError),
}
