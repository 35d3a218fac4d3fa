//! Builder for creating and configuring production WorkoutContext instances.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use tokio::task;

use super::WorkoutContext;
use crate::{
    api::{http::DEFAULT_TIMEOUT, HttpWorkoutApi},
    error::{Result, SessionError},
    store::SqliteKeyValueStore,
};

/// Backend used when no URL is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Builder for a [`WorkoutContext`] talking HTTP to the backend and
/// persisting to SQLite.
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    database_path: Option<PathBuf>,
    api_url: String,
    api_token: Option<String>,
    timeout: Duration,
}

impl ContextBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/ironlog/ironlog.db` or `~/.local/share/ironlog/ironlog.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the backend base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Sets the bearer token sent to the backend.
    pub fn with_api_token(mut self, token: Option<String>) -> Self {
        self.api_token = token;
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the context, resuming any stored in-progress session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::FileSystem` if the database directory cannot
    /// be created, `SessionError::Database` if the database cannot be opened,
    /// and `SessionError::Configuration` if the HTTP client cannot be built.
    pub async fn build(self) -> Result<WorkoutContext<HttpWorkoutApi, SqliteKeyValueStore>> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SessionError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let backend = task::spawn_blocking(move || SqliteKeyValueStore::open(&db_path))
            .await
            .map_err(|e| SessionError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        let api = HttpWorkoutApi::new(self.api_url, self.timeout)?.with_token(self.api_token);

        Ok(WorkoutContext::new(api, backend))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("ironlog")
            .place_data_file("ironlog.db")
            .map_err(|e| SessionError::XdgDirectory(e.to_string()))
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
