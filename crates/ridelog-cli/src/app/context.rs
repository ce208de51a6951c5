//! Application context for the ridelog CLI.

use std::path::{Path, PathBuf};

use ridelog_core::storage::{ensure_table, SqliteStore, RIDES_TABLE};
use ridelog_core::Settings;

use crate::config::{resolve_database_path, resolve_settings_path};
use crate::errors::CliError;
use crate::ui::UiContext;

/// Settings and paths shared by every command handler.
///
/// Settings are read once and never change afterwards.
pub struct AppContext {
    settings: Settings,
    database_path: PathBuf,
}

impl AppContext {
    /// Load settings and resolve the database location.
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = resolve_settings_path()?;
        let settings = Settings::load(&settings_path);
        let database_path = resolve_database_path(&settings)?;
        tracing::debug!(
            settings = %settings_path.display(),
            database = %database_path.display(),
            connection = %settings.connection_target(),
            "resolved configuration"
        );
        Ok(Self {
            settings,
            database_path,
        })
    }

    /// Get the loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get the ride database path.
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// Build a UI context for output.
    pub fn ui_context(&self, json_flag: bool) -> UiContext {
        UiContext::from_env(json_flag)
    }

    /// Open the ride database and make sure the rides table exists.
    pub fn open_store(&self) -> anyhow::Result<SqliteStore> {
        let unavailable = |err: ridelog_core::RideError| {
            CliError::storage_unavailable(
                format!(
                    "Cannot open ride database {}: {}",
                    self.database_path.display(),
                    err
                ),
                "Hint: Check the db entry in your settings file (RIDELOG_SETTINGS).",
            )
        };
        let mut store = SqliteStore::open(&self.database_path).map_err(unavailable)?;
        ensure_table(&mut store, RIDES_TABLE).map_err(unavailable)?;
        Ok(store)
    }
}
