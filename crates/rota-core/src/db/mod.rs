//! SQLite-backed key-value store.
//!
//! Rotation state is a handful of string values, so the schema is a single
//! `kv` table. [`Database`] implements [`crate::store::KeyValueStore`].

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result, RotaError};

pub mod kv_queries;
pub mod migrations;

/// Database connection handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| RotaError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database. Nothing is persisted.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification: `$XDG_DATA_HOME/rota/rota.db`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("rota")
            .place_data_file("rota.db")
            .map_err(|e| RotaError::XdgDirectory(e.to_string()))
    }
}
