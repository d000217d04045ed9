//! Key-value queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    store::KeyValueStore,
};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const CHECK_KEY_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM kv WHERE key = ?1)";

impl KeyValueStore for super::Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read key")
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value, now])
            .db_context("Failed to write key")?;
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        self.connection
            .query_row(CHECK_KEY_EXISTS_SQL, params![key], |row| row.get(0))
            .db_context("Failed to check key")
    }
}
