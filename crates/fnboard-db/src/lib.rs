// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use fnboard_app::{FilterStore, SettingKey};
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub const APP_NAME: &str = "fnboard";

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS settings (
  key TEXT PRIMARY KEY,
  value TEXT NOT NULL,
  updated_at TEXT NOT NULL
);
";

const SETTINGS_COLUMNS: [&str; 3] = ["key", "value", "updated_at"];
const DB_FILE_NAME: &str = "fnboard.db";

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        validate_db_path(&path.to_string_lossy())?;
        let conn = Connection::open(path)
            .with_context(|| format!("open database at {}", path.display()))?;
        configure_connection(&conn)?;
        tracing::debug!(path = %path.display(), "opened settings database");
        Ok(Self { conn })
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory database")?;
        configure_connection(&conn)?;
        Ok(Self { conn })
    }

    pub fn raw_connection(&self) -> &Connection {
        &self.conn
    }

    /// Creates the settings table in a fresh database, or checks the one
    /// already there.
    pub fn bootstrap(&self) -> Result<()> {
        let columns = settings_columns(&self.conn)?;
        if columns.is_empty() {
            if other_table_count(&self.conn)? > 0 {
                bail!(
                    "database is missing required table `settings`; point [storage].db_path at an fnboard database"
                );
            }
            return self
                .conn
                .execute_batch(SCHEMA)
                .context("create settings table");
        }

        let missing = SETTINGS_COLUMNS
            .iter()
            .copied()
            .filter(|column| !columns.contains(*column))
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            bail!(
                "table `settings` is missing required columns: {}; remove the database to recreate it",
                missing.join(", ")
            );
        }
        Ok(())
    }

    fn get_setting_raw(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .with_context(|| format!("read setting {key}"))
    }

    fn put_setting_raw(&self, key: &str, value: &str) -> Result<()> {
        let now = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .context("format settings timestamp")?;
        self.conn
            .execute(
                "
                INSERT INTO settings (key, value, updated_at)
                VALUES (?, ?, ?)
                ON CONFLICT(key) DO UPDATE SET
                  value = excluded.value,
                  updated_at = excluded.updated_at
                ",
                params![key, value, now],
            )
            .with_context(|| format!("upsert setting {key}"))?;
        Ok(())
    }

    pub fn get_setting(&self, key: SettingKey) -> Result<Option<String>> {
        self.get_setting_raw(key.as_str())
    }

    pub fn put_setting(&self, key: SettingKey, value: &str) -> Result<()> {
        self.put_setting_raw(key.as_str(), value)
    }

    pub fn setting_keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM settings ORDER BY key ASC")
            .context("prepare setting keys query")?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .context("query setting keys")?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .context("collect setting keys")
    }
}

impl FilterStore for Store {
    fn load_filter(&self) -> Result<Option<String>> {
        self.get_setting(SettingKey::OwnerFilter)
    }

    fn save_filter(&self, owner: &str) -> Result<()> {
        self.put_setting(SettingKey::OwnerFilter, owner)
            .context("persist owner filter")
    }
}

pub fn default_db_path() -> Result<PathBuf> {
    if let Some(path) = env::var_os("FNBOARD_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    let dir = dirs::data_local_dir()
        .map(|root| root.join(APP_NAME))
        .ok_or_else(|| {
            anyhow!("no platform data directory; set FNBOARD_DB_PATH or [storage].db_path")
        })?;
    fs::create_dir_all(&dir).with_context(|| format!("create data directory {}", dir.display()))?;
    Ok(dir.join(DB_FILE_NAME))
}

/// Accepts `:memory:` and plain filesystem paths. SQLite URI syntax is refused
/// so a pasted URL never becomes a file name.
pub fn validate_db_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        bail!("database path must not be empty");
    }
    if path.starts_with("file:") || path.contains("://") || path.contains('?') {
        bail!("database path {path:?} is URI-like; use a plain filesystem path");
    }
    Ok(())
}

fn settings_columns(conn: &Connection) -> Result<BTreeSet<String>> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info('settings')")
        .context("inspect settings table")?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .context("list settings columns")?
        .collect::<rusqlite::Result<BTreeSet<_>>>()
        .context("read settings columns")?;
    Ok(columns)
}

fn other_table_count(conn: &Connection) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM sqlite_schema WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )
    .context("count existing tables")
}

fn configure_connection(conn: &Connection) -> Result<()> {
    conn.busy_timeout(Duration::from_secs(5))
        .context("set sqlite busy timeout")?;
    conn.execute_batch("PRAGMA journal_mode = WAL;")
        .context("enable WAL journal")
}
