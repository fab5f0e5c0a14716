// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Data access layer.
//!
//! This module handles all interactions with the local SQLite database. The
//! application only needs a small key-value side channel, used to autosave the
//! contact form draft between sessions.
//!
//! # Tables
//!
//! * `kv_store` - Text values addressed by a unique key. Writes replace the
//!   previous value ("last write wins").

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

/// Opens a connection to the SQLite database and configures it.
///
/// This function performs the following setup:
/// * **WAL Mode**: Enables Write-Ahead Logging so a second instance can read
///   while another writes.
/// * **Performance Tuning**: Sets synchronous mode to `NORMAL`.
/// * **Schema**: Executes [`create_schema`] to ensure the tables exist.
///
/// # Arguments
///
/// * `path` - The file system path to the SQLite database file.
///
/// # Errors
///
/// Returns an error if the database file cannot be opened, if the initial
/// PRAGMA configuration fails, or if the schema initialisation fails.
pub(crate) fn init_db(path: &str) -> Result<Connection> {
    let conn = Connection::open(path).with_context(|| format!("Failed to open database {path}"))?;
    configure(&conn)?;
    Ok(conn)
}

/// Opens a private in-memory database with the same schema.
#[cfg(test)]
pub(crate) fn init_memory_db() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<()> {
    let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
    if journal_mode != "wal" {
        anyhow::bail!(
            "Failed to switch to WAL mode. Current mode: {}",
            journal_mode
        );
    }

    conn.execute_batch("PRAGMA synchronous = NORMAL;")?;

    create_schema(conn)
}

/// Create the database schema.
///
/// # Errors
///
/// Returns an error if there are permission issues with the database file or
/// if the SQL is invalid.
fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );",
    )
    .context("Failed to create schema")?;

    Ok(())
}

pub(crate) fn get_value(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
    let value = stmt
        .query_row(params![key], |row| row.get(0))
        .optional()?;
    Ok(value)
}

pub(crate) fn put_value(conn: &Connection, key: &str, value: &str) -> Result<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
    )?;
    stmt.execute(params![key, value])?;
    Ok(())
}

pub(crate) fn delete_value(conn: &Connection, key: &str) -> Result<()> {
    let mut stmt = conn.prepare_cached("DELETE FROM kv_store WHERE key = ?1")?;
    stmt.execute(params![key])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let conn = init_memory_db().unwrap();
        assert_eq!(get_value(&conn, "k").unwrap(), None);

        put_value(&conn, "k", "first").unwrap();
        put_value(&conn, "k", "second").unwrap();
        assert_eq!(get_value(&conn, "k").unwrap().as_deref(), Some("second"));

        delete_value(&conn, "k").unwrap();
        assert_eq!(get_value(&conn, "k").unwrap(), None);
    }

    #[test]
    fn file_database_uses_wal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drafts.db");
        let conn = init_db(path.to_str().unwrap()).unwrap();
        put_value(&conn, "k", "v").unwrap();
        drop(conn);

        let conn = init_db(path.to_str().unwrap()).unwrap();
        assert_eq!(get_value(&conn, "k").unwrap().as_deref(), Some("v"));
    }
}
