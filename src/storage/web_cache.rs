use rusqlite::{params, Connection, OptionalExtension};

use super::Result;
use crate::types::CacheEntry;

/// Stores upstream catalog responses keyed by URI, with their validators.
/// Lives in its own table outside the reference-data schema.
#[derive(Clone, Copy)]
pub struct WebCacheRepository<'c> {
    conn: &'c Connection,
}

impl<'c> WebCacheRepository<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn create_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS cache_entry (
                Uri TEXT PRIMARY KEY,
                ETag TEXT,
                Response TEXT,
                Expiry TEXT
            ) STRICT;
            "#,
        )?;
        Ok(())
    }

    pub fn drop_schema(&self) -> Result<()> {
        self.conn.execute_batch("DROP TABLE IF EXISTS cache_entry;")?;
        Ok(())
    }

    /// Insert or replace the entry for `entry.uri`.
    pub fn put(&self, entry: &CacheEntry) -> Result<usize> {
        Ok(self.conn.execute(
            "INSERT INTO cache_entry (Uri, ETag, Response, Expiry) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(Uri) DO UPDATE SET ETag=excluded.ETag, Response=excluded.Response, Expiry=excluded.Expiry",
            params![entry.uri, entry.etag, entry.response, entry.expiry],
        )?)
    }

    pub fn get(&self, uri: &str) -> Result<Option<CacheEntry>> {
        let entry = self
            .conn
            .query_row(
                "SELECT Uri, ETag, Response, Expiry FROM cache_entry WHERE Uri = ?1",
                params![uri],
                |row| {
                    Ok(CacheEntry {
                        uri: row.get(0)?,
                        etag: row.get(1)?,
                        response: row.get(2)?,
                        expiry: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(entry)
    }

    pub fn delete(&self, uri: &str) -> Result<usize> {
        Ok(self
            .conn
            .execute("DELETE FROM cache_entry WHERE Uri = ?1", params![uri])?)
    }
}
