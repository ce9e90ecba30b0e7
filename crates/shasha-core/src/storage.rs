use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::ShashaError;
use crate::models::CatalogItem;

const SCHEMA_V1: &str = include_str!("../../../migrations/001_initial.sql");

const KEY_FAVORITES: &str = "favorites";
const KEY_ACCESS_EXPIRY: &str = "access_expiry";

/// SQLite-backed key-value storage for everything that survives a restart:
/// the favorites snapshot and the access-grant expiry. All writes are
/// synchronous and immediate; there is no cross-key transaction.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open (or create) the database at the given path and run migrations.
    pub fn open(path: &Path) -> Result<Self, ShashaError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, ShashaError> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    // ── Raw key-value access ────────────────────────────────────

    pub fn get_value(&self, key: &str) -> Result<Option<String>, ShashaError> {
        self.conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    pub fn set_value(&self, key: &str, value: &str) -> Result<(), ShashaError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO app_state (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    // ── Favorites snapshot ──────────────────────────────────────

    /// Load the persisted favorites set. Absent or unreadable snapshots
    /// hydrate as an empty set.
    pub fn load_favorites(&self) -> Result<Vec<CatalogItem>, ShashaError> {
        match self.get_value(KEY_FAVORITES)? {
            Some(json) => Ok(serde_json::from_str(&json).unwrap_or_default()),
            None => Ok(Vec::new()),
        }
    }

    /// Persist the whole favorites set as one JSON snapshot.
    pub fn save_favorites(&self, items: &[CatalogItem]) -> Result<(), ShashaError> {
        let json = serde_json::to_string(items)?;
        self.set_value(KEY_FAVORITES, &json)
    }

    // ── Access grant ────────────────────────────────────────────

    /// Persisted grant expiry in milliseconds since the epoch, if any.
    /// A value that does not parse as an integer counts as no grant.
    pub fn access_expiry(&self) -> Result<Option<i64>, ShashaError> {
        Ok(self
            .get_value(KEY_ACCESS_EXPIRY)?
            .and_then(|v| v.parse().ok()))
    }

    pub fn set_access_expiry(&self, expiry_ms: i64) -> Result<(), ShashaError> {
        self.set_value(KEY_ACCESS_EXPIRY, &expiry_ms.to_string())
    }
}

// ── Migrations ──────────────────────────────────────────────────

/// Run schema migrations using `PRAGMA user_version` for version tracking.
fn run_migrations(conn: &Connection) -> Result<(), ShashaError> {
    let version: i32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .unwrap_or(0);

    if version < 1 {
        conn.execute_batch(SCHEMA_V1)?;
        conn.pragma_update(None, "user_version", 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MediaKind, Source};

    fn sample_item(id: u64) -> CatalogItem {
        CatalogItem {
            id,
            title: format!("Title {id}"),
            overview: String::new(),
            poster: Some("/p.jpg".into()),
            backdrop: None,
            rating: Some(7.5),
            kind: MediaKind::Movie,
            source: Source::Tmdb,
            release_date: None,
            stream_url: None,
        }
    }

    #[test]
    fn test_set_and_get_value() {
        let db = Storage::open_memory().unwrap();
        assert!(db.get_value("missing").unwrap().is_none());

        db.set_value("k", "v1").unwrap();
        assert_eq!(db.get_value("k").unwrap().as_deref(), Some("v1"));

        // Overwrite.
        db.set_value("k", "v2").unwrap();
        assert_eq!(db.get_value("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_favorites_snapshot_roundtrip() {
        let db = Storage::open_memory().unwrap();
        assert!(db.load_favorites().unwrap().is_empty());

        db.save_favorites(&[sample_item(1), sample_item(2)]).unwrap();
        let loaded = db.load_favorites().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, 1);
        assert_eq!(loaded[1].title, "Title 2");
    }

    #[test]
    fn test_corrupt_favorites_hydrate_empty() {
        let db = Storage::open_memory().unwrap();
        db.set_value("favorites", "not json").unwrap();
        assert!(db.load_favorites().unwrap().is_empty());
    }

    #[test]
    fn test_access_expiry_roundtrip() {
        let db = Storage::open_memory().unwrap();
        assert!(db.access_expiry().unwrap().is_none());

        db.set_access_expiry(1_750_000_000_000).unwrap();
        assert_eq!(db.access_expiry().unwrap(), Some(1_750_000_000_000));
    }

    #[test]
    fn test_garbage_expiry_counts_as_absent() {
        let db = Storage::open_memory().unwrap();
        db.set_value("access_expiry", "soon").unwrap();
        assert!(db.access_expiry().unwrap().is_none());
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shasha.db");

        {
            let db = Storage::open(&path).unwrap();
            db.save_favorites(&[sample_item(42)]).unwrap();
            db.set_access_expiry(123).unwrap();
        }

        let db = Storage::open(&path).unwrap();
        assert_eq!(db.load_favorites().unwrap().len(), 1);
        assert_eq!(db.access_expiry().unwrap(), Some(123));
    }
}
