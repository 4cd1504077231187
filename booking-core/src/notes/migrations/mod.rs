//! Database migrations for the notes table

use crate::notes::NoteError;
use rusqlite::Connection;

/// SQL for each migration version
const MIGRATIONS: &[(&str, &str)] = &[
    ("v001_notes", include_str!("v001_notes.sql")),
    ("v002_created_at_index", include_str!("v002_created_at_index.sql")),
];

/// Runs database migrations
pub struct Migrator<'a> {
    conn: &'a Connection,
}

impl<'a> Migrator<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Schema version recorded in `PRAGMA user_version`
    pub fn current_version(&self) -> Result<i32, NoteError> {
        let version: i32 = self
            .conn
            .pragma_query_value(None, "user_version", |row| row.get(0))?;
        Ok(version)
    }

    fn set_version(&self, version: i32) -> Result<(), NoteError> {
        self.conn.pragma_update(None, "user_version", version)?;
        Ok(())
    }

    /// Run all pending migrations
    pub fn migrate(&self) -> Result<(), NoteError> {
        let current = self.current_version()?;
        if current >= self.target_version() {
            return Ok(());
        }

        for (idx, (name, sql)) in MIGRATIONS.iter().enumerate() {
            let version = (idx + 1) as i32;
            if version > current {
                tracing::info!("Running notes migration {}: {}", version, name);
                self.conn
                    .execute_batch(sql)
                    .map_err(|e| NoteError::Migration(format!("{}: {}", name, e)))?;
                self.set_version(version)?;
            }
        }

        Ok(())
    }

    /// Version after every bundled migration has run
    pub fn target_version(&self) -> i32 {
        MIGRATIONS.len() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrate_fresh_database() {
        let conn = Connection::open_in_memory().unwrap();
        let migrator = Migrator::new(&conn);

        assert_eq!(migrator.current_version().unwrap(), 0);
        migrator.migrate().unwrap();
        assert_eq!(
            migrator.current_version().unwrap(),
            migrator.target_version()
        );
    }

    #[test]
    fn test_newer_schema_left_untouched() {
        let conn = Connection::open_in_memory().unwrap();
        let migrator = Migrator::new(&conn);
        let newer = migrator.target_version() + 3;
        conn.pragma_update(None, "user_version", newer).unwrap();

        migrator.migrate().unwrap();

        assert_eq!(migrator.current_version().unwrap(), newer);
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE name = 'notes'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 0);
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        let migrator = Migrator::new(&conn);

        migrator.migrate().unwrap();
        migrator.migrate().unwrap();

        assert_eq!(migrator.current_version().unwrap(), 2);
    }

    #[test]
    fn test_notes_table_and_index_created() {
        let conn = Connection::open_in_memory().unwrap();
        Migrator::new(&conn).migrate().unwrap();

        let tables: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='notes'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);

        let indexes: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name='idx_notes_created_at'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(indexes, 1);
    }

    #[test]
    fn test_partial_database_only_runs_pending() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(include_str!("v001_notes.sql")).unwrap();
        conn.pragma_update(None, "user_version", 1).unwrap();

        Migrator::new(&conn).migrate().unwrap();

        assert_eq!(Migrator::new(&conn).current_version().unwrap(), 2);
    }
}
