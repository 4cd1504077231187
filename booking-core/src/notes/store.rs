//! Note storage trait and SQLite implementation

use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use super::error::NoteError;
use super::migrations::Migrator;
use super::types::{NewNote, Note};

/// Note storage trait
pub trait NoteStore: Send + Sync {
    /// Persist a note and return it with its assigned id
    fn create(&self, note: &NewNote) -> Result<Note, NoteError>;

    fn get(&self, id: i64) -> Result<Option<Note>, NoteError>;

    fn count(&self) -> Result<u64, NoteError>;
}

/// SQLite-backed note store
pub struct SqliteNoteStore {
    conn: Mutex<Connection>,
}

impl SqliteNoteStore {
    /// Open or create database at path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, NoteError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Open in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self, NoteError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, NoteError> {
        Migrator::new(&conn).migrate()?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, NoteError> {
        self.conn.lock().map_err(|_| NoteError::LockPoisoned)
    }

    fn row_to_note(row: &rusqlite::Row) -> Result<Note, rusqlite::Error> {
        Ok(Note {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}

impl NoteStore for SqliteNoteStore {
    fn create(&self, note: &NewNote) -> Result<Note, NoteError> {
        let conn = self.conn()?;
        let created_at = chrono::Utc::now().timestamp();
        conn.execute(
            "INSERT INTO notes (title, content, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![note.title, note.content, created_at],
        )?;

        Ok(Note {
            id: conn.last_insert_rowid(),
            title: note.title.clone(),
            content: note.content.clone(),
            created_at,
        })
    }

    fn get(&self, id: i64) -> Result<Option<Note>, NoteError> {
        let conn = self.conn()?;
        let note = conn
            .query_row(
                "SELECT id, title, content, created_at FROM notes WHERE id = ?1",
                [id],
                Self::row_to_note,
            )
            .optional()?;
        Ok(note)
    }

    fn count(&self) -> Result<u64, NoteError> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
