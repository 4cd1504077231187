//! Note persistence with SQLite storage

mod error;
mod migrations;
mod store;
mod types;

pub use error::NoteError;
pub use store::{NoteStore, SqliteNoteStore};
pub use types::{NewNote, Note};
