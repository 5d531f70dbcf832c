pub mod notes;
pub mod sqlite;
pub mod tables;

pub use notes::NoteStore;
pub use sqlite::Database;
