//! Note rows (member_notes)
//!
//! No primary key: a sender may leave any number of notes for the same
//! member. Insertion order is rowid order.

use rusqlite::{Connection, Result as SqliteResult, Transaction, params};

/// Create the member_notes table if it is absent. Safe to race.
pub fn init_tables(conn: &Connection) -> SqliteResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS member_notes (
            sender_id TEXT NOT NULL,
            member_name TEXT NOT NULL,
            message TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_member_notes_key
         ON member_notes(sender_id, member_name)",
        [],
    )?;

    Ok(())
}

pub fn insert_note(
    tx: &Transaction,
    sender_id: &str,
    member_name: &str,
    message: &str,
) -> SqliteResult<()> {
    tx.execute(
        "INSERT INTO member_notes (sender_id, member_name, message) VALUES (?1, ?2, ?3)",
        params![sender_id, member_name, message],
    )?;
    Ok(())
}

pub fn list_notes(tx: &Transaction, sender_id: &str, member_name: &str) -> SqliteResult<Vec<String>> {
    let mut stmt = tx.prepare(
        "SELECT message FROM member_notes
         WHERE sender_id = ?1 AND member_name = ?2
         ORDER BY rowid",
    )?;

    let notes = stmt
        .query_map(params![sender_id, member_name], |row| row.get(0))?
        .collect::<SqliteResult<Vec<String>>>()?;

    Ok(notes)
}

/// Returns the number of rows removed.
pub fn delete_notes(tx: &Transaction, sender_id: &str, member_name: &str) -> SqliteResult<usize> {
    tx.execute(
        "DELETE FROM member_notes WHERE sender_id = ?1 AND member_name = ?2",
        params![sender_id, member_name],
    )
}
