//! Note store: notes left by a sender for one member of their system.
//!
//! Every operation runs on the blocking pool as a single transaction on its
//! own pooled connection. Driver errors are logged here and reach callers only
//! as [`StorageError`].

use rusqlite::{Transaction, TransactionBehavior};

use super::Database;
use super::tables::member_notes;
use crate::error::StorageError;

#[derive(Clone)]
pub struct NoteStore {
    db: Database,
}

impl NoteStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Store one note for (sender, member).
    pub async fn append(
        &self,
        sender_id: &str,
        member_name: &str,
        message: &str,
    ) -> Result<(), StorageError> {
        let (sender, member, message) = (
            sender_id.to_string(),
            member_name.to_string(),
            message.to_string(),
        );
        self.run("append", sender_id, move |tx| {
            member_notes::insert_note(tx, &sender, &member, &message)
        })
        .await?;

        log::info!("Notes: Saved a note from {} for {}", sender_id, member_name);
        Ok(())
    }

    /// All notes for (sender, member) in the order they were left.
    pub async fn fetch_all(
        &self,
        sender_id: &str,
        member_name: &str,
    ) -> Result<Vec<String>, StorageError> {
        let (sender, member) = (sender_id.to_string(), member_name.to_string());
        let notes = self
            .run("fetch", sender_id, move |tx| {
                member_notes::list_notes(tx, &sender, &member)
            })
            .await?;

        log::debug!(
            "Notes: Fetched {} notes from {} for {}",
            notes.len(),
            sender_id,
            member_name
        );
        Ok(notes)
    }

    /// Remove every note for (sender, member). An absent key clears trivially.
    pub async fn clear(&self, sender_id: &str, member_name: &str) -> Result<usize, StorageError> {
        let (sender, member) = (sender_id.to_string(), member_name.to_string());
        let removed = self
            .run("clear", sender_id, move |tx| {
                member_notes::delete_notes(tx, &sender, &member)
            })
            .await?;

        log::info!(
            "Notes: Cleared {} notes from {} for {}",
            removed,
            sender_id,
            member_name
        );
        Ok(removed)
    }

    async fn run<T, F>(&self, op: &'static str, sender_id: &str, f: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&Transaction) -> rusqlite::Result<T> + Send + 'static,
    {
        let db = self.db.clone();
        match tokio::task::spawn_blocking(move || in_transaction(&db, f)).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                log::error!("Notes: {} for {} failed: {}", op, sender_id, e);
                Err(StorageError)
            }
            Err(e) => {
                log::error!("Notes: {} task for {} did not complete: {}", op, sender_id, e);
                Err(StorageError)
            }
        }
    }
}

/// Commit on success; the transaction rolls back and the connection returns
/// to the pool when dropped on any error path.
fn in_transaction<T, F>(db: &Database, f: F) -> Result<T, String>
where
    F: FnOnce(&Transaction) -> rusqlite::Result<T>,
{
    let mut conn = db
        .conn()
        .map_err(|e| format!("Failed to get connection: {}", e))?;

    member_notes::init_tables(&conn).map_err(|e| format!("Failed to init tables: {}", e))?;

    // Immediate: concurrent writers wait out the busy timeout in BEGIN.
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| format!("Failed to begin transaction: {}", e))?;
    let value = f(&tx).map_err(|e| format!("Query failed: {}", e))?;
    tx.commit()
        .map_err(|e| format!("Failed to commit: {}", e))?;

    Ok(value)
}
