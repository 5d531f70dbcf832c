use std::sync::Arc;

use crate::db::NoteStore;
use crate::pluralkit::IdentityRegistry;

/// Long-lived services every command handler works against. Built once at
/// startup and shared with the Discord handler behind an `Arc`.
pub struct Bot {
    registry: Arc<dyn IdentityRegistry>,
    notes: NoteStore,
}

impl Bot {
    pub fn new(registry: Arc<dyn IdentityRegistry>, notes: NoteStore) -> Self {
        Self { registry, notes }
    }

    pub fn registry(&self) -> &dyn IdentityRegistry {
        self.registry.as_ref()
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }
}
