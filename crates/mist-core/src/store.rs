//! Notes store
//!
//! An in-memory ordered list of notes mirrored to the key-value store after
//! every mutation. Hydration seeds a locked welcome note when the persisted
//! array is missing, corrupt, or empty.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::kv::KvStore;
use crate::models::{Note, NoteId};

/// Storage key holding the serialized note array
pub const NOTES_KEY: &str = "mist.notes";

/// Ordered collection of notes with synchronous write-through persistence
pub struct NotesStore {
    notes: Vec<Note>,
    kv: Arc<dyn KvStore>,
}

impl NotesStore {
    /// Create a store over `kv` and hydrate it from persisted state
    #[must_use]
    pub fn open(kv: Arc<dyn KvStore>) -> Self {
        let mut store = Self { notes: Vec::new(), kv };
        store.load();
        store
    }

    /// Hydrate from the persisted array.
    ///
    /// Fails soft: a storage or parse error leaves an empty list, and an
    /// empty list is reseeded with the locked welcome note.
    pub fn load(&mut self) {
        self.notes = match self.kv.get(NOTES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(notes) => notes,
                Err(e) => {
                    tracing::warn!("Discarding corrupt notes payload: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read notes from storage: {e}");
                Vec::new()
            }
        };

        if self.notes.is_empty() {
            self.notes.push(Note::seed());
            self.persist();
        }
    }

    /// Create a new unlocked note at the head of the list
    pub fn create(&mut self, initial_content: impl Into<String>) -> Note {
        let note = Note::new(initial_content);
        self.notes.insert(0, note.clone());
        self.persist();
        note
    }

    /// Rewrite a note's content, stamping `updated_at`.
    ///
    /// Locked and missing notes are left untouched; the condition is
    /// reported so the caller can surface it.
    pub fn update(&mut self, id: NoteId, content: impl Into<String>) -> Result<()> {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return Err(Error::NotFound(id.to_string()));
        };
        if note.locked {
            return Err(Error::Locked(id.to_string()));
        }

        note.content = content.into();
        note.updated_at = chrono::Utc::now().timestamp_millis();
        self.persist();
        Ok(())
    }

    /// Remove a note.
    ///
    /// Locked notes are never removed. Deleting the last note leaves the
    /// store empty until the next `load()` reseeds it.
    pub fn delete(&mut self, id: NoteId) -> Result<()> {
        let Some(note) = self.notes.iter().find(|n| n.id == id) else {
            return Err(Error::NotFound(id.to_string()));
        };
        if note.locked {
            return Err(Error::Locked(id.to_string()));
        }

        self.notes.retain(|n| n.id != id);
        self.persist();
        Ok(())
    }

    /// Get a note by ID
    #[must_use]
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Notes ordered pinned-first, then newest-first by creation time.
    ///
    /// The sort is stable, so equal timestamps keep insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Note> {
        let mut notes = self.notes.clone();
        notes.sort_by(|a, b| {
            b.pinned
                .cmp(&a.pinned)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        notes
    }

    /// Number of notes currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the store holds no notes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Mirror the in-memory list to storage.
    ///
    /// A write failure degrades this call to in-memory-only.
    fn persist(&self) {
        let payload = match serde_json::to_string(&self.notes) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Failed to serialize notes: {e}");
                return;
            }
        };
        if let Err(e) = self.kv.set(NOTES_KEY, &payload) {
            tracing::warn!("Failed to persist notes: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKvStore;
    use crate::models::derive_title;
    use pretty_assertions::assert_eq;

    fn setup() -> NotesStore {
        NotesStore::open(Arc::new(MemoryKvStore::new()))
    }

    #[test]
    fn test_empty_store_is_seeded() {
        let store = setup();
        let notes = store.list();

        assert_eq!(notes.len(), 1);
        assert!(notes[0].locked);
        assert!(notes[0].pinned);
        assert_eq!(notes[0].title(), "Welcome to Notes");
    }

    #[test]
    fn test_corrupt_payload_is_reseeded() {
        let kv = Arc::new(MemoryKvStore::new());
        kv.set(NOTES_KEY, "not json at all {").unwrap();

        let store = NotesStore::open(kv);
        assert_eq!(store.len(), 1);
        assert!(store.list()[0].locked);
    }

    #[test]
    fn test_create_inserts_at_head() {
        let mut store = setup();
        let note = store.create("# First\n\nBody");

        assert!(!note.locked);
        assert_eq!(store.get(note.id).unwrap().content, "# First\n\nBody");
    }

    #[test]
    fn test_update_round_trip() {
        let mut store = setup();
        let note = store.create("# Draft");

        store.update(note.id, "# Renamed\n\nNew body").unwrap();

        let updated = store.get(note.id).unwrap();
        assert_eq!(updated.content, "# Renamed\n\nNew body");
        assert_eq!(updated.title(), derive_title("# Renamed\n\nNew body"));
        assert!(updated.updated_at >= note.updated_at);
    }

    #[test]
    fn test_locked_note_rejects_update_and_delete() {
        let mut store = setup();
        let seed_id = store.list()[0].id;
        let before = store.list();

        assert!(matches!(
            store.update(seed_id, "overwritten"),
            Err(Error::Locked(_))
        ));
        assert!(matches!(store.delete(seed_id), Err(Error::Locked(_))));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_missing_note_reports_not_found() {
        let mut store = setup();
        let unknown = NoteId::new();

        assert!(matches!(
            store.update(unknown, "x"),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(store.delete(unknown), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_list_orders_pinned_first_then_newest() {
        let mut store = setup();
        let older = store.create("older");
        let newer = store.create("newer");

        let notes = store.list();
        assert!(notes[0].pinned, "seed note must stay first");
        assert_eq!(notes[1].id, newer.id);
        assert_eq!(notes[2].id, older.id);

        for pair in notes.windows(2) {
            assert!(pair[0].pinned >= pair[1].pinned);
        }
    }

    #[test]
    fn test_list_tie_break_keeps_insertion_order() {
        let mut store = setup();
        let mut first = Note::new("a");
        let mut second = Note::new("b");
        second.created_at = first.created_at;
        first.updated_at = first.created_at;
        second.updated_at = first.created_at;
        store.notes.insert(0, first.clone());
        store.notes.insert(1, second.clone());

        let notes = store.list();
        let unpinned: Vec<NoteId> = notes.iter().filter(|n| !n.pinned).map(|n| n.id).collect();
        assert_eq!(unpinned, vec![first.id, second.id]);
    }

    #[test]
    fn test_delete_last_unlocked_leaves_only_seed() {
        let mut store = setup();
        let note = store.create("scratch");

        store.delete(note.id).unwrap();

        let notes = store.list();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].locked);
    }

    #[test]
    fn test_store_can_drain_to_empty_until_reload() {
        let kv = Arc::new(MemoryKvStore::new());
        // Persist a single unlocked note so the seed never enters the picture.
        let only = Note::new("solo");
        kv.set(NOTES_KEY, &serde_json::to_string(&vec![only.clone()]).unwrap())
            .unwrap();

        let mut store = NotesStore::open(Arc::clone(&kv) as Arc<dyn KvStore>);
        store.delete(only.id).unwrap();
        assert!(store.is_empty());

        // The seed only reappears on the next hydration.
        store.load();
        assert_eq!(store.len(), 1);
        assert!(store.list()[0].locked);
    }

    #[test]
    fn test_mutations_persist_across_reopen() {
        let kv = Arc::new(MemoryKvStore::new());
        let mut store = NotesStore::open(Arc::clone(&kv) as Arc<dyn KvStore>);
        let note = store.create("# Kept\n\nStill here");

        let reopened = NotesStore::open(kv);
        let found = reopened.get(note.id).unwrap();
        assert_eq!(found.content, "# Kept\n\nStill here");
    }
}
