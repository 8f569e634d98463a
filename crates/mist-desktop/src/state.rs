//! Application state management
//!
//! Global state accessible via Dioxus context providers. Built once at
//! startup and passed down explicitly instead of living in guarded module
//! globals.

use std::sync::Arc;

use dioxus::prelude::*;

use mist_core::kv::KvStore;
use mist_core::{Note, NoteId, NotesStore};

use crate::screens::Navigator;

/// A transient, auto-dismissing notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Supersession counter: a newer notice invalidates older dismiss timers
    pub seq: u64,
    pub message: String,
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Screen navigation (current screen + already-displayed set)
    pub nav: Navigator,
    /// Key-value storage shared by the notes store and the sliders
    pub kv: Signal<Arc<dyn KvStore>>,
    /// The notes store, hydrated once at startup
    pub store: Signal<NotesStore>,
    /// Currently selected note ID
    pub current_note_id: Signal<Option<NoteId>>,
    /// Last explicit editor-pane toggle for unlocked notes
    pub editor_visible: Signal<bool>,
    /// Explicit request to show the (read-only) editor of a locked note
    pub show_locked_editor: Signal<bool>,
    /// Whether a text field currently owns keyboard input
    pub editor_focused: Signal<bool>,
    /// Whether the notes window is shown
    pub notes_window_open: Signal<bool>,
    /// Current transient notification, if any
    pub notice: Signal<Option<Notice>>,
}

impl AppState {
    /// Get the currently selected note
    #[must_use]
    pub fn current_note(&self) -> Option<Note> {
        let current_id = (self.current_note_id)()?;
        self.store.read().get(current_id).cloned()
    }

    /// Select a note, resetting the locked-editor override
    pub fn select_note(&mut self, id: NoteId) {
        self.current_note_id.set(Some(id));
        self.show_locked_editor.set(false);
    }

    /// Whether the editor pane is shown for a note with the given lock flag.
    ///
    /// Unlocked notes follow the last explicit toggle; locked notes hide the
    /// editor unless it was explicitly requested.
    #[must_use]
    pub fn editor_shown(&self, locked: bool) -> bool {
        if locked {
            (self.show_locked_editor)()
        } else {
            (self.editor_visible)()
        }
    }

    /// Surface a transient notification
    pub fn notify(&mut self, message: impl Into<String>) {
        let seq = self.notice.peek().as_ref().map_or(0, |n| n.seq + 1);
        self.notice.set(Some(Notice {
            seq,
            message: message.into(),
        }));
    }
}
