//! Notes explorer
//!
//! The sidebar listing every note, pinned-first then newest-first.

use dioxus::prelude::*;

use crate::state::AppState;

/// Sidebar list of notes
#[component]
pub fn NotesExplorer() -> Element {
    let mut state = use_context::<AppState>();
    let notes = state.store.read().list();
    let current_id = (state.current_note_id)();

    rsx! {
        div {
            class: "notes-explorer",

            if notes.is_empty() {
                div { class: "notes-explorer-empty", "No notes yet" }
            } else {
                for note in notes {
                    {
                        let note_id = note.id;
                        let title = note.title();
                        let class = if current_id == Some(note_id) {
                            "note-item glass active"
                        } else {
                            "note-item glass"
                        };
                        let marker = if note.pinned { "\u{1f4cc} " } else { "" };

                        rsx! {
                            button {
                                key: "{note_id}",
                                class,
                                onclick: move |_| state.select_note(note_id),
                                "{marker}{title}"
                            }
                        }
                    }
                }
            }
        }
    }
}
