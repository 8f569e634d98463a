//! Notes application
//!
//! The markdown notes app presented as a draggable, resizable window: an
//! explorer sidebar, a toolbar, and the editor/preview panes.

mod editor;
mod note_list;
mod toolbar;

use dioxus::prelude::*;

use mist_core::Error;

use crate::components::window::Rect;
use crate::components::Window;
use crate::state::AppState;

use editor::EditorPanes;
use note_list::NotesExplorer;
use toolbar::NotesToolbar;

/// Where the notes window opens on a fresh desktop
const INITIAL_RECT: Rect = Rect {
    x: 160.0,
    y: 96.0,
    w: 880.0,
    h: 560.0,
};

/// Ask for confirmation before deleting the current note.
///
/// Locked notes surface a notification instead; without a selection this is
/// a no-op.
fn request_delete(mut state: AppState, mut confirm: Signal<bool>) {
    let Some(note) = state.current_note() else {
        return;
    };
    if note.locked {
        state.notify("This note is locked and cannot be deleted");
    } else {
        confirm.set(true);
    }
}

/// The notes window
#[component]
pub fn NotesWindow() -> Element {
    let mut state = use_context::<AppState>();
    let confirm_delete = use_signal(|| false);

    let on_close = move |()| {
        state.notes_window_open.set(false);
    };

    let on_keydown = move |evt: Event<KeyboardData>| {
        // Delete only acts on the note while the user is not typing.
        if (state.editor_focused)() {
            return;
        }
        if matches!(evt.key(), Key::Delete | Key::Backspace) {
            request_delete(state, confirm_delete);
        }
    };

    rsx! {
        Window {
            title: "Notes",
            initial: INITIAL_RECT,
            onclose: on_close,

            div {
                class: "notes-window",
                tabindex: "0",
                onkeydown: on_keydown,

                NotesExplorer {}

                div {
                    class: "notes-main",
                    NotesToolbar { confirm_delete }
                    EditorPanes {}
                }
            }
        }

        if confirm_delete() {
            DeleteConfirmDialog { confirm_delete }
        }
    }
}

/// Modal confirmation for deleting the current note
#[component]
fn DeleteConfirmDialog(confirm_delete: Signal<bool>) -> Element {
    let mut state = use_context::<AppState>();
    let mut confirm = confirm_delete;

    let title = state.current_note().map_or_else(String::new, |n| n.title());

    let cancel = move |_| confirm.set(false);

    let delete = move |_| {
        confirm.set(false);
        let Some(id) = *state.current_note_id.peek() else {
            return;
        };

        let result = state.store.write().delete(id);
        match result {
            Ok(()) => {
                tracing::info!("Deleted note: {id}");
                let next = state.store.read().list().first().map(|n| n.id);
                match next {
                    Some(next_id) => state.select_note(next_id),
                    None => state.current_note_id.set(None),
                }
            }
            Err(Error::Locked(_)) => {
                state.notify("This note is locked and cannot be deleted");
            }
            Err(e) => {
                tracing::error!("Failed to delete note: {e}");
            }
        }
    };

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: cancel,

            div {
                class: "dialog glass",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "dialog-title", "Delete note" }
                div {
                    class: "dialog-body",
                    "Delete \"{title}\"? This cannot be undone."
                }
                div {
                    class: "dialog-actions",
                    button { class: "dialog-button", onclick: cancel, "Cancel" }
                    button { class: "dialog-button danger", onclick: delete, "Delete" }
                }
            }
        }
    }
}
