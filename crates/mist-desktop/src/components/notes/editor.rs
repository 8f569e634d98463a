//! Editor and preview panes
//!
//! The two-pane layout driven by `(locked, show_editor)`, the resizable
//! divider between the panes, and the webview selection plumbing used by
//! the toolbar's insert actions.

use std::time::Duration;

use dioxus::document;
use dioxus::prelude::*;
use tokio::time::sleep;

use mist_core::{markdown, Error};

use crate::components::DragOverlay;
use crate::state::AppState;

/// Minimum share of the split either pane can be narrowed to
const MIN_PANE_FRACTION: f64 = 0.2;

/// Resolved pane layout for the current note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneLayout {
    /// Preview fills the window; the editor is absent
    PreviewOnly,
    /// Split view with a read-only editor (locked note, explicit request)
    SplitReadOnly,
    /// Split view with an editable editor and live preview
    SplitEditable,
}

/// Decide the pane layout from the note's lock flag and the editor request.
pub fn pane_layout(locked: bool, show_editor: bool) -> PaneLayout {
    match (locked, show_editor) {
        (_, false) => PaneLayout::PreviewOnly,
        (true, true) => PaneLayout::SplitReadOnly,
        (false, true) => PaneLayout::SplitEditable,
    }
}

/// Read the textarea's selection range from the webview.
///
/// Returns `None` when the textarea is missing, making the caller's action
/// a no-op rather than an error.
pub async fn textarea_selection() -> Option<(usize, usize)> {
    let script = r"
        const el = document.querySelector('.note-textarea');
        if (!el) return null;
        return [el.selectionStart, el.selectionEnd];
    ";
    match document::eval(script).await {
        Ok(value) => serde_json::from_value::<Option<(usize, usize)>>(value)
            .ok()
            .flatten(),
        Err(e) => {
            tracing::debug!("Failed to read textarea selection: {e:?}");
            None
        }
    }
}

/// Restore focus and place the caret after an insertion.
pub async fn set_caret(position: usize) {
    // Let the re-rendered textarea value land before touching the caret.
    sleep(Duration::from_millis(30)).await;
    let script = format!(
        "const el = document.querySelector('.note-textarea');
         if (el) {{ el.focus(); el.setSelectionRange({position}, {position}); }}"
    );
    if let Err(e) = document::eval(&script).await {
        tracing::debug!("Failed to restore caret: {e:?}");
    }
}

/// In-flight divider drag
#[derive(Debug, Clone, Copy, PartialEq)]
struct DividerDrag {
    start_x: f64,
    start_fraction: f64,
    container_width: f64,
}

/// Editor/preview panes for the current note
#[component]
pub fn EditorPanes() -> Element {
    let mut state = use_context::<AppState>();
    let mut fraction = use_signal(|| 0.5_f64);
    let mut divider_drag = use_signal(|| None::<DividerDrag>);
    let mut panes = use_signal(|| None::<std::rc::Rc<MountedData>>);

    let Some(note) = state.current_note() else {
        return rsx! {
            div {
                class: "editor-placeholder",
                "Select a note or create a new one"
            }
        };
    };

    let layout = pane_layout(note.locked, state.editor_shown(note.locked));
    let preview_html = markdown::render(&note.content);
    let note_id = note.id;

    let on_input = move |evt: Event<FormData>| {
        let result = state.store.write().update(note_id, evt.value());
        match result {
            Ok(()) => {}
            Err(Error::Locked(_)) => {
                state.notify("This note is locked and cannot be edited");
            }
            Err(e) => tracing::debug!("Ignoring edit on missing note: {e}"),
        }
    };

    let begin_divider_drag = move |evt: Event<PointerData>| {
        let start_x = evt.client_coordinates().x;
        spawn(async move {
            let node = panes.peek().clone();
            let width = match node {
                Some(node) => node
                    .get_client_rect()
                    .await
                    .map(|rect| rect.size.width)
                    .unwrap_or(0.0),
                None => 0.0,
            };
            if width > 0.0 {
                divider_drag.set(Some(DividerDrag {
                    start_x,
                    start_fraction: *fraction.peek(),
                    container_width: width,
                }));
            }
        });
    };

    let on_divider_move = move |evt: PointerEvent| {
        let Some(drag) = *divider_drag.peek() else { return };
        let dx = evt.client_coordinates().x - drag.start_x;
        let next = drag.start_fraction + dx / drag.container_width;
        fraction.set(next.clamp(MIN_PANE_FRACTION, 1.0 - MIN_PANE_FRACTION));
    };

    let end_divider_drag = move |()| divider_drag.set(None);

    let editor_percent = fraction() * 100.0;
    let preview_percent = 100.0 - editor_percent;

    rsx! {
        div {
            class: "notes-panes",
            onmounted: move |evt| panes.set(Some(evt.data())),

            if layout != PaneLayout::PreviewOnly {
                div {
                    class: "note-input",
                    style: "flex: 1 1 {editor_percent}%;",
                    textarea {
                        class: "note-textarea",
                        placeholder: "Start typing your note in markdown...",
                        readonly: layout == PaneLayout::SplitReadOnly,
                        value: "{note.content}",
                        oninput: on_input,
                        onfocus: move |_| state.editor_focused.set(true),
                        onblur: move |_| state.editor_focused.set(false),
                    }
                }

                div {
                    class: "notes-resizable-divider",
                    onpointerdown: begin_divider_drag,
                }
            }

            div {
                class: "note-preview",
                style: if layout == PaneLayout::PreviewOnly {
                    "flex: 1 1 100%;".to_string()
                } else {
                    format!("flex: 1 1 {preview_percent}%;")
                },
                dangerous_inner_html: "{preview_html}",
            }

            if divider_drag().is_some() {
                DragOverlay {
                    cursor: "col-resize".to_string(),
                    onmove: on_divider_move,
                    onrelease: end_divider_drag,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locked_note_defaults_to_preview_only() {
        assert_eq!(pane_layout(true, false), PaneLayout::PreviewOnly);
    }

    #[test]
    fn test_locked_note_with_explicit_editor_is_read_only() {
        assert_eq!(pane_layout(true, true), PaneLayout::SplitReadOnly);
    }

    #[test]
    fn test_unlocked_note_with_editor_is_editable() {
        assert_eq!(pane_layout(false, true), PaneLayout::SplitEditable);
    }

    #[test]
    fn test_unlocked_note_without_editor_is_preview_only() {
        assert_eq!(pane_layout(false, false), PaneLayout::PreviewOnly);
    }
}
