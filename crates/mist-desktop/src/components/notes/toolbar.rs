//! Notes toolbar
//!
//! Formatting actions (headings, bold, italic, link, image), note creation
//! and deletion, and the preview toggle. Formatting only applies while the
//! editor pane is active; otherwise a notification is raised and nothing is
//! mutated.

use dioxus::prelude::*;

use mist_core::editing::wrap_selection;
use mist_core::Error;

use crate::state::AppState;

use super::editor::{pane_layout, set_caret, textarea_selection, PaneLayout};
use super::request_delete;

/// Template content for newly created notes
const NEW_NOTE_TEMPLATE: &str = "# New Note\n\nStart writing...";

/// Which toolbar dropdown is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dropdown {
    Format,
    Link,
    Image,
}

/// A formatting action expressed as a `(before, after)` wrap pair
fn format_markers(item: FormatItem) -> (String, String) {
    match item {
        FormatItem::Heading(level) => (format!("{} ", "#".repeat(level)), String::new()),
        FormatItem::Bold => ("**".to_string(), "**".to_string()),
        FormatItem::Italic => ("*".to_string(), "*".to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormatItem {
    Heading(usize),
    Bold,
    Italic,
}

impl FormatItem {
    const MENU: [Self; 8] = [
        Self::Heading(1),
        Self::Heading(2),
        Self::Heading(3),
        Self::Heading(4),
        Self::Heading(5),
        Self::Heading(6),
        Self::Bold,
        Self::Italic,
    ];

    fn label(self) -> String {
        match self {
            Self::Heading(level) => format!("Heading {level}"),
            Self::Bold => "Bold".to_string(),
            Self::Italic => "Italic".to_string(),
        }
    }
}

/// Insert a wrap pair around the current selection, exactly as if the user
/// had typed it: store update, list/preview refresh, caret after the
/// inserted text.
fn insert_into_editor(mut state: AppState, before: String, after: String) {
    let Some(note) = state.current_note() else {
        state.notify("Open a note first");
        return;
    };

    match pane_layout(note.locked, state.editor_shown(note.locked)) {
        PaneLayout::PreviewOnly => {
            state.notify("Open the editor to use formatting");
            return;
        }
        PaneLayout::SplitReadOnly => {
            state.notify("This note is locked and cannot be edited");
            return;
        }
        PaneLayout::SplitEditable => {}
    }

    spawn(async move {
        let Some((start, end)) = textarea_selection().await else {
            return;
        };
        let (new_text, caret) = wrap_selection(&note.content, start, end, &before, &after);

        let result = state.store.write().update(note.id, new_text);
        match result {
            Ok(()) => set_caret(caret).await,
            Err(Error::Locked(_)) => {
                state.notify("This note is locked and cannot be edited");
            }
            Err(e) => tracing::debug!("Dropping insertion into missing note: {e}"),
        }
    });
}

/// Toolbar for the notes window
#[component]
pub fn NotesToolbar(confirm_delete: Signal<bool>) -> Element {
    let mut state = use_context::<AppState>();
    let mut dropdown = use_signal(|| None::<Dropdown>);

    let mut toggle_dropdown = move |which: Dropdown| {
        let next = match *dropdown.peek() {
            Some(open) if open == which => None,
            _ => Some(which),
        };
        dropdown.set(next);
    };

    let create_note = move |_| {
        dropdown.set(None);
        let note = state.store.write().create(NEW_NOTE_TEMPLATE);
        tracing::info!("Created new note: {}", note.id);
        state.select_note(note.id);
        // A fresh note always opens with the editor visible.
        state.editor_visible.set(true);
    };

    let delete_note = move |_| {
        dropdown.set(None);
        request_delete(state, confirm_delete);
    };

    let toggle_preview = move |_| {
        dropdown.set(None);
        if let Some(note) = state.current_note() {
            if note.locked {
                let next = !*state.show_locked_editor.peek();
                state.show_locked_editor.set(next);
            } else {
                let next = !*state.editor_visible.peek();
                state.editor_visible.set(next);
            }
        }
    };

    let open_dropdown = match dropdown() {
        Some(Dropdown::Format) => rsx! { FormatDropdown { dropdown } },
        Some(Dropdown::Link) => rsx! {
            InsertDropdown {
                dropdown,
                title: "Insert Link",
                first_label: "Text",
                first_placeholder: "Link text",
                second_label: "URL",
                second_placeholder: "https://example.com",
                kind: Dropdown::Link,
            }
        },
        Some(Dropdown::Image) => rsx! {
            InsertDropdown {
                dropdown,
                title: "Insert Image",
                first_label: "Alt Text",
                first_placeholder: "Image description",
                second_label: "URL",
                second_placeholder: "https://example.com/image.jpg",
                kind: Dropdown::Image,
            }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            class: "notes-toolbar",

            div {
                class: "notes-text-options",
                button {
                    class: "toolbar-button",
                    title: "Text formatting",
                    onclick: move |_| toggle_dropdown(Dropdown::Format),
                    "Aa"
                }
                button {
                    class: "toolbar-button",
                    title: "Insert image",
                    onclick: move |_| toggle_dropdown(Dropdown::Image),
                    "\u{1f5bc}"
                }
                button {
                    class: "toolbar-button",
                    title: "Insert link",
                    onclick: move |_| toggle_dropdown(Dropdown::Link),
                    "\u{1f517}"
                }
            }

            div { class: "toolbar-spacer" }

            button {
                class: "toolbar-button new-notes-option",
                title: "New note",
                onclick: create_note,
                "+"
            }
            button {
                class: "toolbar-button",
                title: "Delete note",
                onclick: delete_note,
                "\u{1f5d1}"
            }
            button {
                class: "toolbar-button notes-preview-toggle",
                title: "Toggle editor",
                onclick: toggle_preview,
                "\u{25eb}"
            }

            {open_dropdown}
        }
    }
}

/// Heading/bold/italic menu
#[component]
fn FormatDropdown(dropdown: Signal<Option<Dropdown>>) -> Element {
    let state = use_context::<AppState>();
    let mut dropdown = dropdown;

    rsx! {
        div {
            class: "notes-dropdown glass",
            for item in FormatItem::MENU {
                {
                    let label = item.label();
                    rsx! {
                        button {
                            key: "{label}",
                            class: "notes-dropdown-item",
                            onclick: move |_| {
                                dropdown.set(None);
                                let (before, after) = format_markers(item);
                                insert_into_editor(state, before, after);
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

/// Two-field insert form used for links and images
#[component]
fn InsertDropdown(
    dropdown: Signal<Option<Dropdown>>,
    title: String,
    first_label: String,
    first_placeholder: String,
    second_label: String,
    second_placeholder: String,
    kind: Dropdown,
) -> Element {
    let mut state = use_context::<AppState>();
    let mut dropdown = dropdown;
    let mut first = use_signal(String::new);
    let mut second = use_signal(String::new);

    let submit = move |_| {
        dropdown.set(None);
        let text = first.peek().trim().to_string();
        let url = second.peek().trim().to_string();

        let snippet = match kind {
            Dropdown::Link => {
                let text = if text.is_empty() { "link".to_string() } else { text };
                let url = if url.is_empty() { "https://".to_string() } else { url };
                format!("[{text}]({url})")
            }
            Dropdown::Image => {
                let alt = if text.is_empty() { "image".to_string() } else { text };
                let url = if url.is_empty() { "https://".to_string() } else { url };
                format!("![{alt}]({url})")
            }
            Dropdown::Format => return,
        };

        insert_into_editor(state, snippet, String::new());
    };

    rsx! {
        div {
            class: "notes-dropdown glass notes-dropdown-form",

            div { class: "notes-dropdown-title", "{title}" }

            label { class: "notes-dropdown-label", "{first_label}" }
            input {
                class: "notes-dropdown-input",
                r#type: "text",
                placeholder: "{first_placeholder}",
                value: "{first}",
                oninput: move |evt| first.set(evt.value()),
                onfocus: move |_| state.editor_focused.set(true),
                onblur: move |_| state.editor_focused.set(false),
            }

            label { class: "notes-dropdown-label", "{second_label}" }
            input {
                class: "notes-dropdown-input",
                r#type: "text",
                placeholder: "{second_placeholder}",
                value: "{second}",
                oninput: move |evt| second.set(evt.value()),
                onfocus: move |_| state.editor_focused.set(true),
                onblur: move |_| state.editor_focused.set(false),
            }

            button { class: "notes-dropdown-submit", onclick: submit, "Insert" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_markers_prefix_only() {
        let (before, after) = format_markers(FormatItem::Heading(3));
        assert_eq!(before, "### ");
        assert_eq!(after, "");
    }

    #[test]
    fn test_bold_and_italic_wrap_both_sides() {
        assert_eq!(
            format_markers(FormatItem::Bold),
            ("**".to_string(), "**".to_string())
        );
        assert_eq!(
            format_markers(FormatItem::Italic),
            ("*".to_string(), "*".to_string())
        );
    }

    #[test]
    fn test_menu_covers_all_heading_levels() {
        let headings: Vec<usize> = FormatItem::MENU
            .iter()
            .filter_map(|item| match item {
                FormatItem::Heading(level) => Some(*level),
                _ => None,
            })
            .collect();
        assert_eq!(headings, vec![1, 2, 3, 4, 5, 6]);
    }
}
