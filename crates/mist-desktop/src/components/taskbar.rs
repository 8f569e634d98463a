//! Taskbar
//!
//! The dock at the bottom of the guest desktop. The notes icon toggles the
//! notes window; the remaining icons are decorative.

use dioxus::prelude::*;

use crate::state::AppState;

/// Taskbar component
#[component]
pub fn Taskbar() -> Element {
    let mut state = use_context::<AppState>();

    let toggle_notes = move |_| {
        let next = !*state.notes_window_open.peek();
        state.notes_window_open.set(next);
    };

    let notes_class = if (state.notes_window_open)() {
        "taskbar-icon taskbar-icon-notes running"
    } else {
        "taskbar-icon taskbar-icon-notes"
    };

    rsx! {
        footer {
            class: "taskbar glass",

            button {
                class: notes_class,
                title: "Notes",
                onclick: toggle_notes,
                "\u{1f4dd}"
            }
            button { class: "taskbar-icon", title: "Files", "\u{1f4c1}" }
            button { class: "taskbar-icon", title: "Terminal", "\u{2328}" }
            button { class: "taskbar-icon", title: "Settings", "\u{2699}" }
        }
    }
}
