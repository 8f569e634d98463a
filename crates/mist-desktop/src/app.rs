//! Main application component

use std::collections::HashSet;
use std::sync::Arc;

use dioxus::prelude::*;

use mist_core::NotesStore;

use crate::components::NotificationHost;
use crate::screens::{BootScreen, GuestScreen, LoginScreen, Navigator, Screen};
use crate::services::storage;
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> Element {
    let kv = use_signal(storage::open_default_kv);
    let store = use_signal(|| NotesStore::open(Arc::clone(&kv.peek())));

    let nav = Navigator::new(use_signal(|| Screen::Boot), use_signal(HashSet::new));

    let state = AppState {
        nav,
        kv,
        store,
        current_note_id: use_signal(|| None),
        editor_visible: use_signal(|| true),
        show_locked_editor: use_signal(|| false),
        editor_focused: use_signal(|| false),
        notes_window_open: use_signal(|| true),
        notice: use_signal(|| None),
    };
    use_context_provider(|| state);

    let screen = match nav.current() {
        Screen::Boot => rsx! { BootScreen {} },
        Screen::Login => rsx! { LoginScreen {} },
        Screen::Guest => rsx! { GuestScreen {} },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/style.css") }

        div {
            class: "app-root",
            {screen}

            NotificationHost {}
        }
    }
}
