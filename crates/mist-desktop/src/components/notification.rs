//! Transient notifications
//!
//! A single auto-dismissing toast used for recoverable guard conditions
//! (locked notes, editor-only actions while the editor is hidden).

use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use crate::state::AppState;

/// How long a notice stays on screen
const DISMISS_MS: u64 = 2600;

/// Renders the current notice and dismisses it after a short delay
#[component]
pub fn NotificationHost() -> Element {
    let mut state = use_context::<AppState>();

    use_effect(move || {
        let Some(notice) = (*state.notice.read()).clone() else {
            return;
        };
        spawn(async move {
            sleep(Duration::from_millis(DISMISS_MS)).await;
            // A newer notice owns the toast now; leave it alone.
            let current_seq = state.notice.peek().as_ref().map(|n| n.seq);
            if current_seq == Some(notice.seq) {
                state.notice.set(None);
            }
        });
    });

    let Some(notice) = (state.notice)() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "notification glass",
            role: "status",
            "{notice.message}"
        }
    }
}
