//! Login screen
//!
//! A large clock and a user selector. Guest enters the desktop; Admin
//! slides in a credentials panel that cannot actually sign in.

use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use crate::screens::Screen;
use crate::state::AppState;

/// Login screen component
#[component]
pub fn LoginScreen() -> Element {
    let mut state = use_context::<AppState>();
    let mut time = use_signal(|| chrono::Local::now().format("%H:%M").to_string());
    let mut admin_open = use_signal(|| false);

    use_future(move || async move {
        loop {
            sleep(Duration::from_millis(1000)).await;
            let now = chrono::Local::now().format("%H:%M").to_string();
            if now != *time.peek() {
                time.set(now);
            }
        }
    });

    let enter_guest = move |_| {
        state.nav.go(Screen::Guest);
    };

    let toggle_admin = move |_| {
        let next = !*admin_open.peek();
        admin_open.set(next);
    };

    let submit_admin = move |_| {
        state.notify("Admin sign-in is unavailable on this machine");
    };

    let selector_class = if admin_open() {
        "login-user-selector pushed"
    } else {
        "login-user-selector"
    };
    let admin_class = if admin_open() {
        "admin-login show"
    } else {
        "admin-login"
    };

    rsx! {
        div {
            class: "screen login-screen fade-in",

            div {
                class: "login-clock",
                "{time}"
            }

            div {
                class: selector_class,

                button {
                    id: "guest-button",
                    class: "user-card glass",
                    onclick: enter_guest,
                    div { class: "user-avatar", "G" }
                    div { class: "user-name", "Guest" }
                }

                button {
                    id: "admin-button",
                    class: "user-card glass",
                    onclick: toggle_admin,
                    div { class: "user-avatar admin", "A" }
                    div { class: "user-name", "Admin" }
                }
            }

            div {
                class: admin_class,

                div { class: "admin-login-title", "Sign in as Admin" }
                input {
                    class: "admin-field",
                    r#type: "text",
                    placeholder: "Username",
                    onfocus: move |_| state.editor_focused.set(true),
                    onblur: move |_| state.editor_focused.set(false),
                }
                input {
                    class: "admin-field",
                    r#type: "password",
                    placeholder: "Password",
                    onfocus: move |_| state.editor_focused.set(true),
                    onblur: move |_| state.editor_focused.set(false),
                }
                div {
                    class: "admin-actions",
                    button { class: "admin-submit", onclick: submit_admin, "Sign In" }
                    button { id: "button-close", class: "admin-close", onclick: toggle_admin, "Close" }
                }
            }
        }
    }
}
