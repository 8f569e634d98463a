//! Guest desktop screen
//!
//! Navigation bar with clock, date, and battery, the control center, the
//! taskbar, and the notes window.

use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use crate::components::{use_control_center, ControlCenter, ControlCenterButton, NotesWindow, Taskbar};
use crate::screens::Screen;
use crate::state::AppState;

/// Battery charge level reported by the (simulated) power supply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
enum BatteryLevel {
    Full,
    Medium,
    Low,
}

impl BatteryLevel {
    const fn glyph(self) -> &'static str {
        match self {
            Self::Full => "\u{25ae}\u{25ae}\u{25ae}",
            Self::Medium => "\u{25ae}\u{25ae}\u{25af}",
            Self::Low => "\u{25ae}\u{25af}\u{25af}",
        }
    }
}

/// Fixed level, matching the simulated power supply state
const BATTERY_LEVEL: BatteryLevel = BatteryLevel::Full;
const BATTERY_GLYPH: &str = BATTERY_LEVEL.glyph();

fn format_time() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

fn format_short_date() -> String {
    chrono::Local::now().format("%a %-d %b %Y").to_string()
}

/// Guest desktop component
#[component]
pub fn GuestScreen() -> Element {
    let mut state = use_context::<AppState>();
    let mut time = use_signal(format_time);
    let mut date = use_signal(format_short_date);
    let control_center = use_control_center();

    // One-time entry work: select the first listed note, as if the notes
    // app had just been opened on a fresh desktop.
    use_effect(move || {
        if state.nav.begin(Screen::Guest) && state.current_note_id.peek().is_none() {
            let first = state.store.read().list().first().map(|n| n.id);
            if let Some(id) = first {
                state.select_note(id);
            }
        }
    });

    // Clock ticks every second, the date only needs a minute-scale tick.
    use_future(move || async move {
        loop {
            sleep(Duration::from_millis(1000)).await;
            let now = format_time();
            if now != *time.peek() {
                time.set(now);
            }
        }
    });
    use_future(move || async move {
        loop {
            sleep(Duration::from_millis(60_000)).await;
            date.set(format_short_date());
        }
    });

    rsx! {
        div {
            class: "screen guest-screen fade-in",

            nav {
                class: "navbar glass",
                div { class: "nav-left", "Mist" }
                div {
                    class: "nav-right",
                    ControlCenterButton { cc: control_center }
                    span { id: "nav-battery", class: "nav-item battery", "{BATTERY_GLYPH}" }
                    span { id: "nav-date", class: "nav-item", "{date}" }
                    span { id: "nav-time", class: "nav-item", "{time}" }
                }
            }

            ControlCenter { cc: control_center }

            div {
                class: "desktop-area",
                if (state.notes_window_open)() {
                    NotesWindow {}
                }
            }

            Taskbar {}
        }
    }
}
