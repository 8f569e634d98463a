//! Control center
//!
//! Four tile groups toggled between expanded and collapsed with a staggered
//! group-by-group transition. An `animating` flag drops overlapping toggles
//! so a second click during the transition is ignored.

use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use crate::components::Slider;
use crate::theme::PALETTE;

/// Number of tile groups
const GROUP_COUNT: usize = 4;
/// Delay between consecutive groups during expand/collapse
const STAGGER_MS: u64 = 55;
/// Per-group transition duration, matching the CSS transition
const GROUP_TRANSITION_MS: u64 = 190;

/// Shared control-center state, created once by the guest screen
#[derive(Clone, Copy, PartialEq)]
pub struct ControlCenterState {
    expanded: Signal<bool>,
    animating: Signal<bool>,
    groups: Signal<[bool; GROUP_COUNT]>,
}

/// Create the control-center signals (collapsed initial state)
pub fn use_control_center() -> ControlCenterState {
    ControlCenterState {
        expanded: use_signal(|| false),
        animating: use_signal(|| false),
        groups: use_signal(|| [false; GROUP_COUNT]),
    }
}

impl ControlCenterState {
    /// Toggle between expanded and collapsed.
    ///
    /// Overlapping toggles are dropped while the stagger is running.
    pub fn toggle(self) {
        let mut expanded = self.expanded;
        let mut animating = self.animating;
        let mut groups = self.groups;

        if *animating.peek() {
            return;
        }
        animating.set(true);
        let target = !*expanded.peek();

        spawn(async move {
            if target {
                for i in 0..GROUP_COUNT {
                    groups.write()[i] = true;
                    sleep(Duration::from_millis(GROUP_TRANSITION_MS + STAGGER_MS)).await;
                }
            } else {
                for i in (0..GROUP_COUNT).rev() {
                    groups.write()[i] = false;
                    sleep(Duration::from_millis(GROUP_TRANSITION_MS + STAGGER_MS)).await;
                }
            }
            expanded.set(target);
            animating.set(false);
        });
    }

    fn group_class(self, index: usize) -> &'static str {
        if (self.groups)()[index] {
            "control-center-group open"
        } else {
            "control-center-group"
        }
    }

    fn any_group_visible(self) -> bool {
        (self.groups)().iter().any(|&open| open)
    }
}

/// The settings button in the navigation bar
#[component]
pub fn ControlCenterButton(cc: ControlCenterState) -> Element {
    rsx! {
        button {
            class: "nav-item nav-control-center-settings",
            onclick: move |_| cc.toggle(),
            "\u{2699}"
        }
    }
}

/// The control-center panel below the navigation bar
#[component]
pub fn ControlCenter(cc: ControlCenterState) -> Element {
    if !cc.any_group_visible() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "control-center glass",

            div {
                class: cc.group_class(0),
                ToggleTile { label: "Wi-Fi", initial: true }
                ToggleTile { label: "Bluetooth", initial: true }
                ToggleTile { label: "Focus", initial: false }
            }

            div {
                class: cc.group_class(1),
                Slider {
                    label: "Volume",
                    class: "volume-slider",
                    storage_key: "mist.slider.volume".to_string(),
                }
            }

            div {
                class: cc.group_class(2),
                Slider {
                    label: "Brightness",
                    class: "brightness-slider",
                    storage_key: "mist.slider.brightness".to_string(),
                }
            }

            div {
                class: cc.group_class(3),
                ToggleTile { label: "Dark Mode", initial: true }
                ToggleTile { label: "Night Shift", initial: false }
            }
        }
    }
}

/// A simple on/off tile
#[component]
fn ToggleTile(label: String, initial: bool) -> Element {
    let mut active = use_signal(move || initial);

    let (class, color) = if active() {
        ("control-tile active", PALETTE.accent)
    } else {
        ("control-tile", PALETTE.text_muted)
    };

    rsx! {
        button {
            class,
            style: "border-color: {color};",
            onclick: move |_| {
                let next = !*active.peek();
                active.set(next);
            },
            "{label}"
        }
    }
}
