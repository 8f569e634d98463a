//! Slider widget
//!
//! A track/thumb pair mapping pointer x-position to a stepped value,
//! optionally persisted to the key-value store. The fill percentage is
//! exposed through a CSS custom property and ARIA value attributes.

use dioxus::prelude::*;

use crate::components::DragOverlay;
use crate::state::AppState;

/// Snap `value` to the nearest `step` multiple and clamp it into range.
fn snap_value(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let step = if step > 0.0 && step.is_finite() { step } else { 0.01 };
    let snapped = (value / step).round() * step;
    snapped.clamp(min, max)
}

/// Map a pointer position along the track to a raw value.
fn value_from_track(x: f64, track_left: f64, track_width: f64, min: f64, max: f64) -> f64 {
    if track_width <= 0.0 {
        return min;
    }
    let t = ((x - track_left) / track_width).clamp(0.0, 1.0);
    min + t * (max - min)
}

/// Fill percentage for the current value
fn fill_percent(value: f64, min: f64, max: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        0.0
    } else {
        (value - min) / (max - min) * 100.0
    }
}

/// A horizontal slider bound to an optional storage key
#[component]
pub fn Slider(
    label: String,
    class: String,
    storage_key: Option<String>,
    #[props(default = 0.0)] min: f64,
    #[props(default = 1.0)] max: f64,
    #[props(default = 0.01)] step: f64,
    #[props(default = 0.4)] initial: f64,
) -> Element {
    let state = use_context::<AppState>();

    let stored_key = storage_key.clone();
    let mut value = use_signal(move || {
        let stored = stored_key
            .as_deref()
            .and_then(|key| state.kv.peek().get(key).ok().flatten())
            .and_then(|raw| raw.trim().parse::<f64>().ok());
        snap_value(stored.unwrap_or(initial), min, max, step)
    });
    let mut dragging = use_signal(|| false);
    let mut track_bounds = use_signal(|| None::<(f64, f64)>);
    let mut mounted = use_signal(|| None::<std::rc::Rc<MountedData>>);

    let persist_key = storage_key.clone();
    let apply = use_callback(move |next: f64| {
        let snapped = snap_value(next, min, max, step);
        value.set(snapped);
        if let Some(key) = persist_key.as_deref() {
            if let Err(e) = state.kv.peek().set(key, &snapped.to_string()) {
                tracing::warn!("Failed to persist slider value: {e}");
            }
        }
    });

    let on_track_down = move |evt: Event<PointerData>| {
        let client_x = evt.client_coordinates().x;
        spawn(async move {
            // The track position is only known to the webview; fetch it at
            // the start of the interaction and reuse it while dragging.
            let node = mounted.peek().clone();
            if let Some(node) = node {
                if let Ok(rect) = node.get_client_rect().await {
                    track_bounds.set(Some((rect.origin.x, rect.size.width)));
                }
            }
            if let Some((left, width)) = *track_bounds.peek() {
                apply.call(value_from_track(client_x, left, width, min, max));
            }
            dragging.set(true);
        });
    };

    let on_overlay_move = move |evt: PointerEvent| {
        if let Some((left, width)) = *track_bounds.peek() {
            apply.call(value_from_track(evt.client_coordinates().x, left, width, min, max));
        }
    };

    let release = move |()| dragging.set(false);

    let current = value();
    let percent = fill_percent(current, min, max);
    let percent_text = format!("{}%", percent.round());

    rsx! {
        div {
            class: "slider-row",
            span { class: "slider-label", "{label}" }
            div {
                class: "slider-track {class}",
                style: "--value-percent: {percent};",
                role: "slider",
                aria_valuemin: "{min}",
                aria_valuemax: "{max}",
                aria_valuenow: "{current}",
                aria_valuetext: "{percent_text}",
                onmounted: move |evt| mounted.set(Some(evt.data())),
                onpointerdown: on_track_down,

                div { class: "slider-fill" }
                div { class: "slider-thumb" }
            }

            if dragging() {
                DragOverlay {
                    cursor: "grabbing".to_string(),
                    onmove: on_overlay_move,
                    onrelease: release,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_rounds_to_step() {
        assert!((snap_value(0.424, 0.0, 1.0, 0.01) - 0.42).abs() < 1e-9);
        assert!((snap_value(0.426, 0.0, 1.0, 0.01) - 0.43).abs() < 1e-9);
    }

    #[test]
    fn test_snap_clamps_into_range() {
        assert_eq!(snap_value(2.0, 0.0, 1.0, 0.01), 1.0);
        assert_eq!(snap_value(-1.0, 0.0, 1.0, 0.01), 0.0);
    }

    #[test]
    fn test_snap_tolerates_bad_step() {
        assert_eq!(snap_value(0.5, 0.0, 1.0, 0.0), 0.5);
        assert_eq!(snap_value(0.5, 0.0, 1.0, f64::NAN), 0.5);
    }

    #[test]
    fn test_value_from_track_clamps_to_ends() {
        assert_eq!(value_from_track(-50.0, 0.0, 200.0, 0.0, 1.0), 0.0);
        assert_eq!(value_from_track(500.0, 0.0, 200.0, 0.0, 1.0), 1.0);
        assert_eq!(value_from_track(100.0, 0.0, 200.0, 0.0, 1.0), 0.5);
    }

    #[test]
    fn test_value_from_track_empty_track() {
        assert_eq!(value_from_track(10.0, 0.0, 0.0, 0.2, 0.8), 0.2);
    }

    #[test]
    fn test_fill_percent() {
        assert_eq!(fill_percent(0.25, 0.0, 1.0), 25.0);
        assert_eq!(fill_percent(5.0, 5.0, 5.0), 0.0);
    }
}
