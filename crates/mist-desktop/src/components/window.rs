//! Window chrome
//!
//! A draggable, corner-resizable window container. Dragging keeps at least
//! 50 px of the window visible on every side; resizing pins the corner
//! opposite the one being dragged.

use dioxus::desktop::window;
use dioxus::prelude::*;

/// Minimum number of window pixels that must stay visible while dragging
const MIN_VISIBLE: f64 = 50.0;
/// Minimum window size reachable by resizing
const MIN_WIDTH: f64 = 420.0;
const MIN_HEIGHT: f64 = 300.0;

/// Window position and size in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// The four resize hit-targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    Nw,
    Ne,
    Sw,
    Se,
}

impl Corner {
    const ALL: [Self; 4] = [Self::Nw, Self::Ne, Self::Sw, Self::Se];

    const fn class(self) -> &'static str {
        match self {
            Self::Nw => "window-corner nw",
            Self::Ne => "window-corner ne",
            Self::Sw => "window-corner sw",
            Self::Se => "window-corner se",
        }
    }

    const fn cursor(self) -> &'static str {
        match self {
            Self::Nw | Self::Se => "nwse-resize",
            Self::Ne | Self::Sw => "nesw-resize",
        }
    }
}

/// An in-flight pointer interaction with the window chrome
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragMode {
    Move,
    Resize(Corner),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    mode: DragMode,
    pointer_start: (f64, f64),
    rect_start: Rect,
}

/// Clamp a dragged position so the window cannot leave the viewport.
///
/// At least [`MIN_VISIBLE`] pixels stay inside horizontally, and the title
/// bar never moves above the top edge.
fn clamp_drag(x: f64, y: f64, rect: Rect, viewport: (f64, f64)) -> (f64, f64) {
    let (vw, vh) = viewport;
    let x = x.clamp(-(rect.w - MIN_VISIBLE), (vw - MIN_VISIBLE).max(-(rect.w - MIN_VISIBLE)));
    let y = y.clamp(0.0, (vh - MIN_VISIBLE).max(0.0));
    (x, y)
}

/// Apply a corner drag to the starting rect, keeping the opposite corner
/// fixed and never shrinking below the minimum size.
fn resize_rect(corner: Corner, start: Rect, dx: f64, dy: f64) -> Rect {
    let right = start.x + start.w;
    let bottom = start.y + start.h;

    let (x, w) = match corner {
        Corner::Ne | Corner::Se => (start.x, (start.w + dx).max(MIN_WIDTH)),
        Corner::Nw | Corner::Sw => {
            let w = (start.w - dx).max(MIN_WIDTH);
            (right - w, w)
        }
    };
    let (y, h) = match corner {
        Corner::Sw | Corner::Se => (start.y, (start.h + dy).max(MIN_HEIGHT)),
        Corner::Nw | Corner::Ne => {
            let h = (start.h - dy).max(MIN_HEIGHT);
            (bottom - h, h)
        }
    };

    Rect { x, y, w, h }
}

/// Logical viewport size of the host window
fn viewport_size() -> (f64, f64) {
    let host = window();
    let scale = host.scale_factor();
    let size = host.inner_size();
    (f64::from(size.width) / scale, f64::from(size.height) / scale)
}

/// A transparent full-viewport layer owning pointer events while a drag is
/// active, standing in for document-level listeners.
#[component]
pub fn DragOverlay(
    cursor: String,
    onmove: EventHandler<PointerEvent>,
    onrelease: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "drag-overlay",
            style: "cursor: {cursor};",
            onpointermove: move |evt| onmove.call(evt),
            onpointerup: move |_| onrelease.call(()),
            onpointercancel: move |_| onrelease.call(()),
        }
    }
}

/// A draggable, resizable window with a title bar and close control
#[component]
pub fn Window(
    title: String,
    initial: Rect,
    onclose: EventHandler<()>,
    children: Element,
) -> Element {
    let mut rect = use_signal(move || initial);
    let mut drag = use_signal(|| None::<DragState>);

    let begin_move = move |evt: Event<PointerData>| {
        let point = evt.client_coordinates();
        drag.set(Some(DragState {
            mode: DragMode::Move,
            pointer_start: (point.x, point.y),
            rect_start: *rect.peek(),
        }));
    };

    let begin_resize = move |corner: Corner, evt: Event<PointerData>| {
        evt.stop_propagation();
        let point = evt.client_coordinates();
        drag.set(Some(DragState {
            mode: DragMode::Resize(corner),
            pointer_start: (point.x, point.y),
            rect_start: *rect.peek(),
        }));
    };

    let on_drag_move = move |evt: PointerEvent| {
        let Some(active) = *drag.peek() else { return };
        let point = evt.client_coordinates();
        let dx = point.x - active.pointer_start.0;
        let dy = point.y - active.pointer_start.1;

        let next = match active.mode {
            DragMode::Move => {
                let start = active.rect_start;
                let (x, y) = clamp_drag(start.x + dx, start.y + dy, start, viewport_size());
                Rect { x, y, ..start }
            }
            DragMode::Resize(corner) => resize_rect(corner, active.rect_start, dx, dy),
        };
        rect.set(next);
    };

    let end_drag = move |()| drag.set(None);

    let current = rect();
    let overlay_cursor = match drag().map(|d| d.mode) {
        Some(DragMode::Move) => Some("grabbing".to_string()),
        Some(DragMode::Resize(corner)) => Some(corner.cursor().to_string()),
        None => None,
    };

    rsx! {
        section {
            class: "window glass",
            style: "left: {current.x}px; top: {current.y}px; width: {current.w}px; height: {current.h}px;",

            header {
                class: "window-titlebar",
                onpointerdown: begin_move,

                div {
                    class: "window-options",
                    // Interactive controls in the handle must not start a drag.
                    button {
                        class: "window-option window-option-close",
                        onpointerdown: move |evt| evt.stop_propagation(),
                        onclick: move |_| onclose.call(()),
                    }
                    button {
                        class: "window-option window-option-minimize",
                        onpointerdown: move |evt| evt.stop_propagation(),
                    }
                    button {
                        class: "window-option window-option-maximize",
                        onpointerdown: move |evt| evt.stop_propagation(),
                    }
                }
                div { class: "window-title", "{title}" }
            }

            div {
                class: "window-content",
                {children}
            }

            for corner in Corner::ALL {
                {
                    let class = corner.class();
                    let cursor = corner.cursor();
                    rsx! {
                        div {
                            key: "{class}",
                            class,
                            style: "cursor: {cursor};",
                            onpointerdown: move |evt| begin_resize(corner, evt),
                        }
                    }
                }
            }

            if let Some(cursor) = overlay_cursor {
                DragOverlay {
                    cursor,
                    onmove: on_drag_move,
                    onrelease: end_drag,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: (f64, f64) = (1280.0, 800.0);
    const RECT: Rect = Rect {
        x: 100.0,
        y: 100.0,
        w: 600.0,
        h: 400.0,
    };

    #[test]
    fn test_clamp_keeps_minimum_visible_on_the_left() {
        let (x, _) = clamp_drag(-1000.0, 100.0, RECT, VIEWPORT);
        assert_eq!(x, -(RECT.w - MIN_VISIBLE));
    }

    #[test]
    fn test_clamp_keeps_minimum_visible_on_the_right() {
        let (x, _) = clamp_drag(5000.0, 100.0, RECT, VIEWPORT);
        assert_eq!(x, VIEWPORT.0 - MIN_VISIBLE);
    }

    #[test]
    fn test_clamp_pins_title_bar_inside_vertically() {
        let (_, top) = clamp_drag(100.0, -50.0, RECT, VIEWPORT);
        assert_eq!(top, 0.0);

        let (_, bottom) = clamp_drag(100.0, 5000.0, RECT, VIEWPORT);
        assert_eq!(bottom, VIEWPORT.1 - MIN_VISIBLE);
    }

    #[test]
    fn test_clamp_leaves_interior_positions_alone() {
        assert_eq!(clamp_drag(200.0, 150.0, RECT, VIEWPORT), (200.0, 150.0));
    }

    #[test]
    fn test_resize_se_grows_freely() {
        let r = resize_rect(Corner::Se, RECT, 40.0, 25.0);
        assert_eq!(r, Rect { x: 100.0, y: 100.0, w: 640.0, h: 425.0 });
    }

    #[test]
    fn test_resize_nw_keeps_opposite_corner_fixed() {
        let r = resize_rect(Corner::Nw, RECT, -30.0, -20.0);
        assert_eq!(r.x + r.w, RECT.x + RECT.w);
        assert_eq!(r.y + r.h, RECT.y + RECT.h);
        assert_eq!(r.w, 630.0);
        assert_eq!(r.h, 420.0);
    }

    #[test]
    fn test_resize_clamps_to_minimum_size() {
        let r = resize_rect(Corner::Se, RECT, -1000.0, -1000.0);
        assert_eq!(r.w, MIN_WIDTH);
        assert_eq!(r.h, MIN_HEIGHT);

        let r = resize_rect(Corner::Nw, RECT, 1000.0, 1000.0);
        assert_eq!(r.w, MIN_WIDTH);
        assert_eq!(r.h, MIN_HEIGHT);
        assert_eq!(r.x + r.w, RECT.x + RECT.w);
        assert_eq!(r.y + r.h, RECT.y + RECT.h);
    }

    #[test]
    fn test_resize_ne_adjusts_top_edge_only() {
        let r = resize_rect(Corner::Ne, RECT, 10.0, -10.0);
        assert_eq!(r.x, RECT.x);
        assert_eq!(r.y + r.h, RECT.y + RECT.h);
        assert_eq!(r.w, 610.0);
        assert_eq!(r.h, 410.0);
    }
}
