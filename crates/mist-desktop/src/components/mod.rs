//! UI Components
//!
//! Window chrome, the control center, the taskbar, the slider widget, the
//! notification toast, and the notes application.

mod control_center;
mod notes;
mod notification;
mod slider;
mod taskbar;
mod window;

pub use control_center::{use_control_center, ControlCenter, ControlCenterButton};
pub use notes::NotesWindow;
pub use notification::NotificationHost;
pub use slider::Slider;
pub use taskbar::Taskbar;
pub use window::{DragOverlay, Window};
