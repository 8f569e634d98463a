//! Data models

mod note;

pub use note::{derive_title, Note, NoteId};
