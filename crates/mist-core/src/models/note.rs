//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Maximum length of a derived title, in characters
const TITLE_MAX_LEN: usize = 50;

/// A unique identifier for a note, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A markdown note with lock/pin metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Markdown content
    pub content: String,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
    /// Last update timestamp (Unix ms)
    pub updated_at: i64,
    /// Locked notes cannot be edited or deleted through the UI
    #[serde(default)]
    pub locked: bool,
    /// Pinned notes sort before all unpinned notes
    #[serde(default)]
    pub pinned: bool,
}

impl Note {
    /// Create a new unlocked note with the given content
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: NoteId::new(),
            content: content.into(),
            created_at: now,
            updated_at: now,
            locked: false,
            pinned: false,
        }
    }

    /// The locked and pinned welcome note seeded into an empty store
    #[must_use]
    pub fn seed() -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: NoteId::new(),
            content: "# Welcome to Notes\n\nThis is a dynamic markdown note-taking app.\n\n## Features\n- **Bold** and *italic* text\n- [Links](https://example.com)\n- Images\n- Headers (H1-H6)\n\nStart editing to see the live preview!".to_string(),
            created_at: now,
            updated_at: now,
            locked: true,
            pinned: true,
        }
    }

    /// Title derived from the current content; never stored
    #[must_use]
    pub fn title(&self) -> String {
        derive_title(&self.content)
    }
}

/// Derive a note title from its markdown content.
///
/// Takes the first line, strips a leading heading marker (a run of `#`
/// followed by one space), and trims whitespace. Falls back to the raw
/// content when the first line is empty, and to `"Untitled Note"` when
/// everything else is. Titles are capped at 50 characters.
///
/// # Examples
///
/// ```
/// use mist_core::derive_title;
///
/// assert_eq!(derive_title("# Hello\nBody"), "Hello");
/// assert_eq!(derive_title(""), "Untitled Note");
/// ```
#[must_use]
pub fn derive_title(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or("");
    let mut title = strip_heading_marker(first_line).trim().to_string();

    if title.is_empty() {
        title = content
            .chars()
            .take(TITLE_MAX_LEN)
            .collect::<String>()
            .trim()
            .to_string();
    }

    let capped: String = title.chars().take(TITLE_MAX_LEN).collect();
    let capped = capped.trim_end().to_string();

    if capped.is_empty() {
        "Untitled Note".to_string()
    } else {
        capped
    }
}

/// Strip a leading `#`-run heading marker and the single space after it.
fn strip_heading_marker(line: &str) -> &str {
    let hashes = line.len() - line.trim_start_matches('#').len();
    if hashes == 0 {
        return line;
    }
    match line[hashes..].strip_prefix(' ') {
        Some(rest) => rest,
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_id_unique() {
        let id1 = NoteId::new();
        let id2 = NoteId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_note_id_parse() {
        let id = NoteId::new();
        let parsed: NoteId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_note_new_is_unlocked() {
        let note = Note::new("Hello world");
        assert_eq!(note.content, "Hello world");
        assert!(!note.locked);
        assert!(!note.pinned);
        assert!(note.created_at > 0);
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn test_seed_note_is_locked_and_pinned() {
        let seed = Note::seed();
        assert!(seed.locked);
        assert!(seed.pinned);
        assert_eq!(seed.title(), "Welcome to Notes");
    }

    #[test]
    fn test_derive_title_strips_heading_marker() {
        assert_eq!(derive_title("# Hello\nBody"), "Hello");
        assert_eq!(derive_title("### Deep heading"), "Deep heading");
    }

    #[test]
    fn test_derive_title_keeps_hashes_without_space() {
        assert_eq!(derive_title("#hashtag"), "#hashtag");
    }

    #[test]
    fn test_derive_title_empty_content() {
        assert_eq!(derive_title(""), "Untitled Note");
        assert_eq!(derive_title("   \n\n"), "Untitled Note");
    }

    #[test]
    fn test_derive_title_falls_back_to_raw_prefix() {
        let long = "x".repeat(80);
        assert_eq!(derive_title(&long), "x".repeat(50));
    }

    #[test]
    fn test_derive_title_blank_first_line() {
        assert_eq!(derive_title("\nSecond line"), "Second line");
    }

    #[test]
    fn test_derive_title_never_empty() {
        for content in ["", "#", "# ", "\n", "  # \n  "] {
            assert!(!derive_title(content).is_empty(), "content {content:?}");
        }
    }
}
