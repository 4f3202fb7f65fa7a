use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::mood::Mood;

/// Opaque handle to an attached photo. The core never loads or decodes the
/// image; the shell resolves the reference when it renders the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRef(String);

impl PhotoRef {
    pub fn new(reference: impl Into<String>) -> Self {
        PhotoRef(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single logged mood. Entries are immutable once created; the store only
/// ever appends them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub mood: Mood,
    pub note: String,
    pub photo: Option<PhotoRef>,
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    /// Entry stamped with the current time, as produced by the picker sheet.
    pub fn new(mood: Mood, note: impl Into<String>, photo: Option<PhotoRef>) -> Self {
        Self::at(mood, note, photo, Utc::now())
    }

    /// Entry with an explicit timestamp, used by demo seeding and tests.
    pub fn at(
        mood: Mood,
        note: impl Into<String>,
        photo: Option<PhotoRef>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        MoodEntry {
            id: Uuid::new_v4(),
            mood,
            note: note.into(),
            photo,
            timestamp,
        }
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_get_unique_ids() {
        let a = MoodEntry::new(Mood::Good, "", None);
        let b = MoodEntry::new(Mood::Good, "", None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn photo_is_optional() {
        let bare = MoodEntry::new(Mood::Neutral, "just an okay day", None);
        assert!(!bare.has_photo());

        let snapped = MoodEntry::new(
            Mood::Great,
            "",
            Some(PhotoRef::new("photos/2024-12-18-001")),
        );
        assert!(snapped.has_photo());
        assert_eq!(
            snapped.photo.as_ref().map(PhotoRef::as_str),
            Some("photos/2024-12-18-001")
        );
    }
}
