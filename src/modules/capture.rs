use log::debug;
use serde::{Deserialize, Serialize};

use crate::modules::entry::{MoodEntry, PhotoRef};
use crate::modules::mood::Mood;

/// Where an attached photo came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoSource {
    Camera,
    Library,
}

/// In-progress state of the "How are you feeling today?" sheet.
///
/// A mood is mandatory for confirmation; the note and photo stay optional.
/// Dropping the form without confirming is cancellation and leaves the log
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureForm {
    mood: Option<Mood>,
    note: String,
    photo: Option<PhotoRef>,
}

impl CaptureForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tapping the already-selected mood deselects it.
    pub fn toggle_mood(&mut self, mood: Mood) {
        self.mood = if self.mood == Some(mood) { None } else { Some(mood) };
    }

    pub fn selected_mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Replaces any previously attached photo.
    pub fn attach_photo(&mut self, source: PhotoSource, photo: PhotoRef) {
        debug!("photo attached from {:?}", source);
        self.photo = Some(photo);
    }

    pub fn clear_photo(&mut self) {
        self.photo = None;
    }

    pub fn photo(&self) -> Option<&PhotoRef> {
        self.photo.as_ref()
    }

    pub fn can_confirm(&self) -> bool {
        self.mood.is_some()
    }

    /// Consumes the form and produces the entry, stamped now. `None` means
    /// no mood was picked and nothing gets logged.
    pub fn confirm(self) -> Option<MoodEntry> {
        let mood = self.mood?;
        Some(MoodEntry::new(mood, self.note, self.photo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_requires_a_mood() {
        let mut form = CaptureForm::new();
        form.set_note("wrote a note but picked nothing");
        assert!(!form.can_confirm());
        assert!(form.confirm().is_none());
    }

    #[test]
    fn retapping_the_selected_mood_deselects_it() {
        let mut form = CaptureForm::new();
        form.toggle_mood(Mood::Good);
        assert_eq!(form.selected_mood(), Some(Mood::Good));

        form.toggle_mood(Mood::Good);
        assert_eq!(form.selected_mood(), None);

        form.toggle_mood(Mood::Good);
        form.toggle_mood(Mood::Sad);
        assert_eq!(form.selected_mood(), Some(Mood::Sad));
    }

    #[test]
    fn confirm_carries_note_and_photo() {
        let mut form = CaptureForm::new();
        form.toggle_mood(Mood::Great);
        form.set_note("Back to happy!");
        form.attach_photo(PhotoSource::Camera, PhotoRef::new("photos/001"));

        let entry = form.confirm().expect("mood was selected");
        assert_eq!(entry.mood, Mood::Great);
        assert_eq!(entry.note, "Back to happy!");
        assert!(entry.has_photo());
    }

    #[test]
    fn photo_can_be_replaced_or_removed() {
        let mut form = CaptureForm::new();
        form.attach_photo(PhotoSource::Library, PhotoRef::new("photos/001"));
        form.attach_photo(PhotoSource::Camera, PhotoRef::new("photos/002"));
        assert_eq!(form.photo().map(PhotoRef::as_str), Some("photos/002"));

        form.clear_photo();
        assert!(form.photo().is_none());
    }
}
