use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::modules::entry::MoodEntry;
use crate::modules::mood::Mood;

/// Append-only, insertion-ordered list of mood entries for the session.
/// There is no edit or delete; state lives for the process lifetime only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoodStore {
    entries: Vec<MoodEntry>,
}

impl MoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry to the end of the log. Insertion order doubles as
    /// chronological order because entries are stamped at append time.
    pub fn append(&mut self, entry: MoodEntry) {
        debug!("logged mood {:?} ({} entries total)", entry.mood, self.entries.len() + 1);
        self.entries.push(entry);
    }

    /// Read-only view of the log in insertion order.
    pub fn all(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store pre-filled with one entry per day over the trailing week, the
    /// sample logs the app ships so both charts render on first launch.
    pub fn demo_week(today: DateTime<Utc>) -> Self {
        let week: [(i64, Mood, &str); 7] = [
            (6, Mood::Great, "Feeling great!"),
            (5, Mood::Good, "Good day overall"),
            (4, Mood::Neutral, "Just an okay day"),
            (3, Mood::Down, "Feeling a bit down"),
            (2, Mood::Sad, "Rough day"),
            (1, Mood::Good, "Mood improving!"),
            (0, Mood::Great, "Back to happy!"),
        ];

        let mut store = MoodStore::new();
        for (days_back, mood, note) in week {
            store.append(MoodEntry::at(mood, note, None, today - Duration::days(days_back)));
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = MoodStore::new();
        assert!(store.is_empty());

        store.append(MoodEntry::new(Mood::Sad, "rough start", None));
        store.append(MoodEntry::new(Mood::Good, "picked up", None));

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].mood, Mood::Sad);
        assert_eq!(store.all()[1].mood, Mood::Good);
    }

    #[test]
    fn demo_week_spans_seven_days() {
        let today = Utc::now();
        let store = MoodStore::demo_week(today);

        assert_eq!(store.len(), 7);
        // Oldest entry first, ending on today.
        assert_eq!(store.all()[0].mood, Mood::Great);
        assert_eq!(store.all()[0].timestamp, today - Duration::days(6));
        assert_eq!(store.all()[6].timestamp, today);
    }
}
