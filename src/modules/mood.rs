use serde::{Deserialize, Serialize};

/// Fixed five-level mood scale, most negative first. The scale order is
/// what the trend chart and the frequency chart are built on; the emoji is
/// only a display glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Sad,
    Down,
    Neutral,
    Good,
    Great,
}

impl Mood {
    /// All levels in scale order, saddest to happiest.
    pub const ALL: [Mood; 5] = [Mood::Sad, Mood::Down, Mood::Neutral, Mood::Good, Mood::Great];

    /// Position on the scale, 0 (sad) through 4 (great).
    pub fn index(self) -> usize {
        match self {
            Mood::Sad => 0,
            Mood::Down => 1,
            Mood::Neutral => 2,
            Mood::Good => 3,
            Mood::Great => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Mood> {
        Mood::ALL.get(index).copied()
    }

    /// Emoji shown on the picker row, chart axis, and legend.
    pub fn glyph(self) -> &'static str {
        match self {
            Mood::Sad => "😢",
            Mood::Down => "☹️",
            Mood::Neutral => "😐",
            Mood::Good => "🙂",
            Mood::Great => "😀",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Sad => "sad",
            Mood::Down => "down",
            Mood::Neutral => "neutral",
            Mood::Good => "good",
            Mood::Great => "great",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_order_matches_indices() {
        for (i, mood) in Mood::ALL.into_iter().enumerate() {
            assert_eq!(mood.index(), i);
            assert_eq!(Mood::from_index(i), Some(mood));
        }
        assert_eq!(Mood::from_index(5), None);
    }

    #[test]
    fn scale_is_ordered_saddest_first() {
        assert!(Mood::Sad < Mood::Down);
        assert!(Mood::Down < Mood::Neutral);
        assert!(Mood::Neutral < Mood::Good);
        assert!(Mood::Good < Mood::Great);
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&Mood::Great).unwrap(), "\"great\"");
        assert_eq!(serde_json::from_str::<Mood>("\"sad\"").unwrap(), Mood::Sad);
    }
}
