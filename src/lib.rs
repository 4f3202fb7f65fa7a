// Module declarations
pub mod modules;

pub use modules::{
    analytics::{
        daily_sections, local_day, mood_frequency, pie_slices, weekly_trend, DaySection,
        FrequencyBreakdown, Slice, TrendPoint, TREND_DAYS,
    },
    capture::{CaptureForm, PhotoSource},
    config::JournalConfig,
    entry::{MoodEntry, PhotoRef},
    mood::Mood,
    store::MoodStore,
    view_state::{Tab, ViewState},
};
