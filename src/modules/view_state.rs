use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};

use crate::modules::analytics::{self, DaySection, FrequencyBreakdown, Slice, TrendPoint};
use crate::modules::capture::CaptureForm;
use crate::modules::config::JournalConfig;
use crate::modules::store::MoodStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Mood,
    Insights,
}

impl Tab {
    pub fn title(self) -> &'static str {
        match self {
            Tab::Mood => "Mood Log",
            Tab::Insights => "Insights",
        }
    }
}

/// Explicit UI state for the single screen: which tab is showing, whether
/// the picker sheet is up, and the session's entry store. The shell mutates
/// this through the handlers below and renders from the read-only views;
/// everything is recomputed from the store on each render.
#[derive(Debug)]
pub struct ViewState {
    tab: Tab,
    picker: Option<CaptureForm>,
    store: MoodStore,
    config: JournalConfig,
}

impl ViewState {
    pub fn new(config: JournalConfig) -> Self {
        let store = if config.seed_demo_week {
            MoodStore::demo_week(Utc::now())
        } else {
            MoodStore::new()
        };

        ViewState {
            tab: Tab::Mood,
            picker: None,
            store,
            config,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn title(&self) -> &'static str {
        self.tab.title()
    }

    pub fn store(&self) -> &MoodStore {
        &self.store
    }

    pub fn picker(&self) -> Option<&CaptureForm> {
        self.picker.as_ref()
    }

    pub fn picker_mut(&mut self) -> Option<&mut CaptureForm> {
        self.picker.as_mut()
    }

    /// The "+" button only exists on the mood tab; elsewhere this is a no-op.
    pub fn open_picker(&mut self) -> bool {
        if self.tab != Tab::Mood || self.picker.is_some() {
            return false;
        }
        self.picker = Some(CaptureForm::new());
        true
    }

    /// Add was tapped on the sheet. Without a selected mood nothing happens
    /// and the sheet stays up; with one, the entry is appended and the sheet
    /// closes.
    pub fn submit_picker(&mut self) -> bool {
        if !self.picker.as_ref().is_some_and(CaptureForm::can_confirm) {
            return false;
        }
        if let Some(entry) = self.picker.take().and_then(CaptureForm::confirm) {
            info!("mood logged from picker: {:?}", entry.mood);
            self.store.append(entry);
            return true;
        }
        false
    }

    /// Cancel discards the sheet and leaves the log untouched.
    pub fn cancel_picker(&mut self) {
        self.picker = None;
    }

    // Render inputs for the two tabs.

    pub fn log_sections(&self) -> Vec<DaySection> {
        analytics::daily_sections_with_format(self.store.all(), &self.config.section_label_format)
    }

    pub fn trend(&self) -> Vec<TrendPoint> {
        analytics::weekly_trend_with_format(self.store.all(), Utc::now(), &self.config.day_label_format)
    }

    pub fn frequency(&self) -> FrequencyBreakdown {
        analytics::mood_frequency(self.store.all())
    }

    pub fn slices(&self) -> Vec<Slice> {
        analytics::pie_slices(&self.frequency())
    }

    /// Total shown under the half-circle chart.
    pub fn total_moods(&self) -> usize {
        self.store.len()
    }
}
