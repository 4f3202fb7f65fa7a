use chrono::{DateTime, Days, Local, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::modules::entry::MoodEntry;
use crate::modules::mood::Mood;

/// Number of days covered by the trend chart, ending on the reference day.
pub const TREND_DAYS: usize = 7;

/// The frequency chart is a half circle: slices start at 180 degrees and
/// sweep clockwise to 360.
pub const PIE_START_DEG: f64 = 180.0;
pub const PIE_SPAN_DEG: f64 = 180.0;

const DAY_LABEL_FORMAT: &str = "%a";
const SECTION_LABEL_FORMAT: &str = "%b %-d, %Y";

/// Local calendar day an entry belongs to. Shared by the weekly trend and
/// the log-screen grouping so both bucket identically.
pub fn local_day(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

/// One day of the weekly trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub label: String,
    /// Last mood logged that day. `None` means nothing was logged, which is
    /// distinct from `Some(Mood::Sad)` and rendered as a gap in the line.
    pub mood: Option<Mood>,
}

impl TrendPoint {
    /// Scale ordinal for chart positioning, when the day has a mood.
    pub fn level(&self) -> Option<usize> {
        self.mood.map(Mood::index)
    }
}

/// Mood counts across the whole log, always enumerating all five levels in
/// scale order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyBreakdown {
    pub counts: IndexMap<Mood, usize>,
    pub total: usize,
}

impl FrequencyBreakdown {
    pub fn count(&self, mood: Mood) -> usize {
        self.counts.get(&mood).copied().unwrap_or(0)
    }
}

/// Angular span of one mood level on the half-circle chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub mood: Mood,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Slice {
    pub fn span_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }
}

/// Entries of one calendar day, for the log screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySection {
    pub date: NaiveDate,
    pub label: String,
    pub entries: Vec<MoodEntry>,
}

/// Mood per day for the 7 days ending on `today`, oldest first.
pub fn weekly_trend(entries: &[MoodEntry], today: DateTime<Utc>) -> Vec<TrendPoint> {
    weekly_trend_with_format(entries, today, DAY_LABEL_FORMAT)
}

/// Same as [`weekly_trend`] with a configurable day-label format.
///
/// Each point carries the last entry logged on that local calendar day; when
/// several entries share a day the one appended last wins, whatever its
/// mood. Days with no entries still produce a point so the series is always
/// exactly [`TREND_DAYS`] long.
pub fn weekly_trend_with_format(
    entries: &[MoodEntry],
    today: DateTime<Utc>,
    label_format: &str,
) -> Vec<TrendPoint> {
    let end = local_day(today);

    let mut points = Vec::with_capacity(TREND_DAYS);
    for offset in (0..TREND_DAYS as u64).rev() {
        let date = end - Days::new(offset);
        let mood = entries
            .iter()
            .filter(|entry| local_day(entry.timestamp) == date)
            .last()
            .map(|entry| entry.mood);

        points.push(TrendPoint {
            date,
            label: date.format(label_format).to_string(),
            mood,
        });
    }
    points
}

/// Counts every entry ever logged, grouped by mood level. Zero-count levels
/// are kept so the legend always shows the full scale.
pub fn mood_frequency(entries: &[MoodEntry]) -> FrequencyBreakdown {
    let mut counts: IndexMap<Mood, usize> = Mood::ALL.iter().map(|&mood| (mood, 0)).collect();
    for entry in entries {
        *counts.entry(entry.mood).or_insert(0) += 1;
    }

    FrequencyBreakdown {
        counts,
        total: entries.len(),
    }
}

/// Half-circle slices for the frequency chart, accumulating from 180
/// degrees in scale order. Levels with no entries produce no slice, so an
/// empty log yields an empty list.
pub fn pie_slices(breakdown: &FrequencyBreakdown) -> Vec<Slice> {
    let total = breakdown.total.max(1) as f64;

    let mut cumulative = PIE_START_DEG;
    let mut slices = Vec::new();
    for mood in Mood::ALL {
        let count = breakdown.count(mood);
        if count == 0 {
            continue;
        }
        let span = count as f64 / total * PIE_SPAN_DEG;
        slices.push(Slice {
            mood,
            start_deg: cumulative,
            end_deg: cumulative + span,
        });
        cumulative += span;
    }
    slices
}

/// Log-screen grouping: entries bucketed by local calendar day, newest day
/// first, insertion order preserved within a day.
pub fn daily_sections(entries: &[MoodEntry]) -> Vec<DaySection> {
    daily_sections_with_format(entries, SECTION_LABEL_FORMAT)
}

pub fn daily_sections_with_format(entries: &[MoodEntry], label_format: &str) -> Vec<DaySection> {
    let mut grouped: IndexMap<NaiveDate, Vec<MoodEntry>> = IndexMap::new();
    for entry in entries {
        grouped
            .entry(local_day(entry.timestamp))
            .or_default()
            .push(entry.clone());
    }

    let mut sections: Vec<DaySection> = grouped
        .into_iter()
        .map(|(date, entries)| DaySection {
            date,
            label: date.format(label_format).to_string(),
            entries,
        })
        .collect();
    sections.sort_by(|a, b| b.date.cmp(&a.date));
    sections
}
