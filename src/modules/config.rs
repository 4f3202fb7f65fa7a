use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

/// Display preferences, stored as JSON in the user's config directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JournalConfig {
    /// strftime pattern for the trend chart's day axis, e.g. "Wed".
    #[serde(default = "default_day_label_format")]
    pub day_label_format: String,
    /// strftime pattern for the log screen's date headers, e.g. "Dec 18, 2024".
    #[serde(default = "default_section_label_format")]
    pub section_label_format: String,
    /// Seed the sample week on first launch so the charts are not empty.
    #[serde(default = "default_seed_demo_week")]
    pub seed_demo_week: bool,
}

fn default_day_label_format() -> String {
    "%a".to_string()
}

fn default_section_label_format() -> String {
    "%b %-d, %Y".to_string()
}

fn default_seed_demo_week() -> bool {
    true
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            day_label_format: default_day_label_format(),
            section_label_format: default_section_label_format(),
            seed_demo_week: default_seed_demo_week(),
        }
    }
}

impl JournalConfig {
    pub fn path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("could not find config directory")?;
        Ok(dir.join("moodmate").join("config.json"))
    }

    /// A missing file yields the defaults, matching first launch.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = serde_json::from_str(&raw).context("failed to parse config")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, raw)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("saved journal config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: JournalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, JournalConfig::default());
        assert_eq!(config.day_label_format, "%a");
        assert!(config.seed_demo_week);
    }

    #[test]
    fn round_trips_through_json() {
        let config = JournalConfig {
            day_label_format: "%A".to_string(),
            section_label_format: "%Y-%m-%d".to_string(),
            seed_demo_week: false,
        };
        let raw = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<JournalConfig>(&raw).unwrap(), config);
    }
}
