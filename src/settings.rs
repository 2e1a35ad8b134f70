use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional log file. If `None`, logs go to stderr only.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Path of the countdown data file. Defaults to `data.json` next to the
    /// working directory.
    #[serde(default)]
    pub data_path: Option<String>,
    /// Language override, e.g. "zh". If `None`, the OS UI language decides.
    #[serde(default)]
    pub language: Option<String>,
    /// Interval in minutes between day-count refreshes, so the display rolls
    /// over shortly after midnight.
    #[serde(default = "default_refresh_minutes")]
    pub refresh_minutes: u64,
    /// Fraction of the working-area width kept free right of the window.
    #[serde(default = "default_right_margin")]
    pub right_margin_pct: f32,
    /// Fraction of the working-area height kept free below the window.
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin_pct: f32,
}

fn default_refresh_minutes() -> u64 {
    30
}

fn default_right_margin() -> f32 {
    0.08
}

fn default_bottom_margin() -> f32 {
    0.20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            data_path: None,
            language: None,
            refresh_minutes: default_refresh_minutes(),
            right_margin_pct: default_right_margin(),
            bottom_margin_pct: default_bottom_margin(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn data_path(&self) -> &str {
        self.data_path.as_deref().unwrap_or("data.json")
    }

    /// Day-count refresh interval, clamped to at least a minute and saturating
    /// instead of overflowing on absurd configured values.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_minutes.max(1).saturating_mul(60))
    }
}
