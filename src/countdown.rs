use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CountdownItem {
    pub title: String,
    pub target_date: NaiveDate,
}

impl CountdownItem {
    /// Calendar days from `today` to the target date. Negative once the date
    /// has passed.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.target_date - today).num_days()
    }
}

/// December 31 of the current year.
pub fn end_of_year(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year(), 12, 31).expect("Dec 31 is a valid date")
}

/// The single item seeded on first run.
pub fn default_items(today: NaiveDate, chinese: bool) -> Vec<CountdownItem> {
    let title = if chinese {
        format!("{}年结束还有", today.year())
    } else {
        format!("{} Year End", today.year())
    };
    vec![CountdownItem {
        title,
        target_date: end_of_year(today),
    }]
}

pub fn load_items(path: &Path) -> anyhow::Result<Vec<CountdownItem>> {
    let content = std::fs::read_to_string(path)?;
    let items: Vec<CountdownItem> = serde_json::from_str(&content)?;
    Ok(items)
}

pub fn save_items(path: &Path, items: &[CountdownItem]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load the countdown list, seeding and saving the default item when the data
/// file does not exist yet. A corrupt file falls back to the default list
/// without overwriting the file, so the user can still recover it by hand.
pub fn load_or_seed(path: &Path, today: NaiveDate, chinese: bool) -> Vec<CountdownItem> {
    if !path.exists() {
        let items = default_items(today, chinese);
        if let Err(err) = save_items(path, &items) {
            tracing::error!("failed to write initial countdown file: {err}");
        }
        return items;
    }
    match load_items(path) {
        Ok(items) => items,
        Err(err) => {
            tracing::error!("failed to load countdown file, using defaults: {err}");
            default_items(today, chinese)
        }
    }
}
