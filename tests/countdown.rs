use chrono::NaiveDate;
use days_overlay::countdown::{
    default_items, end_of_year, load_items, load_or_seed, save_items, CountdownItem,
};
use std::fs;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn days_remaining_counts_calendar_days() {
    let item = CountdownItem {
        title: "launch".into(),
        target_date: date(2026, 12, 31),
    };
    assert_eq!(item.days_remaining(date(2026, 12, 30)), 1);
    assert_eq!(item.days_remaining(date(2026, 12, 31)), 0);
    assert_eq!(item.days_remaining(date(2027, 1, 2)), -2);
}

#[test]
fn end_of_year_is_december_31() {
    assert_eq!(end_of_year(date(2026, 8, 30)), date(2026, 12, 31));
    assert_eq!(end_of_year(date(2026, 1, 1)), date(2026, 12, 31));
}

#[test]
fn default_item_targets_end_of_year() {
    let items = default_items(date(2026, 8, 30), false);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "2026 Year End");
    assert_eq!(items[0].target_date, date(2026, 12, 31));

    let zh = default_items(date(2026, 8, 30), true);
    assert_eq!(zh[0].title, "2026年结束还有");
}

#[test]
fn missing_file_seeds_default_and_writes_it() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");

    let items = load_or_seed(&path, date(2026, 8, 30), false);
    assert_eq!(items, default_items(date(2026, 8, 30), false));
    assert!(path.exists(), "data file was not seeded");

    let reloaded = load_items(&path).unwrap();
    assert_eq!(reloaded, items);
}

#[test]
fn corrupt_file_falls_back_without_overwriting() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "{not json").unwrap();

    let items = load_or_seed(&path, date(2026, 8, 30), false);
    assert_eq!(items, default_items(date(2026, 8, 30), false));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{not json");
}

#[test]
fn round_trip_preserves_unicode_titles() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    let items = vec![
        CountdownItem {
            title: "春节".into(),
            target_date: date(2027, 2, 5),
        },
        CountdownItem {
            title: "ship it".into(),
            target_date: date(2026, 9, 15),
        },
    ];

    save_items(&path, &items).unwrap();
    let raw = fs::read_to_string(&path).unwrap();
    // Unicode stays readable in the file rather than \u-escaped.
    assert!(raw.contains("春节"));
    assert!(raw.contains("2027-02-05"));

    assert_eq!(load_items(&path).unwrap(), items);
}
