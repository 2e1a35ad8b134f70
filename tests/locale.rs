use days_overlay::locale::{is_chinese_ui, unit_label};

#[test]
fn english_is_singular_only_for_one_day() {
    assert_eq!(unit_label(1, false), "DAY");
    assert_eq!(unit_label(0, false), "DAYS");
    assert_eq!(unit_label(2, false), "DAYS");
    assert_eq!(unit_label(-1, false), "DAYS");
}

#[test]
fn chinese_label_ignores_count() {
    assert_eq!(unit_label(1, true), "天");
    assert_eq!(unit_label(365, true), "天");
}

#[test]
fn explicit_override_wins() {
    assert!(is_chinese_ui(Some("zh")));
    assert!(is_chinese_ui(Some("zh-CN")));
    assert!(is_chinese_ui(Some("ZH-TW")));
    assert!(!is_chinese_ui(Some("en-US")));
    assert!(!is_chinese_ui(Some("ja")));
}
