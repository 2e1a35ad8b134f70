/// Unit label shown next to the day count. Chinese uses "天" regardless of
/// count; English is singular only for exactly one day.
pub fn unit_label(days: i64, chinese: bool) -> &'static str {
    if chinese {
        "天"
    } else if days == 1 {
        "DAY"
    } else {
        "DAYS"
    }
}

/// Decide whether the UI runs in Chinese. An explicit settings override wins
/// over OS detection.
pub fn is_chinese_ui(override_lang: Option<&str>) -> bool {
    if let Some(lang) = override_lang {
        return lang.to_ascii_lowercase().starts_with("zh");
    }
    detect_chinese()
}

#[cfg(target_os = "windows")]
fn detect_chinese() -> bool {
    use windows::Win32::Globalization::GetUserDefaultUILanguage;
    // Primary language id lives in the low 10 bits; 0x04 is Chinese.
    let langid = unsafe { GetUserDefaultUILanguage() };
    (langid & 0x3ff) == 0x04
}

#[cfg(not(target_os = "windows"))]
fn detect_chinese() -> bool {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LANG"))
        .map(|v| v.to_ascii_lowercase().starts_with("zh"))
        .unwrap_or(false)
}
