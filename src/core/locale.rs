pub const DEFAULT_LANGUAGE: &str = "en";

/// Maps a culture name such as `zh-TW` to one of the supported language codes.
/// Anything not listed falls back to English.
pub fn language_code(culture: &str) -> &'static str {
    match culture {
        "zh-TW" | "zh-HK" | "zh-MO" | "zh-CHT" | "zh-Hant" | "zh-Hant-TW" | "zh-Hant-MO"
        | "zh-Hant-HK" => "zh-Hant",
        "zh-CN" | "zh-SG" | "zh-CHS" | "zh-Hans" | "zh-Hans-CN" | "zh-Hans-MO" | "zh-Hans-HK"
        | "zh-Hans-SG" => "zh-Hans",
        "ja" => "ja",
        _ => DEFAULT_LANGUAGE,
    }
}

/// The current user's culture name, e.g. `ja-JP` or `zh-Hant-TW`.
pub fn system_culture() -> String {
    sys_locale::get_locale()
        .or_else(|| std::env::var("LC_ALL").ok())
        .or_else(|| std::env::var("LANG").ok())
        .map(|raw| normalize_culture(&raw))
        .unwrap_or_default()
}

/// POSIX locales look like `ja_JP.UTF-8`; the mapping table wants `ja-JP`.
fn normalize_culture(raw: &str) -> String {
    raw.split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-")
}
