const DAY_NAMES: [(&str, &str); 7] = [
    ("Monday", "월요일"),
    ("Tuesday", "화요일"),
    ("Wednesday", "수요일"),
    ("Thursday", "목요일"),
    ("Friday", "금요일"),
    ("Saturday", "토요일"),
    ("Sunday", "일요일"),
];

/// Localizes an English weekday name; unknown values pass through unchanged.
pub fn localize_day(name: &str) -> String {
    DAY_NAMES
        .iter()
        .find(|(english, _)| *english == name)
        .map(|(_, korean)| (*korean).to_string())
        .unwrap_or_else(|| name.to_string())
}
