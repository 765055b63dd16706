use chrono::NaiveDate;

const MAX_SLUG_CHARS: usize = 50;

/// Item URL path: the title reduced to `[a-z0-9]`, then `_YYYYMMDD`.
pub fn item_url(title: &str, date: NaiveDate) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_SLUG_CHARS)
        .collect();
    format!("{slug}_{}", date.format("%Y%m%d"))
}
