/// Category used when no trigger matches.
pub const DEFAULT_CATEGORY_ID: &str = "100000";

/// Target categories and their title triggers, in match priority order.
///
/// Triggers are lower case; titles are lower-cased before matching.
pub const CATEGORY_TRIGGERS: &[(&str, &[&str])] = &[
    ("100804", &["health", "supplement", "健康", "サプリ"]),
    ("100026", &["electronic", "pc", "電子"]),
    ("100227", &["kitchen", "appliance", "キッチン", "家電"]),
    ("100938", &["beauty", "cosmetic", "美容", "コスメ"]),
    ("101070", &["fashion", "clothing", "ファッション", "服"]),
];

pub fn suggest_category(title: &str) -> &'static str {
    suggest_category_from(CATEGORY_TRIGGERS, title).unwrap_or(DEFAULT_CATEGORY_ID)
}

/// First category in `table` with a trigger contained in the title.
pub fn suggest_category_from<'a>(table: &[(&'a str, &[&str])], title: &str) -> Option<&'a str> {
    let title = title.to_lowercase();
    table
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|trigger| title.contains(*trigger)))
        .map(|(id, _)| *id)
}
