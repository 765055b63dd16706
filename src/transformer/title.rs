use crate::transformer::locale::Phrases;

/// Hard limit on listing titles, in characters.
pub const MAX_TITLE_CHARS: usize = 128;
/// Longer titles are cut to this many characters before decoration.
pub const TRUNCATE_AT_CHARS: usize = 120;
const ELLIPSIS: &str = "...";
/// A space and the two brackets around an appended keyword.
const DECORATION_CHARS: usize = 3;

/// Shorten an over-long title and append at most one promotional keyword.
pub fn optimize_title(title: &str, phrases: &Phrases) -> String {
    let mut optimized = if title.chars().count() > TRUNCATE_AT_CHARS {
        let mut cut: String = title.chars().take(TRUNCATE_AT_CHARS).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        title.to_string()
    };

    let length = optimized.chars().count();

    let keyword = phrases.title_keywords.iter().find(|keyword| {
        !optimized.contains(**keyword)
            && length + keyword.chars().count() + DECORATION_CHARS <= MAX_TITLE_CHARS
    });
    if let Some(keyword) = keyword {
        optimized = format!("{optimized} 【{keyword}】");
    }

    optimized
}
