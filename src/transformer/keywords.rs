use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::transformer::locale::Phrases;

const TITLE_TOKENS: usize = 5;
pub const MAX_KEYWORDS: usize = 10;

static NON_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W").expect("Failed to compile non-word regex"));

/// Search keywords: leading title words, the brand, then the fixed tags.
pub fn derive_keywords(title: &str, brand: &str, phrases: &Phrases) -> String {
    let mut keywords: Vec<String> = title
        .split_whitespace()
        .take(TITLE_TOKENS)
        .map(|word| NON_WORD_REGEX.replace_all(word, "").into_owned())
        .filter(|word| word.chars().count() > 1)
        .collect();

    if !brand.is_empty() {
        keywords.push(brand.to_string());
    }
    keywords.extend(phrases.keyword_tags.iter().map(|tag| tag.to_string()));

    let mut seen = HashSet::new();
    keywords.retain(|keyword| seen.insert(keyword.clone()));
    keywords.truncate(MAX_KEYWORDS);

    keywords.join(",")
}
