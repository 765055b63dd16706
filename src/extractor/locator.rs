use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// One candidate location for a field, expressed as a CSS selector.
///
/// Locators are plain values; a field declares them in priority order and the
/// extractor walks that order, stopping at the first one that matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locator(&'static str);

impl Locator {
    pub const fn css(selector: &'static str) -> Self {
        Self(selector)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// First element matched by this locator, in document order.
    pub fn first<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        let selector = parse_selector(self.0)?;
        document.select(&selector).next()
    }

    /// Every element matched by this locator, in document order.
    pub fn all<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        match parse_selector(self.0) {
            Some(selector) => document.select(&selector).collect(),
            None => Vec::new(),
        }
    }

    /// Elements named `tag` nested anywhere under this locator's matches.
    pub fn descendants<'a>(&self, document: &'a Html, tag: &str) -> Vec<ElementRef<'a>> {
        match parse_selector(&format!("{} {}", self.0, tag)) {
            Some(selector) => document.select(&selector).collect(),
            None => Vec::new(),
        }
    }
}

/// Walk `locators` in order and read the first element found.
///
/// Only the first locator that matches anything is consulted; if `read`
/// rejects that element the result is `None` and later locators are not
/// tried.
pub fn first_match<'a, T>(
    locators: &[Locator],
    document: &'a Html,
    read: impl FnOnce(&Locator, ElementRef<'a>) -> Option<T>,
) -> Option<T> {
    let (locator, element) = locators
        .iter()
        .find_map(|locator| locator.first(document).map(|element| (locator, element)))?;
    debug!(locator = locator.as_str(), "locator matched");
    read(locator, element)
}

/// Concatenated, trimmed text content of an element.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(selector) => Some(selector),
        Err(err) => {
            debug!(selector, error = %err, "skipping invalid selector");
            None
        }
    }
}
