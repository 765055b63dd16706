use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;
use tracing::debug;

use crate::extractor::locator::{element_text, first_match};
use crate::extractor::model::{MAX_DESCRIPTION_ITEMS, MAX_IMAGES};
use crate::extractor::profile::SourceProfile;
use crate::text::ascii_digits;

/// Bullets must be longer than this (in characters) to be kept.
const MIN_BULLET_CHARS: usize = 10;

static PRICE_DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9][0-9,]*").expect("Failed to compile price regex"));

pub fn title(profile: &SourceProfile, document: &Html) -> String {
    first_match(profile.title, document, |_, el| Some(element_text(el))).unwrap_or_default()
}

pub fn price(profile: &SourceProfile, document: &Html) -> String {
    first_match(profile.price, document, |_, el| {
        let text = element_text(el);
        let digits = PRICE_DIGITS_REGEX
            .find(&ascii_digits(&text))
            .map(|m| m.as_str().to_string());
        if digits.is_none() {
            debug!(text = %text, "price element has no digits");
        }
        digits
    })
    .map(|digits| format!("{}{}", profile.currency_symbol, digits))
    .unwrap_or_default()
}

/// Feature bullets gathered across every description locator, in order,
/// until [`MAX_DESCRIPTION_ITEMS`] are found.
pub fn description(profile: &SourceProfile, document: &Html) -> String {
    let mut bullets: Vec<String> = Vec::new();

    'locators: for locator in profile.description {
        for item in locator.descendants(document, "li") {
            let text = element_text(item);
            if text.chars().count() <= MIN_BULLET_CHARS {
                continue;
            }
            bullets.push(text);
            if bullets.len() >= MAX_DESCRIPTION_ITEMS {
                break 'locators;
            }
        }
    }

    bullets.join("\n")
}

/// Product image URLs from the first locator that yields any.
pub fn images(profile: &SourceProfile, document: &Html) -> Vec<String> {
    let mut images = Vec::new();

    for locator in profile.images {
        for img in locator.all(document) {
            let attrs = img.value();
            let src = attrs
                .attr("src")
                .filter(|src| !src.is_empty())
                .or_else(|| attrs.attr("data-src"));

            if let Some(src) = src
                && src.contains(profile.image_domain_marker)
            {
                images.push(src.to_string());
            }
            if images.len() >= MAX_IMAGES {
                break;
            }
        }
        if !images.is_empty() {
            debug!(locator = locator.as_str(), count = images.len(), "images found");
            break;
        }
    }

    images
}

/// Brand name from the first brand locator that matches.
///
/// The matched text must carry one of the profile's brand markers. When it
/// does not, the brand stays empty and the remaining locators are not tried.
pub fn brand(profile: &SourceProfile, document: &Html) -> String {
    first_match(profile.brand, document, |locator, el| {
        let text = element_text(el);
        if !profile
            .brand_markers
            .iter()
            .any(|marker| text.contains(*marker))
        {
            debug!(locator = locator.as_str(), text = %text, "brand element has no label");
            return None;
        }

        let stripped = profile
            .brand_prefixes
            .iter()
            .fold(text, |acc, prefix| acc.replace(*prefix, ""));
        Some(stripped.trim().to_string())
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn test_title_uses_first_locator_even_if_later_ones_match() {
        let document = doc(
            r#"<h1 class="a-size-large">Fallback</h1><span id="productTitle">  Primary Title  </span>"#,
        );
        assert_eq!(title(&SourceProfile::amazon_jp(), &document), "Primary Title");
    }

    #[test]
    fn test_title_falls_back_to_heading() {
        let document = doc(r#"<h1 class="a-size-large">Heading title</h1>"#);
        assert_eq!(title(&SourceProfile::amazon_jp(), &document), "Heading title");
    }

    #[test]
    fn test_price_extracts_first_digit_run() {
        let document = doc(r#"<span class="a-price-whole">税込 1,980 円 (2点)</span>"#);
        assert_eq!(price(&SourceProfile::amazon_jp(), &document), "¥1,980");
    }

    #[test]
    fn test_price_accepts_full_width_digits() {
        let document = doc(r#"<span class="a-price-whole">１，９８０円</span>"#);
        assert_eq!(price(&SourceProfile::amazon_jp(), &document), "¥1,980");
    }

    #[test]
    fn test_price_without_digits_stays_empty() {
        let document = doc(
            r#"<span class="a-price-whole">現在お取り扱いできません</span><div id="price_inside_buybox">¥500</div>"#,
        );
        assert_eq!(price(&SourceProfile::amazon_jp(), &document), "");
    }

    #[test]
    fn test_description_skips_short_bullets() {
        let document = doc(
            r#"<div id="feature-bullets"><ul>
                <li>short</li>
                <li>This bullet is long enough</li>
                <li>  exactly10c  </li>
                <li>Another sufficiently long bullet</li>
            </ul></div>"#,
        );
        assert_eq!(
            description(&SourceProfile::amazon_jp(), &document),
            "This bullet is long enough\nAnother sufficiently long bullet"
        );
    }

    #[test]
    fn test_description_aggregates_across_locators_up_to_five() {
        let document = doc(
            r#"<div id="feature-bullets"><ul>
                <li>Feature bullet number one</li>
                <li>Feature bullet number two</li>
                <li>Feature bullet number three</li>
            </ul></div>
            <ul class="a-unordered-list a-vertical a-spacing-mini">
                <li>Secondary bullet number one</li>
                <li>Secondary bullet number two</li>
                <li>Secondary bullet number three</li>
            </ul>"#,
        );
        let text = description(&SourceProfile::amazon_jp(), &document);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Feature bullet number one");
        assert_eq!(lines[4], "Secondary bullet number two");
    }

    #[test]
    fn test_images_prefer_src_then_data_src() {
        let document = doc(
            r#"<img class="a-dynamic-image" src="https://m.media-amazon.com/images/I/1.jpg">
               <img class="a-dynamic-image" src="" data-src="https://m.media-amazon.com/images/I/2.jpg">
               <img class="a-dynamic-image" src="https://cdn.example.com/3.jpg">"#,
        );
        assert_eq!(
            images(&SourceProfile::amazon_jp(), &document),
            vec![
                "https://m.media-amazon.com/images/I/1.jpg",
                "https://m.media-amazon.com/images/I/2.jpg",
            ]
        );
    }

    #[test]
    fn test_images_stop_after_first_productive_locator() {
        let document = doc(
            r#"<img id="landingImage" src="https://m.media-amazon.com/landing.jpg">
               <div id="imgTagWrapperId"><img src="https://m.media-amazon.com/wrapped.jpg"></div>"#,
        );
        assert_eq!(
            images(&SourceProfile::amazon_jp(), &document),
            vec!["https://m.media-amazon.com/landing.jpg"]
        );
    }

    #[test]
    fn test_images_skip_locator_without_source_site_urls() {
        let document = doc(
            r#"<img id="landingImage" src="https://tracker.example.com/pixel.gif">
               <img class="a-dynamic-image" src="https://m.media-amazon.com/a.jpg">"#,
        );
        assert_eq!(
            images(&SourceProfile::amazon_jp(), &document),
            vec!["https://m.media-amazon.com/a.jpg"]
        );
    }

    #[test]
    fn test_images_capped_at_five() {
        let tags: String = (0..8)
            .map(|i| format!(r#"<img class="a-dynamic-image" src="https://m.media-amazon.com/{i}.jpg">"#))
            .collect();
        let found = images(&SourceProfile::amazon_jp(), &doc(&tags));
        assert_eq!(found.len(), 5);
        assert_eq!(found[4], "https://m.media-amazon.com/4.jpg");
    }

    #[test]
    fn test_brand_strips_label() {
        let document = doc(r#"<a id="bylineInfo">ブランド: アイリスオーヤマ</a>"#);
        assert_eq!(brand(&SourceProfile::amazon_jp(), &document), "アイリスオーヤマ");

        let document = doc(r#"<a id="bylineInfo">Brand: Acme</a>"#);
        assert_eq!(brand(&SourceProfile::amazon_jp(), &document), "Acme");
    }

    #[test]
    fn test_brand_unlabeled_first_match_ends_search() {
        // The byline matches but has no label, so the labelled #brand element
        // further down the list is never consulted.
        let document = doc(
            r#"<a id="bylineInfo">Visit the Acme Store</a><div id="brand">Brand: Acme</div>"#,
        );
        assert_eq!(brand(&SourceProfile::amazon_jp(), &document), "");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let document = doc("<p>nothing relevant here</p>");
        let profile = SourceProfile::amazon_jp();

        assert_eq!(title(&profile, &document), "");
        assert_eq!(price(&profile, &document), "");
        assert_eq!(description(&profile, &document), "");
        assert!(images(&profile, &document).is_empty());
        assert_eq!(brand(&profile, &document), "");
    }
}
