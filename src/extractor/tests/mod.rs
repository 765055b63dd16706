use std::fs;

use crate::extractor::{ParseError, ProductRecord, extract};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

#[test]
fn test_extract_product_page() {
    let record = extract(&fixture("product.html"), "B0C1234567").unwrap();

    assert_eq!(record.source_id, "B0C1234567");
    assert_eq!(
        record.title,
        "Acme Stainless Kitchen Scale 5kg Digital Cooking Scale"
    );
    assert_eq!(record.price, "¥1,980");
    assert_eq!(
        record.description,
        "Measures up to 5kg in 1g increments\n\
         Stainless steel platform that wipes clean\n\
         Auto power-off after 2 minutes"
    );
    assert_eq!(
        record.images,
        vec!["https://m.media-amazon.com/images/I/61main._AC_SX679_.jpg"]
    );
    assert_eq!(record.brand, "Acme");
    assert_eq!(record.category, "");
}

#[test]
fn test_extract_relocated_fields() {
    let record = extract(&fixture("relocated.html"), "B0RELOCATE").unwrap();

    assert_eq!(record.title, "Hydrating Face Cream 50g");
    assert_eq!(record.price, "¥3,480");
    assert_eq!(record.brand, "Lumière");

    // `#productDescription p li` never matches a bare list, so only the
    // generic bullet list contributes.
    assert_eq!(
        record.description,
        "Suitable for all skin types, including sensitive skin\n\
         Made in Japan with carefully selected ingredients"
    );

    assert_eq!(
        record.images,
        vec![
            "https://m.media-amazon.com/images/I/c1.jpg",
            "https://images-fe.ssl-images-amazon.com/images/I/c2.jpg",
            "https://m.media-amazon.com/images/I/c3.jpg",
            "https://m.media-amazon.com/images/I/c4.jpg",
            "https://m.media-amazon.com/images/I/c5.jpg",
        ]
    );
}

#[test]
fn test_extract_page_without_product_fields() {
    let record = extract(&fixture("empty.html"), "B000000000").unwrap();

    assert_eq!(record, ProductRecord::empty("B000000000"));
}

#[test]
fn test_extract_rejects_empty_markup() {
    assert_eq!(extract("", "B000000000"), Err(ParseError::EmptyMarkup));
    assert_eq!(extract(" \n\t ", "B000000000"), Err(ParseError::EmptyMarkup));
}

#[test]
fn test_extract_rejects_plain_text() {
    let result = extract("Service Unavailable", "B000000000");
    assert_eq!(result, Err(ParseError::NotMarkup(19)));
}

#[test]
fn test_extract_scaffold_only_document() {
    let record = extract("<html><head></head><body></body></html>", "B000000000").unwrap();
    assert_eq!(record, ProductRecord::empty("B000000000"));

    let record = extract("<p>", "B000000000").unwrap();
    assert_eq!(record, ProductRecord::empty("B000000000"));
}

#[test]
fn test_malformed_html() {
    let html = r#"<html><body><span id="productTitle">Broken <b>markup<div class="a-price-whole">120"#;

    let record = extract(html, "B0BROKEN00").unwrap();
    assert!(record.title.starts_with("Broken markup"));
    assert_eq!(record.price, "¥120");
}

#[test]
fn test_description_never_exceeds_five_segments() {
    let bullets: String = (1..=4)
        .map(|i| format!("<li>Primary feature bullet {i}</li>"))
        .collect();
    let extra: String = (1..=4)
        .map(|i| format!("<li>Secondary feature bullet {i}</li>"))
        .collect();
    let html = format!(
        r#"<div id="feature-bullets"><ul>{bullets}</ul></div>
           <ul class="a-unordered-list a-vertical a-spacing-mini">{extra}</ul>"#
    );

    let record = extract(&html, "B0BULLETS0").unwrap();
    let lines: Vec<&str> = record.description.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4], "Secondary feature bullet 1");
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract(&html, "B000000000");
        }

        #[test]
        fn test_extract_respects_caps(count in 0usize..20) {
            let items: String = (0..count)
                .map(|i| format!(
                    r#"<li>Long enough feature text {i}</li><img class="a-dynamic-image" src="https://m.media-amazon.com/{i}.jpg">"#
                ))
                .collect();
            let html = format!(r#"<div id="feature-bullets"><ul>{items}</ul></div>"#);

            let record = extract(&html, "B000000000").unwrap();
            prop_assert!(record.images.len() <= 5);
            prop_assert!(record.description.lines().count() <= 5);
        }
    }
}
