use crate::extractor::ProductRecord;
use crate::transformer::locale::Phrases;

/// Listing body: features, optional brand section, then shipping notes.
pub fn compose_description(record: &ProductRecord, phrases: &Phrases) -> String {
    let mut sections = vec![
        phrases.features_header.to_string(),
        record.description.clone(),
    ];

    if !record.brand.is_empty() {
        sections.push(format!("\n{}\n{}", phrases.brand_header, record.brand));
    }

    sections.push(format!("\n{}", phrases.shipping_header));
    sections.extend(phrases.shipping_lines.iter().map(|line| line.to_string()));

    sections.join("\n")
}

pub fn catch_copy(brand: &str, phrases: &Phrases) -> String {
    if brand.is_empty() {
        phrases.catch_copy.to_string()
    } else {
        format!("{brand}{}", phrases.branded_catch_copy)
    }
}
