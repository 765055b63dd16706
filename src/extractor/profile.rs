use crate::extractor::locator::Locator;

/// Where a source site keeps each product field, plus the site-specific
/// markers the extractor needs to accept a value.
#[derive(Debug, Clone, Copy)]
pub struct SourceProfile {
    pub title: &'static [Locator],
    pub price: &'static [Locator],
    /// Containers whose `li` descendants hold feature bullets.
    pub description: &'static [Locator],
    pub images: &'static [Locator],
    pub brand: &'static [Locator],
    /// Substring an image URL must contain to count as a product image.
    pub image_domain_marker: &'static str,
    pub currency_symbol: &'static str,
    /// A brand line is accepted only if it contains one of these.
    pub brand_markers: &'static [&'static str],
    /// Label prefixes removed from an accepted brand line.
    pub brand_prefixes: &'static [&'static str],
}

const AMAZON_JP_TITLE: &[Locator] = &[
    Locator::css("#productTitle"),
    Locator::css(".product-title"),
    Locator::css("h1.a-size-large"),
];

const AMAZON_JP_PRICE: &[Locator] = &[
    Locator::css(".a-price-whole"),
    Locator::css(".a-price.a-text-price.a-size-medium.apexPriceToPay .a-offscreen"),
    Locator::css(".a-price-range .a-price .a-offscreen"),
    Locator::css("#price_inside_buybox"),
];

const AMAZON_JP_DESCRIPTION: &[Locator] = &[
    Locator::css("#feature-bullets ul"),
    Locator::css("#productDescription p"),
    Locator::css(".a-unordered-list.a-vertical.a-spacing-mini"),
];

const AMAZON_JP_IMAGES: &[Locator] = &[
    Locator::css("#landingImage"),
    Locator::css(".a-dynamic-image"),
    Locator::css("#imgTagWrapperId img"),
];

const AMAZON_JP_BRAND: &[Locator] = &[
    Locator::css("#bylineInfo"),
    Locator::css(".a-row .a-size-small.a-color-secondary"),
    Locator::css("#brand"),
];

impl SourceProfile {
    pub const fn amazon_jp() -> Self {
        Self {
            title: AMAZON_JP_TITLE,
            price: AMAZON_JP_PRICE,
            description: AMAZON_JP_DESCRIPTION,
            images: AMAZON_JP_IMAGES,
            brand: AMAZON_JP_BRAND,
            image_domain_marker: "amazon",
            currency_symbol: "¥",
            brand_markers: &["ブランド", "Brand"],
            brand_prefixes: &["ブランド:", "Brand:"],
        }
    }
}

impl Default for SourceProfile {
    fn default() -> Self {
        Self::amazon_jp()
    }
}
