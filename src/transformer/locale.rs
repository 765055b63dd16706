use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Language of the fixed copy written into listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    English,
    Japanese,
}

/// Fixed phrases used by the transformation rules.
#[derive(Debug)]
pub struct Phrases {
    /// Appended to titles in declared order; first one that fits wins.
    pub title_keywords: &'static [&'static str],
    pub features_header: &'static str,
    pub brand_header: &'static str,
    pub shipping_header: &'static str,
    pub shipping_lines: &'static [&'static str],
    pub branded_catch_copy: &'static str,
    pub catch_copy: &'static str,
    pub keyword_tags: &'static [&'static str],
}

static ENGLISH: Phrases = Phrases {
    title_keywords: &["free shipping", "fast dispatch", "high quality"],
    features_header: "■Features",
    brand_header: "■Brand",
    shipping_header: "■Shipping & Service",
    shipping_lines: &["・Free shipping nationwide", "・We strive to dispatch promptly"],
    branded_catch_copy: "'s popular item! Free shipping",
    catch_copy: "Popular item! Free shipping",
    keyword_tags: &["free shipping", "high quality", "popular"],
};

static JAPANESE: Phrases = Phrases {
    title_keywords: &["送料無料", "即納", "高品質"],
    features_header: "■商品の特徴",
    brand_header: "■ブランド",
    shipping_header: "■配送・サービス",
    shipping_lines: &["・全国送料無料でお届け", "・迅速発送を心がけております"],
    branded_catch_copy: "の人気商品！送料無料でお届け",
    catch_copy: "人気商品！送料無料でお届け",
    keyword_tags: &["送料無料", "高品質", "人気"],
};

impl Locale {
    pub fn phrases(self) -> &'static Phrases {
        match self {
            Locale::English => &ENGLISH,
            Locale::Japanese => &JAPANESE,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Japanese => "ja",
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ja" | "jp" | "japanese" => Ok(Locale::Japanese),
            other => Err(format!("unknown locale '{other}', expected 'en' or 'ja'")),
        }
    }
}
