use async_trait::async_trait;
use url::Url;

use crate::fetcher::{client::fetch, errors::FetchError};

/// Supplies the raw markup of a product page for a source id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductPageSource: Send + Sync {
    async fn fetch_markup(&self, source_id: &str) -> Result<String, FetchError>;
}

/// Downloads product pages from `{base_url}/dp/{source_id}`.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    base_url: Url,
}

impl HttpPageSource {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn product_url(&self, source_id: &str) -> Result<Url, FetchError> {
        Ok(self.base_url.join(&format!("/dp/{source_id}"))?)
    }
}

#[async_trait]
impl ProductPageSource for HttpPageSource {
    async fn fetch_markup(&self, source_id: &str) -> Result<String, FetchError> {
        let url = self.product_url(source_id)?;
        let page = fetch(url.as_str()).await?;
        Ok(page.body_utf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_url() {
        let source = HttpPageSource::new("https://www.amazon.co.jp").unwrap();
        assert_eq!(
            source.product_url("B0C1234567").unwrap().as_str(),
            "https://www.amazon.co.jp/dp/B0C1234567"
        );
    }

    #[test]
    fn test_product_url_ignores_base_path() {
        let source = HttpPageSource::new("http://127.0.0.1:9000/mirror/").unwrap();
        assert_eq!(
            source.product_url("B0C1234567").unwrap().as_str(),
            "http://127.0.0.1:9000/dp/B0C1234567"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            HttpPageSource::new("not a url"),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
