use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use crate::inventory::InventorySource;
use crate::store::extract::InventoryExtractor;
use crate::types::product::Product;

pub const PLAY_STORE_DETAILS_URL: &str = "https://play.google.com/store/devices/details";

#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    details_url: Url,
    extractor: InventoryExtractor,
}

impl StoreClient {
    pub fn new(details_url: &str) -> Result<Self> {
        let details_url = Url::parse(details_url)
            .with_context(|| format!("invalid store details url {details_url}"))?;

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build store http client")?;

        Ok(Self {
            http,
            details_url,
            extractor: InventoryExtractor::new()?,
        })
    }

    pub fn play_store() -> Result<Self> {
        Self::new(PLAY_STORE_DETAILS_URL)
    }

    pub fn product_url(&self, product: &Product) -> Url {
        let mut url = self.details_url.clone();
        url.query_pairs_mut().append_pair("id", product.id());
        url
    }
}

#[async_trait]
impl InventorySource for StoreClient {
    async fn inventory_text(&self, product: &Product) -> Result<String> {
        let url = self.product_url(product);
        debug!(%url, "fetching product page");

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("store GET {url} failed"))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, %status, "product page answered with non-success status");
        }

        let page = resp
            .text()
            .await
            .with_context(|| format!("read product page {url} failed"))?;

        Ok(self.extractor.extract(&page))
    }
}
