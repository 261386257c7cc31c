use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::app::Result;
use crate::config::ApiConfig;
use crate::domain::{NewsDetail, NewsFeed};
use crate::fetcher::{decode_json, Fetcher};

pub struct HttpFetcher {
    client: Client,
    base_url: Url,
}

impl HttpFetcher {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url(&config.base_url)?,
        })
    }

    pub fn feed_url(&self, page: u32) -> Result<Url> {
        Ok(self.base_url.join(&format!("news/{}.json", page))?)
    }

    pub fn item_url(&self, id: u64) -> Result<Url> {
        Ok(self.base_url.join(&format!("item/{}.json", id))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;
        let body = response.bytes().await?;
        decode_json(&body)
    }
}

/// Parse the API root, making sure relative joins append to its path.
fn base_url(raw: &str) -> Result<Url> {
    if raw.ends_with('/') {
        Ok(Url::parse(raw)?)
    } else {
        Ok(Url::parse(&format!("{}/", raw))?)
    }
}

#[async_trait(?Send)]
impl Fetcher for HttpFetcher {
    async fn fetch_feed_page(&self, page: u32) -> Result<Vec<NewsFeed>> {
        let url = self.feed_url(page)?;
        self.get_json(url).await
    }

    async fn fetch_item_detail(&self, id: u64) -> Result<NewsDetail> {
        let url = self.item_url(id)?;
        self.get_json(url).await
    }
}
