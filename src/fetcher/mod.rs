pub mod http_fetcher;

#[cfg(test)]
pub(crate) mod stub;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::app::Result;
use crate::domain::{NewsDetail, NewsFeed};

/// Read access to the news API.
///
/// Runs on the single-threaded event loop, so futures need not be `Send`.
#[async_trait(?Send)]
pub trait Fetcher {
    async fn fetch_feed_page(&self, page: u32) -> Result<Vec<NewsFeed>>;

    async fn fetch_item_detail(&self, id: u64) -> Result<NewsDetail>;
}

/// Decode an API response body.
///
/// Comment threads nest two JSON levels per reply, so serde_json's default
/// recursion limit is lifted and the stack grows on demand instead.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    deserializer.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}
