use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;

use crate::app::{KackerError, Result};
use crate::domain::{NewsDetail, NewsFeed};
use crate::fetcher::{decode_json, Fetcher};

/// Serves canned records and counts requests.
#[derive(Default)]
pub struct StubFetcher {
    pages: RefCell<HashMap<u32, Vec<NewsFeed>>>,
    details: RefCell<HashMap<u64, NewsDetail>>,
    detail_bodies: RefCell<HashMap<u64, String>>,
    pub feed_calls: Cell<usize>,
    pub detail_calls: Cell<usize>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, page: u32, feeds: Vec<NewsFeed>) -> Self {
        self.pages.borrow_mut().insert(page, feeds);
        self
    }

    pub fn with_detail(self, detail: NewsDetail) -> Self {
        self.details.borrow_mut().insert(detail.id, detail);
        self
    }

    /// Serve item `id` by decoding `body` on every request.
    pub fn with_detail_body(self, id: u64, body: String) -> Self {
        self.detail_bodies.borrow_mut().insert(id, body);
        self
    }
}

/// Detail JSON for item `id` whose comments form one reply chain `depth` deep.
pub fn chain_json(id: u64, depth: u32) -> String {
    let mut json = format!(r#"{{"id": {}, "title": "deep", "comments": ["#, id);
    for level in 0..depth {
        json.push_str(&format!(
            r#"{{"id": {}, "level": {}, "user": "u", "content": "c{}", "comments": ["#,
            u64::from(level) + 1_000,
            level,
            level
        ));
    }
    for _ in 0..depth {
        json.push_str("]}");
    }
    json.push_str("]}");
    json
}

fn missing(what: String) -> KackerError {
    KackerError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, what))
}

#[async_trait(?Send)]
impl Fetcher for StubFetcher {
    async fn fetch_feed_page(&self, page: u32) -> Result<Vec<NewsFeed>> {
        self.feed_calls.set(self.feed_calls.get() + 1);
        self.pages
            .borrow()
            .get(&page)
            .cloned()
            .ok_or_else(|| missing(format!("page {}", page)))
    }

    async fn fetch_item_detail(&self, id: u64) -> Result<NewsDetail> {
        self.detail_calls.set(self.detail_calls.get() + 1);
        if let Some(body) = self.detail_bodies.borrow().get(&id) {
            return decode_json(body.as_bytes());
        }
        self.details
            .borrow()
            .get(&id)
            .cloned()
            .ok_or_else(|| missing(format!("item {}", id)))
    }
}
