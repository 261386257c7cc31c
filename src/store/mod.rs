use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{NewsFeed, StoredFeedItem};

/// Handle to the application state shared by every view.
///
/// Views run on a single-threaded event loop, so the state is never
/// borrowed across an await point and needs no lock.
pub type SharedState = Rc<RefCell<AppState>>;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub current_page: u32,
    pub feeds: Vec<StoredFeedItem>,
    loaded_page: Option<u32>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            feeds: Vec::new(),
            loaded_page: None,
        }
    }

    pub fn shared() -> SharedState {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Replace the stored items with a freshly fetched page.
    ///
    /// Every item starts unread. Repeated identifiers keep their first
    /// occurrence so lookups by id stay unambiguous.
    pub fn replace_feeds(&mut self, page: u32, feeds: Vec<NewsFeed>) {
        let mut items: Vec<StoredFeedItem> = Vec::with_capacity(feeds.len());
        for feed in feeds {
            if items.iter().any(|item| item.id == feed.id) {
                tracing::debug!("Dropping duplicate item {} on page {}", feed.id, page);
                continue;
            }
            items.push(StoredFeedItem::from(feed));
        }
        self.feeds = items;
        self.loaded_page = Some(page);
    }

    /// Page whose items are currently held, if any page was fetched.
    pub fn loaded_page(&self) -> Option<u32> {
        self.loaded_page
    }

    pub fn find(&self, id: u64) -> Option<&StoredFeedItem> {
        self.feeds.iter().find(|item| item.id == id)
    }

    /// Mark an item read. Returns `false` if the id is not on the loaded page.
    pub fn mark_read(&mut self, id: u64) -> bool {
        match self.feeds.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.read = true;
                true
            }
            None => false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) fn sample_feed(id: u64) -> NewsFeed {
    NewsFeed {
        id,
        title: format!("Story {}", id),
        url: Some(format!("https://example.com/{}", id)),
        user: Some(format!("user{}", id)),
        time_ago: "1 hour ago".into(),
        content: None,
        comments_count: id as u32,
        points: Some(10 * id as u32),
    }
}
