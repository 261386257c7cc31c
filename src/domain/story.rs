use serde::{Deserialize, Serialize};

use super::NewsFeed;

/// A feed entry held by the state store, with its read flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFeedItem {
    pub id: u64,
    pub title: String,
    pub user: Option<String>,
    pub time_ago: String,
    pub points: u32,
    pub comments_count: u32,
    pub url: Option<String>,
    pub read: bool,
}

impl StoredFeedItem {
    pub fn display_user(&self) -> &str {
        self.user.as_deref().unwrap_or("")
    }
}

impl From<NewsFeed> for StoredFeedItem {
    fn from(feed: NewsFeed) -> Self {
        Self {
            id: feed.id,
            title: feed.title,
            user: feed.user,
            time_ago: feed.time_ago,
            points: feed.points.unwrap_or(0),
            comments_count: feed.comments_count,
            url: feed.url,
            read: false,
        }
    }
}
