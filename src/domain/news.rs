use serde::{Deserialize, Serialize};

/// One entry of a paginated feed listing, as returned by the news API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsFeed {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub time_ago: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub comments_count: u32,
    #[serde(default)]
    pub points: Option<u32>,
}

/// A single story with its full comment thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsDetail {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub time_ago: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub comments: Vec<CommentNode>,
}

/// A node in a comment tree. `depth` is 0 for top-level comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentNode {
    pub id: u64,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub time_ago: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "level", default)]
    pub depth: u32,
    #[serde(default)]
    pub comments: Vec<CommentNode>,
}

impl CommentNode {
    pub fn author(&self) -> &str {
        self.user.as_deref().unwrap_or("[deleted]")
    }
}

// Threads can be arbitrarily deep; free them without recursing per level.
impl Drop for CommentNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.comments);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.comments);
        }
    }
}
