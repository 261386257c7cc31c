pub mod news;
pub mod story;

pub use news::{CommentNode, NewsDetail, NewsFeed};
pub use story::StoredFeedItem;
