use std::rc::Rc;

use async_trait::async_trait;
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::app::Result;
use crate::config::Config;
use crate::dom::Document;
use crate::domain::StoredFeedItem;
use crate::fetcher::Fetcher;
use crate::location::route_argument;
use crate::store::SharedState;
use crate::view::{Template, View};

const TEMPLATE: &str = r##"
<div class="bg-gray-600 min-h-screen">
  <div class="bg-white text-xl">
    <div class="mx-auto px-4">
      <div class="flex justify-between items-center py-6">
        <div class="flex justify-start">
          <h1 class="font-extrabold">Kacker News</h1>
        </div>
        <div class="items-center justify-end">
          <a href="#/page/{{__prev_page__}}" class="text-gray-500">
            Previous
          </a>
          <a href="#/page/{{__next_page__}}" class="text-gray-500 ml-4">
            Next
          </a>
        </div>
      </div>
    </div>
  </div>
  <div class="p-4 text-2xl text-gray-700">
    {{__news_feed__}}
  </div>
</div>
"##;

/// Page number named by a `#/page/<N>` fragment; 1 when absent or invalid,
/// `max_page` when past the last page.
pub fn parse_page(fragment: &str, max_page: u32) -> u32 {
    match route_argument(fragment).parse::<u32>() {
        Ok(page) if page > 0 => page.min(max_page.max(1)),
        _ => 1,
    }
}

pub fn prev_page(current: u32) -> u32 {
    if current > 1 {
        current - 1
    } else {
        1
    }
}

pub fn next_page(current: u32, max_page: u32) -> u32 {
    if current < max_page {
        current + 1
    } else {
        current
    }
}

pub struct FeedView {
    template: Template,
    state: SharedState,
    fetcher: Rc<dyn Fetcher>,
    max_page: u32,
    reuse_loaded_page: bool,
}

impl FeedView {
    pub fn new(
        document: &Document,
        config: &Config,
        state: SharedState,
        fetcher: Rc<dyn Fetcher>,
    ) -> Result<Self> {
        let template = Template::new(document, &config.view.container_id, TEMPLATE)?;
        state.borrow_mut().current_page = 1;

        Ok(Self {
            template,
            state,
            fetcher,
            max_page: config.view.max_page,
            reuse_loaded_page: config.feed.reuse_loaded_page,
        })
    }

    fn is_loaded(&self, page: u32) -> bool {
        let state = self.state.borrow();
        state.loaded_page() == Some(page) && !state.feeds.is_empty()
    }
}

fn render_item(item: &StoredFeedItem) -> String {
    format!(
        r##"
<div class="p-6 {background} mt-6 rounded-lg shadow-md transition-colors duration-500 hover:bg-green-100">
  <div class="flex">
    <div class="flex-auto">
      <a href="#/show/{id}">{title}</a>
    </div>
    <div class="text-center text-sm">
      <div class="w-10 text-white bg-green-300 rounded-lg px-0 py-2">{comments_count}</div>
    </div>
  </div>
  <div class="flex mt-3">
    <div class="grid grid-cols-3 text-sm text-gray-500">
      <div><i class="fas fa-user mr-1"></i>{user}</div>
      <div><i class="fas fa-heart mr-1"></i>{points}</div>
      <div><i class="fas fa-clock mr-1"></i>{time_ago}</div>
    </div>
  </div>
  {link}
</div>"##,
        background = if item.read { "bg-gray-300" } else { "bg-white" },
        id = item.id,
        title = encode_text(&item.title),
        comments_count = item.comments_count,
        user = encode_text(item.display_user()),
        points = item.points,
        time_ago = encode_text(&item.time_ago),
        link = match &item.url {
            Some(url) => format!(
                r#"<a href="{}" class="text-xs text-gray-400">source</a>"#,
                encode_double_quoted_attribute(url)
            ),
            None => String::new(),
        },
    )
}

#[async_trait(?Send)]
impl View for FeedView {
    fn name(&self) -> &'static str {
        "feed"
    }

    fn template_mut(&mut self) -> &mut Template {
        &mut self.template
    }

    async fn render(&mut self, fragment: &str) -> Result<()> {
        let page = parse_page(fragment, self.max_page);
        self.state.borrow_mut().current_page = page;

        if self.reuse_loaded_page && self.is_loaded(page) {
            tracing::debug!("Rendering page {} from loaded items", page);
        } else {
            let feeds = self.fetcher.fetch_feed_page(page).await?;
            tracing::debug!("Fetched {} items for page {}", feeds.len(), page);
            self.state.borrow_mut().replace_feeds(page, feeds);
        }

        let fragments: Vec<String> = self.state.borrow().feeds.iter().map(render_item).collect();
        for html in fragments {
            self.add_fragment(html);
        }

        let news_feed = self.consume_fragments();
        let next = next_page(page, self.max_page);
        self.set_placeholder("news_feed", &news_feed);
        self.set_placeholder("prev_page", &prev_page(page).to_string());
        self.set_placeholder("next_page", &next.to_string());
        self.commit();

        Ok(())
    }
}
