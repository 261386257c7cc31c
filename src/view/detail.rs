use std::rc::Rc;

use async_trait::async_trait;
use html_escape::encode_text;

use crate::app::{KackerError, Result};
use crate::config::Config;
use crate::dom::Document;
use crate::fetcher::Fetcher;
use crate::location::route_argument;
use crate::store::SharedState;
use crate::view::comments::{flatten, render_comment};
use crate::view::{Template, View};

const TEMPLATE: &str = r##"
<div class="bg-gray-600 min-h-screen pb-8">
  <div class="bg-white text-xl">
    <div class="mx-auto px-4">
      <div class="flex justify-between items-center py-6">
        <div class="flex justify-start">
          <h1 class="font-extrabold">Kacker News</h1>
        </div>
        <div class="items-center justify-end">
          <a href="#/page/{{__currentPage__}}" class="text-gray-500">
            <i class="fa fa-times"></i>
          </a>
        </div>
      </div>
    </div>
  </div>

  <div class="h-full border rounded-xl bg-white m-6 p-4">
    <h2>{{__title__}}</h2>
    <div class="text-gray-400 h-20">
      {{__content__}}
    </div>

    {{__comments__}}
  </div>
</div>
"##;

/// Item id named by a `#/show/<id>` fragment.
pub fn parse_item_id(fragment: &str) -> Result<u64> {
    let raw = route_argument(fragment);
    raw.parse::<u64>()
        .map_err(|_| KackerError::InvalidItemId(raw.to_string()))
}

pub struct DetailView {
    template: Template,
    state: SharedState,
    fetcher: Rc<dyn Fetcher>,
    indent_px: u32,
}

impl DetailView {
    pub fn new(
        document: &Document,
        config: &Config,
        state: SharedState,
        fetcher: Rc<dyn Fetcher>,
    ) -> Result<Self> {
        Ok(Self {
            template: Template::new(document, &config.view.container_id, TEMPLATE)?,
            state,
            fetcher,
            indent_px: config.view.indent_px,
        })
    }
}

#[async_trait(?Send)]
impl View for DetailView {
    fn name(&self) -> &'static str {
        "detail"
    }

    fn template_mut(&mut self) -> &mut Template {
        &mut self.template
    }

    async fn render(&mut self, fragment: &str) -> Result<()> {
        let id = parse_item_id(fragment)?;
        let detail = self.fetcher.fetch_item_detail(id).await?;

        if !self.state.borrow_mut().mark_read(id) {
            tracing::debug!("Item {} is not on the loaded page", id);
        }

        for node in flatten(&detail.comments) {
            let html = render_comment(node, self.indent_px);
            self.add_fragment(html);
        }
        let comments = self.consume_fragments();
        let current_page = self.state.borrow().current_page;

        self.set_placeholder("comments", &comments);
        self.set_placeholder("currentPage", &current_page.to_string());
        self.set_placeholder("title", &encode_text(&detail.title));
        self.set_placeholder("content", &detail.content);
        self.commit();

        Ok(())
    }
}
