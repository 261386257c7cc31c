use std::path::Path;
use std::rc::Rc;

use crate::app::error::Result;
use crate::config::Config;
use crate::dom::Document;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::location::Location;
use crate::router::{Router, ViewId};
use crate::store::{AppState, SharedState};
use crate::view::{DetailView, FeedView};

pub const PAGE_ROUTE: &str = "/page/";
pub const SHOW_ROUTE: &str = "/show/";

pub struct AppContext {
    pub config: Config,
    pub document: Document,
    pub state: SharedState,
    pub location: Location,
    pub router: Router,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Rc<dyn Fetcher> = Rc::new(HttpFetcher::new(&config.api)?);
        Self::with_fetcher(config, fetcher)
    }

    pub fn with_fetcher(config: Config, fetcher: Rc<dyn Fetcher>) -> Result<Self> {
        let document = Document::with_root(&config.view.container_id);
        let state = AppState::shared();

        let feed_view = FeedView::new(&document, &config, state.clone(), fetcher.clone())?;
        let detail_view = DetailView::new(&document, &config, state.clone(), fetcher)?;

        let mut router = Router::new(config.router.match_mode);
        let feed = router.add_view(Box::new(feed_view));
        let detail = router.add_view(Box::new(detail_view));
        router.set_default_view(feed);
        router.add_route(PAGE_ROUTE, feed);
        router.add_route(SHOW_ROUTE, detail);

        Ok(Self {
            config,
            document,
            state,
            location: Location::new(),
            router,
        })
    }

    /// Initial dispatch at startup; fragment-change events do not cover it.
    pub async fn start(&mut self, fragment: &str) -> Result<Option<ViewId>> {
        self.location.set_hash(fragment);
        let hash = self.location.hash().to_string();
        self.router.dispatch(&hash).await
    }

    /// Apply a fragment change. Dispatches only when the fragment changed.
    pub async fn navigate(&mut self, fragment: &str) -> Result<Option<ViewId>> {
        if !self.location.set_hash(fragment) {
            tracing::debug!("Fragment unchanged: {:?}", self.location.hash());
            return Ok(None);
        }
        let hash = self.location.hash().to_string();
        self.router.dispatch(&hash).await
    }

    pub fn page_html(&self) -> String {
        self.document.to_html("Kacker News")
    }

    pub fn write_page(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.page_html())?;
        Ok(())
    }
}
