//! Fragment-to-view dispatch.
//!
//! The router owns its views. Registration hands back a [`ViewId`], so the
//! same view can serve as the default and as one or more routed entries.

use serde::Deserialize;

use crate::app::Result;
use crate::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(usize);

/// How a route path is matched against the fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The path may appear anywhere in the fragment.
    #[default]
    Contains,
    /// The path must start the fragment, ignoring the leading `#`.
    Prefix,
}

impl MatchMode {
    pub fn matches(self, fragment: &str, path: &str) -> bool {
        match self {
            MatchMode::Contains => fragment.contains(path),
            MatchMode::Prefix => fragment
                .strip_prefix('#')
                .unwrap_or(fragment)
                .starts_with(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub view: ViewId,
}

pub struct Router {
    views: Vec<Box<dyn View>>,
    default_route: Option<ViewId>,
    routes: Vec<RouteEntry>,
    match_mode: MatchMode,
}

impl Router {
    pub fn new(match_mode: MatchMode) -> Self {
        Self {
            views: Vec::new(),
            default_route: None,
            routes: Vec::new(),
            match_mode,
        }
    }

    pub fn add_view(&mut self, view: Box<dyn View>) -> ViewId {
        self.views.push(view);
        ViewId(self.views.len() - 1)
    }

    /// View rendered for the empty fragment. Replaces any earlier default.
    pub fn set_default_view(&mut self, view: ViewId) {
        self.default_route = Some(view);
    }

    /// Append a route; earlier routes take priority.
    pub fn add_route(&mut self, path: impl Into<String>, view: ViewId) {
        self.routes.push(RouteEntry {
            path: path.into(),
            view,
        });
    }

    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    pub fn view_name(&self, id: ViewId) -> Option<&'static str> {
        self.views.get(id.0).map(|view| view.name())
    }

    /// Select the view for `fragment` without rendering it.
    pub fn resolve(&self, fragment: &str) -> Option<ViewId> {
        if fragment.is_empty() {
            if let Some(view) = self.default_route {
                return Some(view);
            }
        }

        self.routes
            .iter()
            .find(|route| self.match_mode.matches(fragment, &route.path))
            .map(|route| route.view)
    }

    /// Render the view selected for `fragment`.
    ///
    /// Returns the view that rendered, or `None` when nothing matched.
    pub async fn dispatch(&mut self, fragment: &str) -> Result<Option<ViewId>> {
        let Some(id) = self.resolve(fragment) else {
            tracing::debug!("No route for fragment {:?}", fragment);
            return Ok(None);
        };

        let Some(view) = self.views.get_mut(id.0) else {
            tracing::warn!("Route points at unregistered view {:?}", id);
            return Ok(None);
        };

        tracing::debug!("Dispatching {:?} to {} view", fragment, view.name());
        view.render(fragment).await?;
        Ok(Some(id))
    }
}
