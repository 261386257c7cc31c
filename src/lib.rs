//! # Kacker
//!
//! A Hacker News reader whose pages are selected by URL fragments.
//!
//! ## Architecture
//!
//! ```text
//! fragment change → Router → View → Fetcher → State → Template → Document
//! ```
//!
//! A fragment change dispatches to exactly one view. The view updates the
//! shared state, fetches its data, buffers HTML fragments, fills the
//! placeholders of its template and commits the result to the display
//! container in one write.
//!
//! ## Quick Start
//!
//! ```bash
//! # Render the front page to stdout
//! kacker render
//!
//! # Render a thread to a file and open it
//! kacker render "#/show/8863" -o thread.html --open
//!
//! # Navigate interactively
//! kacker browse
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the document,
/// state, fetcher, views and router.
pub mod app;

/// Command-line interface using clap.
///
/// - `render [fragment]` - Render one fragment
/// - `browse` - Navigate by entering fragments on stdin
pub mod cli;

/// Configuration loaded from `~/.config/kacker/config.toml`.
pub mod config;

/// The display surface views commit into.
pub mod dom;

/// API records and stored feed items.
pub mod domain;

/// News API access.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for the two read operations
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Fragment state and route argument parsing.
pub mod location;

/// Fragment-to-view dispatch.
pub mod router;

/// Shared application state: current page and loaded items.
pub mod store;

/// Views and the template engine they are built on.
///
/// - [`Template`](view::Template): placeholder substitution and fragment buffering
/// - [`FeedView`](view::FeedView): paginated story list
/// - [`DetailView`](view::DetailView): one story with its flattened comments
pub mod view;
