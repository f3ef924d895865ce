//! # Linkcard
//!
//! A terminal-first front end for the linkcard API: multi-view navigation
//! without page reloads, plus Open Graph link previews.
//!
//! ## Architecture
//!
//! Linkcard follows a small reactive pipeline:
//!
//! ```text
//! Event → Dispatcher → (RouteTable lookup) → Presenter
//!                                          ↘ Fetcher → Extractor → Card
//! ```
//!
//! - [`nav`]: route table, session history, view presenter, dispatcher
//! - [`fetcher`]: HTTP client for the key and og-preview endpoints
//! - [`preview`]: metadata extraction and preview-card construction
//! - [`tui`]: terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # One-shot preview of a page
//! linkcard preview https://www.rust-lang.org
//!
//! # Generate a 24-character key
//! linkcard key 24
//!
//! # Launch the TUI
//! linkcard tui
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`nav`]: Navigation state machine (routes, history, presenter)
//! - [`fetcher`]: API calls against the external server
//! - [`preview`]: Open Graph extraction and card rendering
//! - [`tui`]: Terminal user interface

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all components:
/// config, route table, fetcher, extractor.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `preview <url>` - Print a preview card for a page
/// - `key <length>` - Generate a key via the API
/// - `tui` - Launch the TUI
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/linkcard/config.toml`; currently the API base URL.
pub mod config;

/// Navigation state machine.
///
/// - [`RouteTable`](nav::RouteTable): fixed token → view mapping
/// - [`History`](nav::history::History): session-history abstraction
/// - [`Presenter`](nav::presenter::Presenter): one-visible-view contract
/// - [`Dispatcher`](nav::dispatcher::Dispatcher): ties the three together
pub mod nav;

/// HTTP access to the external API.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait over the two endpoints
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Link-preview pipeline.
///
/// Converts fetched HTML into [`MetaItem`](preview::MetaItem)s and renders
/// a [`PreviewCard`](preview::PreviewCard) with fallback precedence.
pub mod preview;

/// Terminal user interface.
///
/// One view visible at a time (home, key generator, link preview, steps),
/// navigated like the original single-page app. Keybindings: h/k/l/s switch
/// views, Backspace goes back, i edits the active form, Enter submits,
/// o opens the previewed link, q quits.
pub mod tui;
