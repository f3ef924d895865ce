use tracing::debug;

use crate::nav::history::History;
use crate::nav::presenter::Presenter;
use crate::nav::{ActionKind, NavigationState, RouteTable, ViewId, APP_NAME};

/// Result of a dispatch: either a view was presented, or the route names a
/// side effect for the runtime to execute. Action dispatches never touch
/// the presenter, history, or navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    View(ViewId),
    Action(ActionKind),
}

/// Resolves incoming location strings against the route table, keeps the
/// session history in sync, and drives the presenter. All state lives here
/// and is re-derived from the path string alone on every dispatch, so
/// history replays (back/forward, startup) are handled identically to
/// fresh navigation, minus the history push.
pub struct Dispatcher<H: History, P: Presenter> {
    routes: RouteTable,
    history: H,
    presenter: P,
    state: NavigationState,
}

impl<H: History, P: Presenter> Dispatcher<H, P> {
    pub fn new(routes: RouteTable, history: H, presenter: P) -> Self {
        let state = NavigationState {
            current_path: history.current_location(),
            current_view: routes.default_route().view,
        };
        Self {
            routes,
            history,
            presenter,
            state,
        }
    }

    /// Route `path` and act on it. `is_replay` marks navigations where the
    /// history already reflects the new location (startup, back/forward):
    /// those replace the current entry instead of pushing a new one.
    ///
    /// Dispatching the currently-active path leaves history untouched but
    /// still re-presents the view, so the call is idempotent.
    pub fn dispatch(&mut self, path: &str, is_replay: bool) -> Dispatch {
        let path = path.trim_start_matches('/');
        let (token, subaction) = split_route(path);
        let route = *self.routes.resolve(token);
        debug!(path, token, view = route.view.as_str(), "dispatch");

        if let Some(action) = route.action {
            if subaction == Some("get") {
                return Dispatch::Action(action);
            }
        }

        self.presenter.present(route.view);
        if self.state.current_path != path {
            if is_replay {
                self.history.replace(path);
            } else {
                self.history.push(path);
            }
        }
        self.presenter
            .set_title(&format!("{} - {}", route.title, APP_NAME));
        self.state = NavigationState {
            current_path: path.to_string(),
            current_view: route.view,
        };
        Dispatch::View(route.view)
    }

    /// Move back in history and replay the new location. `None` when there
    /// is nothing to go back to.
    pub fn back(&mut self) -> Option<Dispatch> {
        let location = self.history.back()?;
        Some(self.dispatch(&location, true))
    }

    /// Move forward in history and replay the new location.
    pub fn forward(&mut self) -> Option<Dispatch> {
        let location = self.history.forward()?;
        Some(self.dispatch(&location, true))
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}

/// Split a location string into its route token and optional subaction.
/// Both stop at the query separator, so `"og/get?url=x"` parses as
/// `("og", Some("get"))` and `"og?url=x"` as `("og", None)`.
fn split_route(path: &str) -> (&str, Option<&str>) {
    let without_query = path.split('?').next().unwrap_or(path);
    let mut segments = without_query.split('/');
    let token = segments.next().unwrap_or(without_query);
    let subaction = segments.next().filter(|s| !s.is_empty());
    (token, subaction)
}
