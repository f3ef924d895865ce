pub mod dispatcher;
pub mod history;
pub mod presenter;

/// Application name used in window titles: `"<route title> - <APP_NAME>"`.
pub const APP_NAME: &str = "Linkcard";

/// Identifier for one of the declared view sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    Key,
    Preview,
    Steps,
}

impl ViewId {
    /// All declared views, in presentation order.
    pub const ALL: [ViewId; 4] = [ViewId::Home, ViewId::Key, ViewId::Preview, ViewId::Steps];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Key => "key",
            ViewId::Preview => "og",
            ViewId::Steps => "steps",
        }
    }
}

/// Side effect triggered by the reserved `get` subaction on a fetchable
/// route. Returned from dispatch for the runtime to execute; the dispatcher
/// itself never performs I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    GenerateKey,
    FetchPreview,
}

/// One entry of the route table. `action` is the side effect the route's
/// `get` subaction triggers, if it has one.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub token: &'static str,
    pub view: ViewId,
    pub title: &'static str,
    pub action: Option<ActionKind>,
}

/// Static ordered token → route mapping. Defined once at startup, immutable
/// thereafter. Unmatched tokens resolve to the default (home) route.
pub struct RouteTable {
    routes: Vec<Route>,
    default: Route,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            routes: vec![
                Route {
                    token: "key",
                    view: ViewId::Key,
                    title: "Key Generator",
                    action: Some(ActionKind::GenerateKey),
                },
                Route {
                    token: "og",
                    view: ViewId::Preview,
                    title: "OpenGraph Link",
                    action: Some(ActionKind::FetchPreview),
                },
                Route {
                    token: "steps",
                    view: ViewId::Steps,
                    title: "Steps",
                    action: None,
                },
            ],
            default: Route {
                token: "",
                view: ViewId::Home,
                title: "Home",
                action: None,
            },
        }
    }

    /// Exact match against the table in declared order; unknown tokens fall
    /// back to the default route. Never fails.
    pub fn resolve(&self, token: &str) -> &Route {
        self.routes
            .iter()
            .find(|r| r.token == token)
            .unwrap_or(&self.default)
    }

    pub fn default_route(&self) -> &Route {
        &self.default
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Current logical location, owned by the dispatcher and passed around
/// explicitly rather than living in a global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_path: String,
    pub current_view: ViewId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_tokens() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("key").view, ViewId::Key);
        assert_eq!(table.resolve("og").view, ViewId::Preview);
        assert_eq!(table.resolve("steps").view, ViewId::Steps);
    }

    #[test]
    fn test_resolve_unknown_token_falls_back_to_home() {
        let table = RouteTable::new();
        let route = table.resolve("zzz");
        assert_eq!(route.view, ViewId::Home);
        assert_eq!(route.title, "Home");
    }

    #[test]
    fn test_resolve_is_exact_match() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("keys").view, ViewId::Home);
        assert_eq!(table.resolve("KEY").view, ViewId::Home);
    }

    #[test]
    fn test_tokens_are_unique() {
        let table = RouteTable::new();
        let mut tokens: Vec<_> = table.routes().iter().map(|r| r.token).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), table.routes().len());
    }
}
