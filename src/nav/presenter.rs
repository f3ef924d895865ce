use std::collections::HashMap;

use crate::nav::ViewId;

/// Sink for view transitions. The dispatcher talks to the screen only
/// through this trait, which keeps the state machine testable without a
/// terminal attached.
pub trait Presenter {
    /// Make `view` the single visible view.
    fn present(&mut self, view: ViewId);

    /// Update the window/document title.
    fn set_title(&mut self, title: &str);
}

/// Explicit visibility state over the declared view set. `present` is a
/// total function: every call re-evaluates every view, so redundant calls
/// are safe and the "exactly one visible" invariant holds by construction.
#[derive(Debug, Clone)]
pub struct ViewSet {
    visible: HashMap<ViewId, bool>,
}

impl ViewSet {
    pub fn new() -> Self {
        let visible = ViewId::ALL.iter().map(|&v| (v, false)).collect();
        Self { visible }
    }

    pub fn present(&mut self, target: ViewId) {
        for view in ViewId::ALL {
            self.visible.insert(view, view == target);
        }
    }

    pub fn is_visible(&self, view: ViewId) -> bool {
        self.visible.get(&view).copied().unwrap_or(false)
    }

    pub fn visible_view(&self) -> Option<ViewId> {
        ViewId::ALL.into_iter().find(|&v| self.is_visible(v))
    }
}

impl Default for ViewSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_shows_exactly_one_view() {
        let mut views = ViewSet::new();
        views.present(ViewId::Key);
        let visible: Vec<_> = ViewId::ALL
            .into_iter()
            .filter(|&v| views.is_visible(v))
            .collect();
        assert_eq!(visible, vec![ViewId::Key]);
    }

    #[test]
    fn test_present_hides_previous_view() {
        let mut views = ViewSet::new();
        views.present(ViewId::Key);
        views.present(ViewId::Steps);
        assert!(!views.is_visible(ViewId::Key));
        assert!(views.is_visible(ViewId::Steps));
        assert_eq!(views.visible_view(), Some(ViewId::Steps));
    }

    #[test]
    fn test_redundant_present_is_safe() {
        let mut views = ViewSet::new();
        views.present(ViewId::Home);
        views.present(ViewId::Home);
        assert_eq!(views.visible_view(), Some(ViewId::Home));
    }

    #[test]
    fn test_nothing_visible_before_first_present() {
        let views = ViewSet::new();
        assert_eq!(views.visible_view(), None);
    }
}
