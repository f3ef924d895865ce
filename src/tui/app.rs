use crate::app::LinkcardError;
use crate::nav::dispatcher::Dispatcher;
use crate::nav::history::SessionHistory;
use crate::nav::presenter::{Presenter, ViewSet};
use crate::nav::{RouteTable, ViewId};
use crate::preview::PreviewCard;

/// Presenter backed by plain screen state; the layout reads it each frame.
#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    pub views: ViewSet,
    pub title: String,
}

impl Presenter for ScreenState {
    fn present(&mut self, view: ViewId) {
        self.views.present(view);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Completion message from a spawned API call. Preview completions carry
/// the generation they were started under so stale responses can be
/// discarded instead of overwriting a newer card.
#[derive(Debug)]
pub enum FetchOutcome {
    Key(Result<String, LinkcardError>),
    Preview {
        generation: u64,
        result: Result<PreviewCard, LinkcardError>,
    },
}

pub struct TuiApp {
    pub dispatcher: Dispatcher<SessionHistory, ScreenState>,
    pub input_mode: InputMode,
    pub length_input: String,
    pub url_input: String,
    pub key_output: Option<String>,
    pub card: Option<PreviewCard>,
    pub preview_generation: u64,
    pub is_fetching: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl TuiApp {
    pub fn new() -> Self {
        Self {
            dispatcher: Dispatcher::new(
                RouteTable::new(),
                SessionHistory::new(""),
                ScreenState::default(),
            ),
            input_mode: InputMode::Normal,
            length_input: "16".to_string(),
            url_input: String::new(),
            key_output: None,
            card: None,
            preview_generation: 0,
            is_fetching: false,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn visible_view(&self) -> Option<ViewId> {
        self.dispatcher.presenter().views.visible_view()
    }

    /// The form input belonging to the visible view, if it has one.
    pub fn active_input(&mut self) -> Option<&mut String> {
        match self.visible_view() {
            Some(ViewId::Key) => Some(&mut self.length_input),
            Some(ViewId::Preview) => Some(&mut self.url_input),
            _ => None,
        }
    }

    /// Start a new preview request, invalidating any in-flight one.
    pub fn next_preview_generation(&mut self) -> u64 {
        self.preview_generation += 1;
        self.is_fetching = true;
        self.preview_generation
    }

    pub fn apply_fetch(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Key(Ok(key)) => {
                self.key_output = Some(key);
            }
            FetchOutcome::Key(Err(e)) => {
                // Panel keeps its prior content.
                self.set_status(format!("Key request failed: {}", e));
            }
            FetchOutcome::Preview { generation, result } => {
                if generation != self.preview_generation {
                    // A newer request was started after this one; drop it.
                    return;
                }
                self.is_fetching = false;
                match result {
                    Ok(card) => {
                        self.card = Some(card);
                        self.clear_status();
                    }
                    Err(e) => {
                        self.set_status(format!("Preview failed: {}", e));
                    }
                }
            }
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
