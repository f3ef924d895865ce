use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::app::Result;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn next(&self) -> Result<AppEvent> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                return Ok(AppEvent::Key(key));
            }
        }
        Ok(AppEvent::Tick)
    }
}

/// Normal-mode key actions. Editing-mode keys are handled directly by the
/// run loop and never go through this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    GoHome,
    GoKey,
    GoPreview,
    GoSteps,
    Back,
    Forward,
    Edit,
    Submit,
    OpenLink,
    None,
}

impl From<KeyEvent> for Action {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('h') => Action::GoHome,
            KeyCode::Char('k') => Action::GoKey,
            KeyCode::Char('l') => Action::GoPreview,
            KeyCode::Char('s') => Action::GoSteps,
            KeyCode::Backspace | KeyCode::Char('[') => Action::Back,
            KeyCode::Char(']') => Action::Forward,
            KeyCode::Char('i') | KeyCode::Char('e') => Action::Edit,
            KeyCode::Enter => Action::Submit,
            KeyCode::Char('o') => Action::OpenLink,
            _ => Action::None,
        }
    }
}
