pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use crossterm::event::KeyCode;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::warn;

use crate::app::{AppContext, Result};
use crate::nav::dispatcher::Dispatch;
use crate::nav::{ActionKind, ViewId};

use self::app::{FetchOutcome, InputMode, TuiApp};
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut tui_app = TuiApp::new();
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchOutcome>();

    // Startup navigation, replayed like an initial page load.
    tui_app.dispatcher.dispatch("", true);

    loop {
        terminal.draw(|frame| layout::render(frame, &tui_app))?;

        // Merge completed API calls before handling the next input.
        while let Ok(outcome) = rx.try_recv() {
            tui_app.apply_fetch(outcome);
        }

        if let AppEvent::Key(key) = event_handler.next()? {
            match tui_app.input_mode {
                InputMode::Editing => handle_editing_key(&mut tui_app, &ctx, &tx, key),
                InputMode::Normal => handle_normal_key(&mut tui_app, &ctx, &tx, key),
            }
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_normal_key(
    tui_app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    tx: &mpsc::UnboundedSender<FetchOutcome>,
    key: crossterm::event::KeyEvent,
) {
    match Action::from(key) {
        Action::Quit => {
            tui_app.should_quit = true;
        }
        Action::GoHome => {
            navigate(tui_app, "");
        }
        Action::GoKey => {
            navigate(tui_app, "key");
        }
        Action::GoPreview => {
            navigate(tui_app, "og");
        }
        Action::GoSteps => {
            navigate(tui_app, "steps");
        }
        Action::Back => {
            tui_app.dispatcher.back();
        }
        Action::Forward => {
            tui_app.dispatcher.forward();
        }
        Action::Edit => {
            if tui_app.active_input().is_some() {
                tui_app.input_mode = InputMode::Editing;
                tui_app.clear_status();
            } else {
                warn!(view = ?tui_app.visible_view(), "no form on this view");
            }
        }
        Action::Submit => {
            submit(tui_app, ctx, tx);
        }
        Action::OpenLink => {
            open_card_link(tui_app);
        }
        Action::None => {}
    }
}

fn handle_editing_key(
    tui_app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    tx: &mpsc::UnboundedSender<FetchOutcome>,
    key: crossterm::event::KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            tui_app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            tui_app.input_mode = InputMode::Normal;
            submit(tui_app, ctx, tx);
        }
        KeyCode::Backspace => {
            if let Some(input) = tui_app.active_input() {
                input.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = tui_app.active_input() {
                input.push(c);
            }
        }
        _ => {}
    }
}

/// Explicit navigation to a route string; the currently-active path is a
/// history no-op inside the dispatcher, so repeated keypresses are safe.
fn navigate(tui_app: &mut TuiApp, path: &str) {
    tui_app.dispatcher.dispatch(path, false);
}

/// Dispatch the action route belonging to the visible view's form, then
/// execute the side effect it names.
fn submit(
    tui_app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    tx: &mpsc::UnboundedSender<FetchOutcome>,
) {
    let action_path = match tui_app.visible_view() {
        Some(ViewId::Key) => "key/get",
        Some(ViewId::Preview) => "og/get",
        other => {
            warn!(view = ?other, "nothing to submit on this view");
            return;
        }
    };

    if let Dispatch::Action(action) = tui_app.dispatcher.dispatch(action_path, false) {
        run_action(tui_app, ctx, tx, action);
    }
}

fn run_action(
    tui_app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    tx: &mpsc::UnboundedSender<FetchOutcome>,
    action: ActionKind,
) {
    match action {
        ActionKind::GenerateKey => {
            let length: u32 = match tui_app.length_input.trim().parse() {
                Ok(n) => n,
                Err(_) => {
                    tui_app.set_status(format!(
                        "Invalid length: {}",
                        tui_app.length_input.trim()
                    ));
                    return;
                }
            };

            let ctx = ctx.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = ctx.fetcher.fetch_key(length).await;
                let _ = tx.send(FetchOutcome::Key(result));
            });
        }
        ActionKind::FetchPreview => {
            let url = tui_app.url_input.trim().to_string();
            if url.is_empty() {
                tui_app.set_status("No URL to preview".to_string());
                return;
            }

            let generation = tui_app.next_preview_generation();
            let ctx = ctx.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = ctx.preview(&url).await;
                let _ = tx.send(FetchOutcome::Preview { generation, result });
            });
        }
    }
}

fn open_card_link(tui_app: &mut TuiApp) {
    let href = match &tui_app.card {
        Some(card) => card.href().to_string(),
        None => return,
    };
    if let Err(e) = open::that(&href) {
        tui_app.set_status(format!("Failed to open browser: {}", e));
    }
}
