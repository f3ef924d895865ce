use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::nav::ViewId;
use crate::preview::PreviewCard;
use crate::tui::app::{InputMode, TuiApp};

pub fn render(frame: &mut Frame, app: &TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(5),    // Active view
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_active_view(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

fn render_title_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let path = app.dispatcher.state().current_path.clone();
    let line = Line::from(vec![
        Span::styled(
            app.dispatcher.presenter().title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  /{}", path), Style::default().fg(Color::DarkGray)),
    ]);
    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render whichever view is visible. The presenter guarantees at most one,
/// so this is a straight lookup, not a diff.
fn render_active_view(frame: &mut Frame, app: &TuiApp, area: Rect) {
    match app.visible_view() {
        Some(ViewId::Home) => render_home(frame, area),
        Some(ViewId::Key) => render_key(frame, app, area),
        Some(ViewId::Preview) => render_preview(frame, app, area),
        Some(ViewId::Steps) => render_steps(frame, area),
        None => {}
    }
}

fn render_home(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("Welcome to Linkcard."),
        Line::from(""),
        Line::from("  k  key generator"),
        Line::from("  l  link preview"),
        Line::from("  s  steps"),
        Line::from(""),
        Line::from("  Backspace goes back, ] goes forward, q quits."),
    ];
    let block = Block::default().title(" Home ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_key(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_input(frame, app, chunks[0], " Length ", &app.length_input);

    let body = match &app.key_output {
        Some(key) => Paragraph::new(key.clone()).wrap(Wrap { trim: false }),
        None => Paragraph::new("Press i to edit the length, Enter to generate.")
            .style(Style::default().fg(Color::DarkGray)),
    };
    let block = Block::default().title(" Key ").borders(Borders::ALL);
    frame.render_widget(body.block(block), chunks[1]);
}

fn render_preview(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_input(frame, app, chunks[0], " URL ", &app.url_input);

    let lines = match &app.card {
        Some(card) => card_lines(card),
        None if app.is_fetching => vec![Line::from("Fetching...")],
        None => vec![Line::styled(
            "Press i to edit the URL, Enter to fetch a preview.",
            Style::default().fg(Color::DarkGray),
        )],
    };
    let block = Block::default().title(" Link Preview ").borders(Borders::ALL);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        chunks[1],
    );
}

fn render_steps(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("1. Make sure the API server is running (api_base in the config)."),
        Line::from("2. Open the key generator (k), set a length and press Enter."),
        Line::from("3. Open the link preview (l), enter a URL and press Enter."),
        Line::from("4. Press o on a fetched card to open the link in your browser."),
    ];
    let block = Block::default().title(" Steps ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_input(frame: &mut Frame, app: &TuiApp, area: Rect, title: &str, value: &str) {
    let editing = app.input_mode == InputMode::Editing;
    let border_style = if editing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if editing {
        format!("{}\u{2588}", value)
    } else {
        value.to_string()
    };
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn card_lines(card: &PreviewCard) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match card {
        PreviewCard::Structured {
            href,
            image,
            site_name,
            title,
            description,
        } => {
            if let Some(image) = image {
                let label = match &image.alt {
                    Some(alt) => format!("[image] {} ({})", image.url, alt),
                    None => format!("[image] {}", image.url),
                };
                lines.push(Line::styled(label, Style::default().fg(Color::DarkGray)));
            }
            if let Some(site_name) = site_name {
                lines.push(Line::styled(
                    site_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            }
            lines.push(Line::styled(
                title.clone(),
                Style::default().fg(Color::Cyan),
            ));
            if let Some(description) = description {
                lines.push(Line::from(description.clone()));
            }
            lines.push(Line::styled(
                href.clone(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ));
        }
        PreviewCard::Bare { href, label } => {
            lines.push(Line::from(label.clone()));
            lines.push(Line::styled(
                href.clone(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ));
        }
    }
    lines
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let text = if let Some(message) = &app.status_message {
        message.clone()
    } else if app.input_mode == InputMode::Editing {
        "EDIT  Enter submits, Esc cancels".to_string()
    } else if app.is_fetching {
        "Fetching preview...".to_string()
    } else {
        "h/k/l/s views | i edit | Enter submit | Backspace back | o open | q quit".to_string()
    };
    let style = if app.status_message.is_some() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}
