//! TUI rendering with ratatui
//!
//! Board, messages and status bar for the price guessing game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{FeedbackTier, GuessOutcome};
use crate::game::MAX_ATTEMPTS;
use crate::output::formatters::{format_price, share_emoji};
use crate::session::SessionStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: SessionStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Messages and stats
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

const fn tier_color(tier: FeedbackTier) -> Color {
    match tier {
        FeedbackTier::Green => Color::Green,
        FeedbackTier::Yellow => Color::Yellow,
        FeedbackTier::Orange => Color::Rgb(255, 140, 0),
        FeedbackTier::Red => Color::Red,
    }
}

fn render_header<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let title = match app.play_number {
        Some(n) => format!("💶 PRICEDLE #{n}"),
        None => "💶 PRICEDLE".to_string(),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let state = &app.round.state;

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Product: "),
            Span::styled(
                app.round.product.title.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    for (i, slot) in state.attempts().iter().enumerate() {
        let line = match slot {
            Some(attempt) => {
                let hint = match attempt.outcome() {
                    GuessOutcome::Higher => "⬆ higher",
                    GuessOutcome::Lower => "⬇ lower",
                    GuessOutcome::Correct => "✓ correct",
                };
                Line::from(vec![
                    Span::raw(format!("  {}. ", i + 1)),
                    Span::styled(
                        format!("{:>10}", attempt.formatted_guess()),
                        Style::default()
                            .fg(Color::Black)
                            .bg(tier_color(attempt.tier()))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(hint, Style::default().fg(Color::White)),
                ])
            }
            None => Line::from(Span::styled(
                format!("  {}. {:>10}", i + 1, "·····"),
                Style::default().fg(Color::DarkGray),
            )),
        };
        lines.push(line);
    }

    if state.is_finished() {
        lines.push(Line::from(""));
        let verdict = if state.is_solved() {
            Span::styled(
                format!("Solved! The price was {}", format_price(state.target())),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!("The price was {}", format_price(state.target())),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        };
        lines.push(Line::from(verdict));
        lines.push(Line::from(format!("Share: {}", share_emoji(state))));
    }

    let board = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(board, area);
}

fn render_info_panel<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(5),    // Messages
            Constraint::Length(4), // Stats
        ])
        .split(area);

    render_attempts_gauge(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

fn render_attempts_gauge<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let used = app.round.state.attempts_used();
    let percent = (used * 100 / MAX_ATTEMPTS) as u16;

    let gauge = Gauge::default()
        .block(Block::default().title(" Attempts ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{MAX_ATTEMPTS} used"));

    f.render_widget(gauge, area);
}

fn render_messages<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_stats<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let stats = &app.stats;
    let win_rate = if stats.total_games > 0 {
        stats.games_won as f64 / stats.total_games as f64 * 100.0
    } else {
        0.0
    };

    let distribution = (1..=MAX_ATTEMPTS)
        .map(|n| format!("{n}:{}", stats.guess_distribution[n]))
        .collect::<Vec<_>>()
        .join("  ");

    let content = vec![
        Line::from(format!(
            "Games: {} | Win Rate: {win_rate:.0}%",
            stats.total_games
        )),
        Line::from(distribution),
    ];

    let paragraph = Paragraph::new(content)
        .block(Block::default().title(" Stats ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_input<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " Round over | Press 'n' for a new product or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Your guess (e.g. 4.99) | Enter to submit, Esc to clear ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: SessionStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let help_text = format!(
        "Session: {} | {} left | q: Quit",
        app.game.session_key(),
        app.round.state.attempts_left()
    );

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
