//! TUI application state and logic

use crate::Error;
use crate::commands::Game;
use crate::core::GuessOutcome;
use crate::game::MAX_ATTEMPTS;
use crate::output::formatters::format_price;
use crate::session::{FileStore, Round, SessionStore};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S: SessionStore = FileStore> {
    pub game: Game<S>,
    pub round: Round,
    pub play_number: Option<u64>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results of the rounds finished in this TUI session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl<S: SessionStore> App<S> {
    /// Create the app around the player's current round
    ///
    /// # Errors
    ///
    /// Returns an error if no round can be loaded or started.
    pub fn new(mut game: Game<S>) -> Result<Self> {
        let round = game.current_round()?;
        let play_number = game.play_number();

        let mut app = Self {
            game,
            round,
            play_number,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };

        app.add_message("Welcome! Guess the price in four tries.", MessageStyle::Info);
        if app.round.state.is_finished() {
            app.input_mode = InputMode::Finished;
            app.add_message(
                "This round is already over. Press 'n' for a new product.",
                MessageStyle::Info,
            );
        } else {
            app.add_message(
                "Type a price (e.g. '4.99' or '4,99') and press Enter",
                MessageStyle::Info,
            );
        }

        Ok(app)
    }

    /// Submit the input buffer as a guess
    ///
    /// # Errors
    ///
    /// Returns an error only if the new state cannot be saved; rejected
    /// guesses are reported as messages.
    pub fn submit_guess(&mut self) -> Result<()> {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&mut self.round, &input) {
            Ok(attempt) => {
                let hint = match attempt.outcome() {
                    GuessOutcome::Higher => "go higher",
                    GuessOutcome::Lower => "go lower",
                    GuessOutcome::Correct => "spot on",
                };
                self.add_message(
                    &format!("{}: {} ({hint})", attempt.formatted_guess(), attempt.tier()),
                    MessageStyle::Info,
                );

                if self.round.state.is_finished() {
                    self.finish_round();
                }
                Ok(())
            }
            Err(Error::Guess(e)) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn finish_round(&mut self) {
        let used = self.round.state.attempts_used();
        self.stats.total_games += 1;
        self.input_mode = InputMode::Finished;

        if self.round.state.is_solved() {
            self.stats.games_won += 1;
            self.stats.guess_distribution[used] += 1;

            let celebration = match used {
                1 => "🎯 FIRST TRY! Are you the store manager? 🌟",
                2 => "🔥 Two guesses! Sharp eye! 🔥",
                3 => "✨ Three guesses! Nicely done! ✨",
                _ => "😅 Got it on the last try! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message(
                &format!(
                    "Out of guesses! The price was {}",
                    format_price(self.round.state.target())
                ),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for a new product or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a new round with a freshly picked product
    ///
    /// # Errors
    ///
    /// Returns an error if the round cannot be started.
    pub fn new_round(&mut self) -> Result<()> {
        self.round = self.game.new_round()?;
        self.play_number = self.game.play_number();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New product! Take your first guess.", MessageStyle::Info);
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SessionStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: SessionStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') => {
                    app.should_quit = true;
                }
                _ => match app.input_mode {
                    InputMode::Finished => {
                        if key.code == KeyCode::Char('n') {
                            app.new_round()?;
                        }
                    }
                    InputMode::Guessing => match key.code {
                        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == ',' => {
                            if app.input_buffer.len() < 12 {
                                app.input_buffer.push(c);
                            }
                        }
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Esc => {
                            app.input_buffer.clear();
                        }
                        KeyCode::Enter => {
                            app.submit_guess()?;
                        }
                        _ => {}
                    },
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::FixedPrice;
    use crate::session::MemoryStore;

    fn app(dir: &std::path::Path) -> App<MemoryStore> {
        let game = Game::new(
            MemoryStore::default(),
            "tui",
            Box::new(FixedPrice::new("Tea", 10.0).unwrap()),
            dir.join("counter"),
        );
        App::new(game).unwrap()
    }

    #[test]
    fn starts_in_guessing_mode() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(dir.path());

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.play_number, Some(1));
        assert_eq!(app.round.state.attempts_used(), 0);
    }

    #[test]
    fn invalid_guess_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        app.input_buffer = "1.2.3".to_string();
        app.submit_guess().unwrap();

        assert_eq!(app.round.state.attempts_used(), 0);
        assert!(app.input_buffer.is_empty());
        assert!(matches!(
            app.messages.last().unwrap().style,
            MessageStyle::Error
        ));
    }

    #[test]
    fn winning_updates_stats() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        app.input_buffer = "5".to_string();
        app.submit_guess().unwrap();
        app.input_buffer = "10,2".to_string();
        app.submit_guess().unwrap();

        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
    }

    #[test]
    fn new_round_resets() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        for guess in ["1", "2", "3", "4"] {
            app.input_buffer = guess.to_string();
            app.submit_guess().unwrap();
        }
        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.games_won, 0);

        app.new_round().unwrap();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.round.state.attempts_used(), 0);
        assert_eq!(app.play_number, Some(2));
    }
}
