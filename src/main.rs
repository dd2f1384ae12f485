//! Pricedle - CLI
//!
//! Daily price guessing game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pricedle::{
    commands::{Game, classify_guess, run_simple},
    config::{DEFAULT_COUNTER_FILE, DEFAULT_SESSION, DEFAULT_STATE_DIR, GameConfig},
    output::{formatters::attempt_line, print_classification, print_state, share_json},
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pricedle",
    about = "Guess the price of a product in four tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding session files
    #[arg(long, global = true, env = "PRICEDLE_STATE_DIR", default_value = DEFAULT_STATE_DIR)]
    state_dir: PathBuf,

    /// File holding the play counter
    #[arg(long, global = true, env = "PRICEDLE_COUNTER", default_value = DEFAULT_COUNTER_FILE)]
    counter_file: PathBuf,

    /// Price list to pick products from (`title;price_cents` per line)
    #[arg(short, long, global = true, env = "PRICEDLE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Fixed price to guess instead of picking a product
    #[arg(short, long, global = true, env = "PRICEDLE_PRICE")]
    price: Option<f64>,

    /// Session key identifying the player
    #[arg(short, long, global = true, default_value = DEFAULT_SESSION)]
    session: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Start a new round with a freshly picked product
    New,

    /// Submit a guess for the current round
    Guess {
        /// Price guess, e.g. 4.99 or 4,99
        value: String,
    },

    /// Show the current round
    Show,

    /// Print the share summary of the current round as JSON
    Share,

    /// Classify a guess against a price without playing
    Classify {
        /// Price guess
        guess: String,

        /// True price
        target: String,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            state_dir: self.state_dir.clone(),
            counter_file: self.counter_file.clone(),
            catalog: self.catalog.clone(),
            price: self.price,
            session: self.session.clone(),
        }
    }
}

fn init_logging(default_directive: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_directive.parse()?))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    // Log output would corrupt the alternate screen
    let directive = if matches!(command, Commands::Play) {
        "pricedle=warn"
    } else {
        "pricedle=info"
    };
    init_logging(directive)?;

    let config = cli.config();

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple(&mut Game::open(&config)?),
        Commands::New => run_new_command(&config),
        Commands::Guess { value } => run_guess_command(&config, &value),
        Commands::Show => run_show_command(&config),
        Commands::Share => run_share_command(&config),
        Commands::Classify { guess, target } => run_classify_command(&guess, &target),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use pricedle::interactive::{App, run_tui};

    let app = App::new(Game::open(config)?)?;
    run_tui(app)
}

fn run_new_command(config: &GameConfig) -> Result<()> {
    let mut game = Game::open(config)?;
    let round = game.new_round()?;
    print_state(&round.state, &round.product, game.play_number());
    Ok(())
}

fn run_guess_command(config: &GameConfig, value: &str) -> Result<()> {
    let mut game = Game::open(config)?;
    let mut round = game.current_round()?;

    let attempt = game
        .submit(&mut round, value)
        .with_context(|| format!("guess '{value}' was not accepted"))?;

    println!("{}", attempt_line(&attempt));
    print_state(&round.state, &round.product, game.play_number());
    Ok(())
}

fn run_show_command(config: &GameConfig) -> Result<()> {
    let mut game = Game::open(config)?;
    let round = game.current_round()?;
    print_state(&round.state, &round.product, game.play_number());
    Ok(())
}

fn run_share_command(config: &GameConfig) -> Result<()> {
    let mut game = Game::open(config)?;
    let round = game.current_round()?;
    let counter = game.play_number().unwrap_or(1);
    println!("{}", share_json(&round.state, counter)?);
    Ok(())
}

fn run_classify_command(guess: &str, target: &str) -> Result<()> {
    let result = classify_guess(guess, target).map_err(|e| anyhow::anyhow!(e))?;
    print_classification(&result);
    Ok(())
}
