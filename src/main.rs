//! Hangman - CLI
//!
//! Plays hangman in the terminal until the player declines another round.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use hangman::{
    commands::play_session,
    config::GameConfig,
    interactive::{Console, LineSource, ReaderLines, TerminalLines, interrupt},
    output::Theme,
    wordlists::WordBank,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Skip the pauses in the intro animation
    #[arg(long)]
    no_intro: bool,

    /// Seed for word selection (reproducible rounds)
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            enable_intro_delay: !self.no_intro,
            color: !self.no_color,
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    interrupt::install_handler().context("failed to install Ctrl-C handler")?;

    let cli = Cli::parse();
    let config = cli.config();

    let bank = WordBank::embedded().context("failed to load word bank")?;
    config.validate().context("invalid configuration")?;

    if io::stdin().is_terminal() {
        play(TerminalLines::new(), &bank, &config)
    } else {
        play(ReaderLines::new(io::stdin().lock()), &bank, &config)
    }
}

fn play<S: LineSource>(lines: S, bank: &WordBank, config: &GameConfig) -> Result<()> {
    let mut console = Console::new(lines, io::stdout(), Theme::from_flag(config.color));
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    play_session(&mut console, bank, config, &mut rng)
}
