//! Session driver
//!
//! Title and intro once, then rounds until the player declines to continue.

use std::fmt;
use std::io::Write;
use std::thread;

use anyhow::Context;
use rand::Rng;

use super::{SessionError, play_round};
use crate::config::GameConfig;
use crate::core::{GameState, Outcome};
use crate::interactive::{Console, LineSource, play_again};
use crate::output::ColorRole;
use crate::output::display::{farewell, interrupted_farewell, title_banner};
use crate::wordlists::WordBank;

const INTRO: [&str; 4] = [
    "Initializing Hangman...",
    "Selecting a secret word...",
    "Preparing the gallows...",
    "Ready to play!",
];

/// Tally of finished rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::Won => self.wins += 1,
            Outcome::Lost => self.losses += 1,
            Outcome::InProgress => {}
        }
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rounds played: {} (won {}, lost {})",
            self.rounds, self.wins, self.losses
        )
    }
}

/// Print the intro lines, pausing between them when enabled
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn animate_intro<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    config: &GameConfig,
) -> std::io::Result<()> {
    for message in INTRO {
        console.say_as(ColorRole::Highlight, message)?;
        if config.enable_intro_delay {
            thread::sleep(config.intro_delay);
        }
    }
    Ok(())
}

/// Play rounds until the player answers N to the replay prompt
///
/// # Errors
///
/// Returns an error if input fails (including Ctrl-C and end of input), output
/// cannot be written, or a round hits an internal game error.
pub fn run_session<S, W, R>(
    console: &mut Console<S, W>,
    bank: &WordBank,
    config: &GameConfig,
    rng: &mut R,
) -> Result<SessionSummary, SessionError>
where
    S: LineSource,
    W: Write,
    R: Rng + ?Sized,
{
    let banner = title_banner(console.theme());
    console.say(banner)?;
    animate_intro(console, config)?;

    let mut summary = SessionSummary::default();
    loop {
        let state = GameState::with_max_attempts(bank.pick_word_with(rng), config.max_attempts);
        let outcome = play_round(console, state)?;
        summary.record(outcome);
        log::info!("{summary}");

        if !play_again(console)? {
            break;
        }
    }

    let message = farewell(&summary, console.theme());
    console.say(format!("\n{message}"))?;
    Ok(summary)
}

/// Turn a finished (or cut short) session into the process result
///
/// Interrupts and end of input are a normal way to leave: they print the
/// interruption farewell and succeed. Anything else is reported as a failure.
///
/// # Errors
///
/// Returns an error for game or output failures, or if the farewell cannot be
/// written.
pub fn conclude<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    result: Result<SessionSummary, SessionError>,
) -> anyhow::Result<()> {
    match result {
        Ok(summary) => {
            log::info!("session finished: {summary}");
            Ok(())
        }
        Err(err) if err.is_graceful() => {
            log::info!("session ended early: {err}");
            console.say(format!("\n\n{}", interrupted_farewell()))?;
            Ok(())
        }
        Err(err @ SessionError::Game(_)) => Err(err).context("internal game error"),
        Err(err) => Err(err.into()),
    }
}

/// Run a session and conclude it; the result maps directly to the exit status
///
/// # Errors
///
/// See [`conclude`].
pub fn play_session<S, W, R>(
    console: &mut Console<S, W>,
    bank: &WordBank,
    config: &GameConfig,
    rng: &mut R,
) -> anyhow::Result<()>
where
    S: LineSource,
    W: Write,
    R: Rng + ?Sized,
{
    let result = run_session(console, bank, config, rng);
    conclude(console, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameError;
    use crate::interactive::{InputError, ScriptedLines};
    use crate::output::Theme;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(
        words: &[&str],
        lines: ScriptedLines,
    ) -> (Result<SessionSummary, SessionError>, String) {
        let bank = WordBank::new(words.iter().copied()).unwrap();
        let mut console = Console::new(lines, Vec::new(), Theme::plain());
        let mut rng = StdRng::seed_from_u64(1);
        let result = run_session(&mut console, &bank, &GameConfig::headless(), &mut rng);
        (result, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn single_round_then_quit() {
        let (result, out) = session(&["AB"], ScriptedLines::new(["a", "b", "n"]));
        assert_eq!(
            result.unwrap(),
            SessionSummary {
                rounds: 1,
                wins: 1,
                losses: 0
            }
        );
        for line in INTRO {
            assert!(out.contains(line));
        }
        assert!(out.contains("Thanks for playing! Goodbye!"));
        assert!(out.contains("Rounds played: 1 (won 1, lost 0)"));
    }

    #[test]
    fn replay_starts_fresh_round() {
        let lines = ScriptedLines::new(["z", "a", "y", "z", "q", "w", "e", "r", "t", "N"]);
        let (result, out) = session(&["A"], lines);
        let summary = result.unwrap();
        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.losses, 1);
        // z was guessed in round one; a new round accepts it again
        assert!(!out.contains("You've already guessed that letter!"));
    }

    #[test]
    fn replay_prompt_rejects_other_answers() {
        let (result, out) = session(&["A"], ScriptedLines::new(["a", "yes", "n"]));
        assert_eq!(result.unwrap().rounds, 1);
        assert!(out.contains("Please enter 'Y' or 'N'."));
    }

    #[test]
    fn interrupt_ends_session_without_farewell() {
        let (result, out) = session(&["PYTHON"], ScriptedLines::new(["p"]).then_interrupt());
        assert!(matches!(
            result,
            Err(SessionError::Input(InputError::Interrupted))
        ));
        assert!(!out.contains("Goodbye"));
    }

    fn concluded(result: Result<SessionSummary, SessionError>) -> (anyhow::Result<()>, String) {
        let mut console = Console::new(ScriptedLines::new(["unused"]), Vec::new(), Theme::plain());
        let status = conclude(&mut console, result);
        (status, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn conclude_interrupt_prints_farewell_and_succeeds() {
        let (status, out) = concluded(Err(SessionError::Input(InputError::Interrupted)));
        assert!(status.is_ok());
        assert_eq!(out, "\n\nGame interrupted. Thanks for playing!\n");
    }

    #[test]
    fn conclude_end_of_input_prints_farewell_and_succeeds() {
        let (status, out) = concluded(Err(SessionError::Input(InputError::Closed)));
        assert!(status.is_ok());
        assert!(out.ends_with("Game interrupted. Thanks for playing!\n"));
    }

    #[test]
    fn conclude_game_error_fails() {
        let err = GameError::RoundAlreadyOver(Outcome::Won);
        let (status, out) = concluded(Err(SessionError::Game(err)));

        let message = format!("{:#}", status.unwrap_err());
        assert!(message.contains("internal game error"));
        assert!(message.contains("round is already over"));
        assert!(out.is_empty());
    }

    #[test]
    fn conclude_io_error_fails() {
        let err = std::io::Error::other("disk full");
        let (status, out) = concluded(Err(SessionError::Input(InputError::Io(err))));
        assert!(status.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn conclude_finished_session_is_quiet() {
        let (status, out) = concluded(Ok(SessionSummary::default()));
        assert!(status.is_ok());
        assert!(out.is_empty());
    }

    #[test]
    fn play_session_interrupted_mid_round_exits_cleanly() {
        let bank = WordBank::new(["PYTHON"]).unwrap();
        let lines = ScriptedLines::new(["p", "y"]).then_interrupt();
        let mut console = Console::new(lines, Vec::new(), Theme::plain());
        let mut rng = StdRng::seed_from_u64(3);

        let status = play_session(&mut console, &bank, &GameConfig::headless(), &mut rng);
        assert!(status.is_ok());

        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.ends_with("Guess a letter: \n\nGame interrupted. Thanks for playing!\n"));
        assert!(!out.contains("Goodbye"));
    }

    #[test]
    fn summary_display() {
        let mut summary = SessionSummary::default();
        summary.record(Outcome::Won);
        summary.record(Outcome::Lost);
        summary.record(Outcome::Lost);
        assert_eq!(summary.to_string(), "Rounds played: 3 (won 1, lost 2)");
    }
}
