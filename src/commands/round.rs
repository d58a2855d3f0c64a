//! Single round driver
//!
//! Render, read a guess, apply it; repeat until the round is won or lost.

use std::io::Write;

use super::SessionError;
use crate::core::{GameState, Outcome};
use crate::interactive::{Console, LineSource, read_guess};
use crate::output::display::{loss_message, round_screen, win_message};

/// Play one round to completion and report its outcome
///
/// # Errors
///
/// Returns an error if input fails (including interrupts) or if the game state
/// refuses a guess, which would indicate a bug in the validation loop.
pub fn play_round<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    mut state: GameState,
) -> Result<Outcome, SessionError> {
    log::debug!(
        "round started: {} letters, {} attempts",
        state.secret().len(),
        state.max_attempts()
    );
    log::trace!("secret word: {}", state.secret());

    while !state.outcome().is_terminal() {
        let screen = round_screen(&state, console.theme());
        console.say(screen)?;

        let letter = read_guess(console, &state)?;
        state.apply_guess(letter)?;
    }

    let outcome = state.outcome();
    if outcome == Outcome::Won {
        let message = win_message(state.secret(), console.theme());
        console.say(format!("\n{message}"))?;
    } else {
        let message = loss_message(&state, console.theme());
        console.say(format!("{message}\n"))?;
    }

    log::debug!(
        "round {outcome}: {} misses, word {}",
        state.incorrect_guesses(),
        state.secret()
    );
    Ok(outcome)
}
