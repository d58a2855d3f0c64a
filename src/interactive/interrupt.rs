//! Process-wide Ctrl-C handling
//!
//! `TerminalLines` sees Ctrl-C as a key press while a line is being typed. Every
//! other moment (piped input, intro pauses, output) gets a real SIGINT, which the
//! handler installed here turns into the interruption farewell and exit code 0.

use std::io::{self, Write};
use std::process;

use crate::output::display::interrupted_farewell;

/// Write the farewell shown when the player interrupts the game
///
/// # Errors
///
/// Returns an error if the output cannot be written or flushed.
pub fn write_interrupted_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n\n{}", interrupted_farewell())?;
    out.flush()
}

/// Install the SIGINT handler; call once at startup, before any output
///
/// # Errors
///
/// Returns an error if a handler is already installed or the OS refuses it.
pub fn install_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        let mut out = io::stdout().lock();
        if let Err(e) = write_interrupted_farewell(&mut out) {
            log::warn!("failed to write farewell: {e}");
        }
        log::info!("interrupted by signal");
        process::exit(0);
    })
}
