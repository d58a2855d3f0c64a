//! Gallows ASCII art
//!
//! One frame per incorrect-guess count: frame 0 is the empty gallows, the last
//! frame is the complete figure. Every frame draws everything the previous one did.

use crate::config::ConfigError;

/// Gallows frames, indexed by number of incorrect guesses
pub const FRAMES: [&str; 7] = [
    r"     +---+
     |   |
         |
         |
         |
         |
    =======",
    r"     +---+
     |   |
     O   |
         |
         |
         |
    =======",
    r"     +---+
     |   |
     O   |
     |   |
         |
         |
    =======",
    r"     +---+
     |   |
     O   |
    /|   |
         |
         |
    =======",
    r"     +---+
     |   |
     O   |
    /|\  |
         |
         |
    =======",
    r"     +---+
     |   |
     O   |
    /|\  |
    /    |
         |
    =======",
    r"     +---+
     |   |
     O   |
    /|\  |
    / \  |
         |
    =======",
];

/// Frame for the given number of incorrect guesses
///
/// # Panics
/// Panics if `incorrect_count` is greater than the number of drawable attempts.
/// Callers derive the count from `GameState`, which never exceeds its budget.
#[must_use]
pub fn gallows_stage(incorrect_count: u8) -> &'static str {
    let index = usize::from(incorrect_count);
    assert!(
        index < FRAMES.len(),
        "gallows stage {index} out of range 0..={}",
        FRAMES.len() - 1
    );
    FRAMES[index]
}

/// Ensure there is exactly one frame per attempt plus the empty gallows
///
/// # Errors
/// Returns `ConfigError::FrameCountMismatch` otherwise.
pub const fn check_frames(max_attempts: usize) -> Result<(), ConfigError> {
    if FRAMES.len() == max_attempts + 1 {
        Ok(())
    } else {
        Err(ConfigError::FrameCountMismatch {
            frames: FRAMES.len(),
            max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_ATTEMPTS;

    /// Coordinates of every non-blank cell in a frame
    fn ink(frame: &str) -> Vec<(usize, usize, char)> {
        frame
            .lines()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|(_, c)| !c.is_whitespace())
                    .map(move |(col, c)| (row, col, c))
            })
            .collect()
    }

    #[test]
    fn one_frame_per_attempt_plus_empty() {
        assert_eq!(FRAMES.len(), usize::from(MAX_ATTEMPTS) + 1);
        assert_eq!(check_frames(usize::from(MAX_ATTEMPTS)), Ok(()));
        assert!(check_frames(5).is_err());
    }

    #[test]
    fn frames_are_strict_supersets() {
        for k in 1..FRAMES.len() {
            let before = ink(FRAMES[k - 1]);
            let after = ink(FRAMES[k]);
            for cell in &before {
                assert!(after.contains(cell), "frame {k} lost {cell:?}");
            }
            assert!(after.len() > before.len(), "frame {k} adds nothing");
        }
    }

    #[test]
    fn frames_share_shape() {
        for frame in FRAMES {
            assert_eq!(frame.lines().count(), 7);
        }
    }

    #[test]
    fn stage_indexes_frames() {
        assert_eq!(gallows_stage(0), FRAMES[0]);
        assert_eq!(gallows_stage(MAX_ATTEMPTS), FRAMES[6]);
        assert!(!gallows_stage(0).contains('O'));
        assert!(gallows_stage(6).contains("/ \\"));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn stage_out_of_range_panics() {
        let _ = gallows_stage(7);
    }
}
