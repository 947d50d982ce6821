//! Scoring section - maps length bracket and class count to a score.

use super::variety::CharacterClasses;
use crate::types::{MAX_SCORE, PasswordScore};

/// Length from which a password earns the extra point.
const LONG_BONUS_LENGTH: usize = 12;
/// Shortest length scored by class count.
const COUNTED_LENGTH: usize = 10;

/// Score from the length bracket alone.
///
/// Only meaningful for lengths already accepted by the length gate.
fn bracket_score(len: usize, classes: &CharacterClasses) -> u8 {
    if len == 8 {
        if classes.all() { MAX_SCORE } else { 0 }
    } else if len < COUNTED_LENGTH {
        0
    } else {
        let bonus = u8::from(len >= LONG_BONUS_LENGTH);
        (classes.count() + bonus).min(MAX_SCORE)
    }
}

/// Final score for a password of `len` characters.
///
/// Two classes or fewer pins the score to 1 whatever the bracket gave,
/// so a 9-character password with three classes (0) ranks below an
/// 8-character one with two (1).
pub fn scoring_section(len: usize, classes: &CharacterClasses) -> PasswordScore {
    if classes.count() <= 2 {
        return PasswordScore::new(1);
    }
    PasswordScore::new(bracket_score(len, classes))
}
