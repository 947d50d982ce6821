//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};

/// Symbols that count towards the special-character class.
pub const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Presence flags for the four character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharacterClasses {
    pub fn detect(pwd: &str) -> Self {
        Self {
            upper: pwd.chars().any(|c| c.is_ascii_uppercase()),
            lower: pwd.chars().any(|c| c.is_ascii_lowercase()),
            digit: pwd.chars().any(|c| c.is_ascii_digit()),
            symbol: pwd.chars().any(|c| SYMBOLS.contains(c)),
        }
    }

    /// Number of classes present (0-4).
    pub fn count(&self) -> u8 {
        [self.upper, self.lower, self.digit, self.symbol]
            .into_iter()
            .map(u8::from)
            .sum()
    }

    pub fn all(&self) -> bool {
        self.count() == 4
    }

    /// One hint per missing class, in the order upper, lower, digit, symbol.
    pub fn suggestions(&self) -> Vec<String> {
        [
            (self.upper, "Add at least one uppercase letter."),
            (self.lower, "Add at least one lowercase letter."),
            (self.digit, "Add at least one number."),
            (self.symbol, "Add at least one special character (e.g., !@#$%)."),
        ]
        .into_iter()
        .filter(|(present, _)| !present)
        .map(|(_, hint)| hint.to_string())
        .collect()
    }
}

/// Detects the character classes of the password.
pub fn character_variety_section(password: &SecretString) -> CharacterClasses {
    CharacterClasses::detect(password.expose_secret())
}
