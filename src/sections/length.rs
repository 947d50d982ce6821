//! Length section - gates passwords that are too long or too short.

use secrecy::{ExposeSecret, SecretString};

pub const MAX_LENGTH: usize = 50;
pub const MIN_LENGTH: usize = 8;

/// Characters kept when echoing an over-length password.
const ECHO_PREFIX_LEN: usize = 10;

/// Result of the length gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthGate {
    /// Longer than [`MAX_LENGTH`]; carries the truncated echo.
    TooLong { echo: String },
    /// Shorter than [`MIN_LENGTH`].
    TooShort,
    /// Within bounds; carries the length in characters.
    Accepted(usize),
}

/// Checks the password length against both bounds, maximum first.
pub fn length_section(password: &SecretString) -> LengthGate {
    let pwd = password.expose_secret();
    let len = pwd.chars().count();

    if len > MAX_LENGTH {
        let prefix: String = pwd.chars().take(ECHO_PREFIX_LEN).collect();
        return LengthGate::TooLong {
            echo: format!("{}...", prefix),
        };
    }
    if len < MIN_LENGTH {
        return LengthGate::TooShort;
    }
    LengthGate::Accepted(len)
}

pub fn too_long_suggestions() -> Vec<String> {
    vec![format!(
        "Password is too long. Maximum length is {} characters.",
        MAX_LENGTH
    )]
}

pub fn too_short_suggestions() -> Vec<String> {
    vec![
        format!("Password must be at least {} characters long.", MIN_LENGTH),
        "Password must contain at least one uppercase letter, one lowercase letter, \
         one number, and one special character."
            .to_string(),
    ]
}
