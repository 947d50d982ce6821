//! Error types for the gating operations built on top of the analyzers.

use thiserror::Error;

use crate::types::PasswordStrength;

/// Rejections produced by [`parse_url`](crate::parse_url).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// `url` is kept for the caller but left out of the message.
    #[error("Invalid URL format")]
    InvalidFormat { url: String },
    /// `host` is the authority with any userinfo removed.
    #[error("Domain names cannot contain underscores: {host}")]
    UnderscoreInDomain { host: String },
}

/// Rejections produced by [`check_registration`](crate::check_registration).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Password must be less than {max} characters (got {current_length})")]
    PasswordTooLong { max: usize, current_length: usize },
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password not strong enough: {strength}")]
    WeakPassword {
        strength: PasswordStrength,
        suggestions: Vec<String>,
    },
    #[error("Input length exceeds maximum allowed")]
    InputTooLong,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}
