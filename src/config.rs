//! Registration policy configuration.
//!
//! Values come from [`RegistrationPolicy::default`] or, when deployed, from
//! environment overrides read once by [`RegistrationPolicy::from_env`].

use crate::error::ConfigError;
use crate::types::MAX_SCORE;

pub const MIN_SCORE_VAR: &str = "URLPWD_MIN_SCORE";
pub const MAX_FULLNAME_LEN_VAR: &str = "URLPWD_MAX_FULLNAME_LEN";
pub const MAX_EMAIL_LEN_VAR: &str = "URLPWD_MAX_EMAIL_LEN";

/// Thresholds applied by [`check_registration`](crate::check_registration).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationPolicy {
    /// Lowest accepted password score.
    pub min_score: u8,
    /// Maximum sanitized full name length, in characters.
    pub max_fullname_len: usize,
    /// Maximum sanitized email length, in characters.
    pub max_email_len: usize,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            min_score: 3,
            max_fullname_len: 100,
            max_email_len: 255,
        }
    }
}

impl RegistrationPolicy {
    /// Builds a policy from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `URLPWD_MIN_SCORE` (default: `3`, at most `4`)
    /// - `URLPWD_MAX_FULLNAME_LEN` (default: `100`)
    /// - `URLPWD_MAX_EMAIL_LEN` (default: `255`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but cannot
    /// be parsed, or if the minimum score is above the maximum score.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let min_score = read_var(MIN_SCORE_VAR, defaults.min_score)?;
        if min_score > MAX_SCORE {
            return Err(ConfigError::InvalidValue {
                var: MIN_SCORE_VAR,
                value: min_score.to_string(),
            });
        }

        let policy = Self {
            min_score,
            max_fullname_len: read_var(MAX_FULLNAME_LEN_VAR, defaults.max_fullname_len)?,
            max_email_len: read_var(MAX_EMAIL_LEN_VAR, defaults.max_email_len)?,
        };

        #[cfg(feature = "tracing")]
        tracing::info!("Registration policy loaded: {:?}", policy);

        Ok(policy)
    }
}

fn read_var<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var,
            value,
        }),
        Err(_) => Ok(default),
    }
}
