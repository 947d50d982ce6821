//! URL and password analysis library
//!
//! This library provides the pure analysis core of a URL parsing and
//! account registration service:
//!
//! - URL syntax validation and decomposition into components
//! - Tiered password strength analysis with improvement suggestions
//! - Email shape checks and a registration gate built on both
//!
//! # Features
//!
//! - `async` (default): Enables channel delivery with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `URLPWD_MIN_SCORE`: lowest password score accepted at registration (default: `3`)
//! - `URLPWD_MAX_FULLNAME_LEN`: maximum full name length (default: `100`)
//! - `URLPWD_MAX_EMAIL_LEN`: maximum email length (default: `255`)
//!
//! # Example
//!
//! ```rust
//! use url_pwd_analysis::{analyze_password, decompose_url, validate_url, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let url = "https://www.example.com:8080/path?param=value#section";
//! assert!(validate_url(url));
//! let parts = decompose_url(url);
//! assert_eq!(parts.port, Some(8080));
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let analysis = analyze_password(&password);
//! assert_eq!(analysis.strength, PasswordStrength::VeryStrong);
//! println!("Suggestions: {:?}", analysis.suggestions);
//! ```

// Internal modules
mod config;
mod email;
mod error;
mod evaluator;
mod registration;
mod sections;
mod types;
mod url;

// Public API
pub use config::RegistrationPolicy;
pub use email::is_valid_email;
pub use error::{ConfigError, RegistrationError, UrlError};
pub use evaluator::{analyze_password, analyze_password_str};
pub use registration::{Registration, SanitizedRegistration, check_registration};
pub use sections::{MAX_LENGTH as MAX_PASSWORD_LENGTH, MIN_LENGTH as MIN_PASSWORD_LENGTH};
pub use types::{MAX_SCORE, PasswordAnalysisResult, PasswordScore, PasswordStrength};
pub use crate::url::{
    QueryParams, UrlComponents, decompose_url, is_secure_url, parse_query, parse_url,
    validate_url,
};

#[cfg(feature = "async")]
pub use evaluator::analyze_password_tx;
