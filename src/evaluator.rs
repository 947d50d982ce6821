//! Password strength evaluator - main analysis logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    LengthGate, character_variety_section, length_section, scoring_section,
    too_long_suggestions, too_short_suggestions,
};
use crate::types::{PasswordAnalysisResult, PasswordScore, PasswordStrength};

/// Analyzes password strength and returns its tier, score and suggestions.
///
/// Never fails: over-length input is reported as the `invalid` tier.
///
/// # Arguments
/// * `password` - The password to analyze
///
/// # Returns
/// A `PasswordAnalysisResult` whose `password_echo` is the input, truncated
/// to a 10-character prefix plus `...` when the input is over-length.
pub fn analyze_password(password: &SecretString) -> PasswordAnalysisResult {
    let len = match length_section(password) {
        LengthGate::TooLong { echo } => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password rejected: over maximum length");
            return PasswordAnalysisResult {
                password_echo: echo,
                strength: PasswordStrength::Invalid,
                score: PasswordScore::new(0),
                suggestions: too_long_suggestions(),
            };
        }
        LengthGate::TooShort => {
            return PasswordAnalysisResult {
                password_echo: password.expose_secret().to_string(),
                strength: PasswordStrength::VeryWeak,
                score: PasswordScore::new(0),
                suggestions: too_short_suggestions(),
            };
        }
        LengthGate::Accepted(len) => len,
    };

    let classes = character_variety_section(password);
    let score = scoring_section(len, &classes);
    let strength = PasswordStrength::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = score.value(),
        strength = strength.as_str(),
        "password analyzed"
    );

    PasswordAnalysisResult {
        password_echo: password.expose_secret().to_string(),
        strength,
        score,
        suggestions: classes.suggestions(),
    }
}

/// Convenience wrapper for callers holding a plain string.
pub fn analyze_password_str(password: &str) -> PasswordAnalysisResult {
    analyze_password(&SecretString::new(password.to_string().into()))
}

/// Async version that sends the analysis result via channel.
///
/// Nothing is sent when `token` is cancelled before the result is delivered.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordAnalysisResult>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("password analysis cancelled before start");
        return;
    }

    let analysis = analyze_password(password);

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password analysis cancelled before delivery");
        }
        sent = tx.send(analysis) => {
            if let Err(_e) = sent {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send password analysis result: {}", _e);
            }
        }
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_analyze_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        analyze_password_tx(&secret("TestPass123!"), token, tx).await;

        let analysis = rx.recv().await.expect("Should receive analysis");
        assert_eq!(analysis.strength, PasswordStrength::VeryStrong);
    }

    #[tokio::test]
    async fn test_analyze_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        analyze_password_tx(&secret("TestPass123!"), token, tx).await;

        // sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_analyze_password_tx_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        analyze_password_tx(&secret("TestPass123!"), CancellationToken::new(), tx).await;
    }
}
