//! Registration gate: rejects bad submissions before hashing or storage.

use secrecy::{ExposeSecret, SecretString};

use crate::config::RegistrationPolicy;
use crate::email::is_valid_email;
use crate::error::RegistrationError;
use crate::evaluator::analyze_password;
use crate::sections::MAX_LENGTH;

/// Characters stripped from free-text fields.
const FORBIDDEN_CHARS: [char; 4] = [';', '<', '>', '&'];

/// A registration submission as received.
#[derive(Debug)]
pub struct Registration {
    pub email: String,
    pub password: SecretString,
    pub fullname: String,
}

/// A submission that passed every check, ready for hashing and storage.
#[derive(Debug)]
pub struct SanitizedRegistration {
    pub email: String,
    pub password: SecretString,
    pub fullname: String,
}

/// Checks a registration against `policy`.
///
/// Checks run in a fixed order and the first failure is returned:
/// password length, email shape, password strength, then the length of
/// the sanitized email and full name.
pub fn check_registration(
    registration: &Registration,
    policy: &RegistrationPolicy,
) -> Result<SanitizedRegistration, RegistrationError> {
    let password_len = registration.password.expose_secret().chars().count();
    if password_len > MAX_LENGTH {
        return Err(reject(RegistrationError::PasswordTooLong {
            max: MAX_LENGTH,
            current_length: password_len,
        }));
    }

    if !is_valid_email(&registration.email) {
        return Err(reject(RegistrationError::InvalidEmail));
    }

    // over-length passwords, the only `invalid` tier, were rejected above
    let analysis = analyze_password(&registration.password);
    if analysis.score.value() < policy.min_score {
        return Err(reject(RegistrationError::WeakPassword {
            strength: analysis.strength,
            suggestions: analysis.suggestions,
        }));
    }

    let email = sanitize(&registration.email);
    let fullname = sanitize(&registration.fullname);
    if fullname.chars().count() > policy.max_fullname_len
        || email.chars().count() > policy.max_email_len
    {
        return Err(reject(RegistrationError::InputTooLong));
    }

    Ok(SanitizedRegistration {
        email,
        password: SecretString::new(registration.password.expose_secret().into()),
        fullname,
    })
}

fn sanitize(input: &str) -> String {
    input.chars().filter(|c| !FORBIDDEN_CHARS.contains(c)).collect()
}

fn reject(err: RegistrationError) -> RegistrationError {
    #[cfg(feature = "tracing")]
    tracing::warn!("Registration rejected: {}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PasswordStrength;

    fn registration(email: &str, password: &str, fullname: &str) -> Registration {
        Registration {
            email: email.to_string(),
            password: SecretString::new(password.to_string().into()),
            fullname: fullname.to_string(),
        }
    }

    #[test]
    fn test_accepts_strong_submission() {
        let reg = registration("test@example.com", "TestPass123!", "Test User");
        let accepted = check_registration(&reg, &RegistrationPolicy::default()).unwrap();
        assert_eq!(accepted.email, "test@example.com");
        assert_eq!(accepted.fullname, "Test User");
        assert_eq!(accepted.password.expose_secret(), "TestPass123!");
    }

    #[test]
    fn test_rejects_over_length_password_first() {
        let reg = registration("not-an-email", &"A1!a".repeat(13), "Test User");
        assert_eq!(
            check_registration(&reg, &RegistrationPolicy::default()).unwrap_err(),
            RegistrationError::PasswordTooLong {
                max: 50,
                current_length: 52
            }
        );
    }

    #[test]
    fn test_password_at_maximum_length_reaches_strength_check() {
        let at_max = "Aa1!".repeat(12) + "Aa";
        assert_eq!(at_max.chars().count(), MAX_LENGTH);

        let reg = registration("user@example.com", &at_max, "Test User");
        assert!(check_registration(&reg, &RegistrationPolicy::default()).is_ok());

        let weak_at_max = registration("user@example.com", &"a".repeat(MAX_LENGTH), "Test User");
        assert!(matches!(
            check_registration(&weak_at_max, &RegistrationPolicy::default()),
            Err(RegistrationError::WeakPassword {
                strength: PasswordStrength::Weak,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_invalid_email() {
        let reg = registration("user@localhost", "TestPass123!", "Test User");
        assert_eq!(
            check_registration(&reg, &RegistrationPolicy::default()).unwrap_err(),
            RegistrationError::InvalidEmail
        );
    }

    #[test]
    fn test_rejects_weak_password_with_suggestions() {
        let reg = registration("user@example.com", "password", "Test User");
        match check_registration(&reg, &RegistrationPolicy::default()) {
            Err(RegistrationError::WeakPassword {
                strength,
                suggestions,
            }) => {
                assert_eq!(strength, PasswordStrength::Weak);
                assert_eq!(suggestions.len(), 3);
            }
            other => panic!("Expected WeakPassword, got {:?}", other),
        }
    }

    #[test]
    fn test_min_score_follows_policy() {
        // 10 chars, three classes: score 3
        let reg = registration("user@example.com", "Abcdefgh12", "Test User");
        assert!(check_registration(&reg, &RegistrationPolicy::default()).is_ok());

        let strict = RegistrationPolicy {
            min_score: 4,
            ..RegistrationPolicy::default()
        };
        assert!(matches!(
            check_registration(&reg, &strict),
            Err(RegistrationError::WeakPassword { .. })
        ));
    }

    #[test]
    fn test_sanitizes_free_text() {
        let reg = registration("user@example.com", "TestPass123!", "<b>Tom & Jerry;</b>");
        let accepted = check_registration(&reg, &RegistrationPolicy::default()).unwrap();
        assert_eq!(accepted.fullname, "bTom  Jerry/b");
    }

    #[test]
    fn test_rejects_long_fullname() {
        let reg = registration("user@example.com", "TestPass123!", &"x".repeat(101));
        assert_eq!(
            check_registration(&reg, &RegistrationPolicy::default()).unwrap_err(),
            RegistrationError::InputTooLong
        );
    }

    #[test]
    fn test_fullname_length_measured_after_sanitizing() {
        let name = format!("{}{}", "x".repeat(100), ";;;");
        let reg = registration("user@example.com", "TestPass123!", &name);
        assert!(check_registration(&reg, &RegistrationPolicy::default()).is_ok());
    }
}
