//! Email address shape check used at registration.

use regex::Regex;
use std::sync::OnceLock;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

const MAX_LOCAL_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 255;

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
    })
}

/// Returns `true` for `local@domain.tld` addresses with a local part of
/// 1-64 characters, a domain of at most 255 characters containing a dot,
/// and an alphabetic TLD of two letters or more.
pub fn is_valid_email(email: &str) -> bool {
    if !email_pattern().is_match(email) {
        return false;
    }

    match email.split_once('@') {
        Some((local, domain)) => local.len() <= MAX_LOCAL_LEN && domain.len() <= MAX_DOMAIN_LEN,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("firstname.lastname@company.com"));
        assert!(is_valid_email("a+tag@sub.domain.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example.c0m"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@@example.com"));
    }

    #[test]
    fn test_local_part_length_limit() {
        let ok = format!("{}@example.com", "a".repeat(64));
        let too_long = format!("{}@example.com", "a".repeat(65));
        assert!(is_valid_email(&ok));
        assert!(!is_valid_email(&too_long));
    }

    #[test]
    fn test_domain_length_limit() {
        let label = "a".repeat(60);
        let domain = format!("{label}.{label}.{label}.{label}.com");
        assert!(domain.len() <= 255);
        assert!(is_valid_email(&format!("user@{domain}")));

        let long_domain = format!("{label}.{label}.{label}.{label}.{label}.com");
        assert!(long_domain.len() > 255);
        assert!(!is_valid_email(&format!("user@{long_domain}")));
    }
}
