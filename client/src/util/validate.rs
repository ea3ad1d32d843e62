//! Client-side form validators for the auth flow.
//!
//! These are convenience gates only; the backend performs the real checks.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
// ASCII digits only; `\d` would also accept other Unicode digit scripts.
static OTP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("otp pattern compiles"));
static UPPER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern compiles"));
static LOWER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").expect("lowercase pattern compiles"));
static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("digit pattern compiles"));
static SPECIAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[@$!%*?&]").expect("special pattern compiles"));

pub const PASSWORD_MIN_LEN: usize = 8;

/// A failed client-side check, carrying the message shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);

/// One password-strength requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl PasswordRule {
    pub const ALL: [Self; 5] = [Self::MinLength, Self::Uppercase, Self::Lowercase, Self::Digit, Self::Special];

    pub fn message(self) -> &'static str {
        match self {
            Self::MinLength => "Password must be at least 8 characters",
            Self::Uppercase => "Password must contain at least one uppercase letter",
            Self::Lowercase => "Password must contain at least one lowercase letter",
            Self::Digit => "Password must contain at least one number",
            Self::Special => "Password must contain at least one special character (@$!%*?&)",
        }
    }

    fn is_met_by(self, password: &str) -> bool {
        match self {
            Self::MinLength => password.chars().count() >= PASSWORD_MIN_LEN,
            Self::Uppercase => UPPER_RE.is_match(password),
            Self::Lowercase => LOWER_RE.is_match(password),
            Self::Digit => DIGIT_RE.is_match(password),
            Self::Special => SPECIAL_RE.is_match(password),
        }
    }
}

/// Every rule `password` fails, in display order.
pub fn password_violations(password: &str) -> Vec<PasswordRule> {
    PasswordRule::ALL.into_iter().filter(|rule| !rule.is_met_by(password)).collect()
}

pub fn is_valid_password(password: &str) -> bool {
    PasswordRule::ALL.into_iter().all(|rule| rule.is_met_by(password))
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_otp(otp: &str) -> bool {
    OTP_RE.is_match(otp)
}
