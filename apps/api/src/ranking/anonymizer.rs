//! Masks email addresses in free text before it reaches the embedder.
//!
//! Known gap: phone numbers, names and other PII classes pass through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

pub const EMAIL_PLACEHOLDER: &str = "[EMAIL]";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+").expect("invalid email regex")
});

/// Replaces every email-like substring with [`EMAIL_PLACEHOLDER`].
///
/// Idempotent: the placeholder's brackets are outside both character classes,
/// so masked text never matches again.
pub fn anonymize_text(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, EMAIL_PLACEHOLDER)
        .into_owned()
}
