//! Personal info — pattern matches over the whole document, no section scan.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::models::PersonalInfo;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email regex is valid")
});

// North American numbers: optional +1, optional parentheses, `-`/`.`/space separators.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("phone regex is valid")
});

static LINKEDIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)linkedin\.com/in/[A-Za-z0-9_-]+").expect("linkedin regex is valid")
});

/// Best-effort contact details. Anything not found stays an empty string.
///
/// The name is simply the first line with punctuation removed; nothing checks
/// that it actually is a name.
pub fn extract_personal_info(lines: &[&str], full_text: &str) -> PersonalInfo {
    let name = lines.first().map(|l| clean_name(l)).unwrap_or_default();

    let email = EMAIL_RE
        .find(full_text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let phone = PHONE_RE
        .find(full_text)
        .map(|m| clean_phone(m.as_str()))
        .unwrap_or_default();

    let linkedin = LINKEDIN_RE
        .find(full_text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    PersonalInfo {
        name,
        email,
        phone,
        linkedin,
        address: String::new(),
        website: String::new(),
    }
}

fn clean_name(line: &str) -> String {
    line.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

fn clean_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '(' | ')' | '-' | ' '))
        .collect::<String>()
        .trim()
        .to_string()
}
