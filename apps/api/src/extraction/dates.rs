use once_cell::sync::Lazy;
use regex::Regex;

// Four-digit years 1900-2099.
static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("year regex is valid"));

/// All year tokens in `line`, left to right.
pub fn find_years(line: &str) -> Vec<&str> {
    YEAR_RE.find_iter(line).map(|m| m.as_str()).collect()
}
