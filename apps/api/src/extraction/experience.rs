//! Work experience — one entry per section line that carries a year.
//!
//! Only the company and the date range are recovered. Position, description
//! and achievements are left empty; lines without a year are not attached to
//! the entry above them.

use tracing::debug;

use crate::extraction::dates::find_years;
use crate::extraction::models::{ExperienceEntry, PendingExperience};
use crate::extraction::scanner::scan_section;
use crate::extraction::vocabulary::SectionKeywords;

pub fn extract_experience(lines: &[&str], keywords: &SectionKeywords) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut pending: Option<PendingExperience> = None;

    for line in scan_section(lines.iter().copied(), keywords) {
        let years = find_years(line);
        let Some(&start) = years.first() else {
            continue;
        };

        if let Some(done) = pending.take() {
            entries.push(done.finalize());
        }

        pending = Some(PendingExperience {
            company: text_before_first_digit(line).to_string(),
            start_date: start.to_string(),
            end_date: years.get(1).map(|y| y.to_string()),
            ..Default::default()
        });
    }

    if let Some(done) = pending {
        entries.push(done.finalize());
    }

    debug!("Extracted {} experience entries", entries.len());
    entries
}

fn text_before_first_digit(line: &str) -> &str {
    let end = line.find(|c: char| c.is_ascii_digit()).unwrap_or(line.len());
    line[..end].trim()
}
