//! Skills — vocabulary membership over the lines of the skills section.
//!
//! Matching is lower-case substring containment, not whole words. "java"
//! matches inside "javascript" and the same term on two lines yields two
//! entries. Callers that need a unique list dedup by name themselves.

use tracing::debug;

use crate::extraction::models::{
    SkillEntry, DEFAULT_SKILL_LEVEL, GENERAL_CATEGORY, PROGRAMMING_CATEGORY,
};
use crate::extraction::scanner::scan_section;
use crate::extraction::vocabulary::Vocabulary;

pub fn extract_skills(lines: &[&str], vocabulary: &Vocabulary) -> Vec<SkillEntry> {
    let mut skills = Vec::new();

    for line in scan_section(lines.iter().copied(), &vocabulary.skills) {
        let lower = line.to_lowercase();
        for term in &vocabulary.skill_terms {
            if !lower.contains(term.as_str()) {
                continue;
            }
            let category = if vocabulary.is_programming_term(term) {
                PROGRAMMING_CATEGORY
            } else {
                GENERAL_CATEGORY
            };
            skills.push(SkillEntry {
                name: term.clone(),
                level: DEFAULT_SKILL_LEVEL.to_string(),
                category: category.to_string(),
            });
        }
    }

    debug!("Extracted {} skill entries", skills.len());
    skills
}
