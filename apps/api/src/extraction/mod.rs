// Résumé extraction pipeline.
// buffer -> text (text.rs) -> trimmed lines (scanner.rs) -> four independent
// extractors -> ExtractedData. Pure and synchronous; callers on the async
// runtime must run `ResumeExtractor::extract` inside spawn_blocking.

pub mod dates;
pub mod education;
pub mod experience;
#[cfg(test)]
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod personal;
pub mod scanner;
pub mod skills;
pub mod text;
pub mod vocabulary;

use tracing::info;

use crate::extraction::education::extract_education;
use crate::extraction::experience::extract_experience;
use crate::extraction::personal::extract_personal_info;
use crate::extraction::scanner::split_lines;
use crate::extraction::skills::extract_skills;
use crate::extraction::text::{extract_text, ExtractError};

pub use models::ExtractedData;
pub use vocabulary::Vocabulary;

/// Runs the whole pipeline with an injected vocabulary.
#[derive(Debug, Clone, Default)]
pub struct ResumeExtractor {
    vocabulary: Vocabulary,
}

/// Decoded text together with what was extracted from it.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub text: String,
    pub data: ExtractedData,
}

impl ResumeExtractor {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Decodes `buffer` of the declared `media_type` and extracts structured
    /// data from the resulting text.
    pub fn extract(&self, buffer: &[u8], media_type: &str) -> Result<Extraction, ExtractError> {
        let text = extract_text(buffer, media_type)?;
        let data = self.extract_data_from_text(&text);
        Ok(Extraction { text, data })
    }

    /// Never fails: empty or unrecognisable text yields empty fields.
    pub fn extract_data_from_text(&self, text: &str) -> ExtractedData {
        let lines = split_lines(text);

        let data = ExtractedData {
            personal_info: extract_personal_info(&lines, text),
            experience: extract_experience(&lines, &self.vocabulary.experience),
            skills: extract_skills(&lines, &self.vocabulary),
            education: extract_education(&lines, &self.vocabulary),
        };

        info!(
            lines = lines.len(),
            experience = data.experience.len(),
            skills = data.skills.len(),
            education = data.education.len(),
            "Extracted resume data"
        );
        data
    }
}
