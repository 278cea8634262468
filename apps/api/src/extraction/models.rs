use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Proficiency assigned to every extracted skill. No inference is attempted.
pub const DEFAULT_SKILL_LEVEL: &str = "intermediate";

pub const PROGRAMMING_CATEGORY: &str = "Programming";
pub const GENERAL_CATEGORY: &str = "General";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    /// Reserved. Nothing in the pipeline populates it.
    pub address: String,
    /// Reserved. Nothing in the pipeline populates it.
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: String,
    /// `None` when the qualifying line carried a single year (open-ended role).
    pub end_date: Option<String>,
    pub description: String,
    pub achievements: Vec<String>,
}

/// An experience entry under construction. Lives until the next qualifying
/// line or the end of the section, then becomes an `ExperienceEntry`.
#[derive(Debug, Clone, Default)]
pub struct PendingExperience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
    pub achievements: Vec<String>,
}

impl PendingExperience {
    pub fn finalize(self) -> ExperienceEntry {
        ExperienceEntry {
            id: Uuid::new_v4(),
            company: self.company,
            position: self.position,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            achievements: self.achievements,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub institution: String,
    /// The qualifying line, verbatim.
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<f64>,
}

/// Everything the pipeline pulls out of one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillEntry>,
    pub education: Vec<EducationEntry>,
}
