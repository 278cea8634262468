//! Keyword data driving the extractors.
//!
//! Everything here is plain data: section header and terminator keywords,
//! the skill vocabulary and the degree keywords. `Vocabulary::default()`
//! carries the built-in lists; a JSON file can override any subset of them,
//! down to a single list inside one section (e.g. `experience.headers`).

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Keywords that open a section and keywords of other sections that close it.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionKeywords {
    pub headers: Vec<String>,
    pub terminators: Vec<String>,
}

impl SectionKeywords {
    fn new(headers: &[&str], terminators: &[&str]) -> Self {
        Self {
            headers: to_owned(headers),
            terminators: to_owned(terminators),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    pub experience: SectionKeywords,
    pub skills: SectionKeywords,
    pub education: SectionKeywords,
    /// Matched by lower-case substring containment, in this order.
    pub skill_terms: Vec<String>,
    /// Subset of `skill_terms` categorised as "Programming".
    pub programming_terms: Vec<String>,
    pub degree_keywords: Vec<String>,
}

/// On-disk shape of a vocabulary file. Every list is optional; an absent
/// list keeps the built-in one.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct VocabularyFile {
    experience: SectionFile,
    skills: SectionFile,
    education: SectionFile,
    skill_terms: Option<Vec<String>>,
    programming_terms: Option<Vec<String>>,
    degree_keywords: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SectionFile {
    headers: Option<Vec<String>>,
    terminators: Option<Vec<String>>,
}

impl SectionFile {
    fn apply(self, keywords: &mut SectionKeywords) {
        if let Some(headers) = self.headers {
            keywords.headers = headers;
        }
        if let Some(terminators) = self.terminators {
            keywords.terminators = terminators;
        }
    }
}

const EXPERIENCE_HEADERS: &[&str] = &[
    "experience",
    "work history",
    "employment",
    "professional experience",
];
const EXPERIENCE_TERMINATORS: &[&str] = &["education", "skills", "projects"];

const SKILLS_HEADERS: &[&str] = &[
    "skills",
    "technical skills",
    "core competencies",
    "technologies",
];
const SKILLS_TERMINATORS: &[&str] = &["experience", "education", "projects"];

const EDUCATION_HEADERS: &[&str] = &["education", "academic background", "qualifications"];
const EDUCATION_TERMINATORS: &[&str] = &["experience", "skills", "projects"];

const SKILL_TERMS: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "c++",
    "c#",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "go",
    "rust",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "html",
    "css",
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "machine learning",
    "data analysis",
    "project management",
    "agile",
    "scrum",
    "leadership",
    "communication",
];

const PROGRAMMING_TERMS: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "c++",
    "c#",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "go",
    "rust",
];

const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "degree",
    "diploma",
    "certificate",
];

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            experience: SectionKeywords::new(EXPERIENCE_HEADERS, EXPERIENCE_TERMINATORS),
            skills: SectionKeywords::new(SKILLS_HEADERS, SKILLS_TERMINATORS),
            education: SectionKeywords::new(EDUCATION_HEADERS, EDUCATION_TERMINATORS),
            skill_terms: to_owned(SKILL_TERMS),
            programming_terms: to_owned(PROGRAMMING_TERMS),
            degree_keywords: to_owned(DEGREE_KEYWORDS),
        }
    }
}

impl Vocabulary {
    /// Loads a vocabulary override from a JSON file. Omitted fields keep their
    /// built-in values. Keywords are lower-cased because matching runs against
    /// lower-cased lines.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vocabulary file '{}'", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Invalid vocabulary file '{}'", path.display()))
    }

    /// Applies a JSON override document on top of the built-in vocabulary.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: VocabularyFile = serde_json::from_str(json)?;
        let mut vocabulary = Self::default();

        file.experience.apply(&mut vocabulary.experience);
        file.skills.apply(&mut vocabulary.skills);
        file.education.apply(&mut vocabulary.education);
        if let Some(terms) = file.skill_terms {
            vocabulary.skill_terms = terms;
        }
        if let Some(terms) = file.programming_terms {
            vocabulary.programming_terms = terms;
        }
        if let Some(keywords) = file.degree_keywords {
            vocabulary.degree_keywords = keywords;
        }

        Ok(vocabulary.normalized())
    }

    fn normalized(mut self) -> Self {
        for keywords in [&mut self.experience, &mut self.skills, &mut self.education] {
            lowercase_all(&mut keywords.headers);
            lowercase_all(&mut keywords.terminators);
        }
        lowercase_all(&mut self.skill_terms);
        lowercase_all(&mut self.programming_terms);
        lowercase_all(&mut self.degree_keywords);
        self
    }

    pub fn is_programming_term(&self, term: &str) -> bool {
        self.programming_terms.iter().any(|t| t == term)
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn lowercase_all(items: &mut [String]) {
    for item in items.iter_mut() {
        *item = item.to_lowercase();
    }
}
