use tracing::debug;
use uuid::Uuid;

use crate::extraction::dates::find_years;
use crate::extraction::models::EducationEntry;
use crate::extraction::scanner::{contains_any, scan_section};
use crate::extraction::vocabulary::Vocabulary;

/// One entry per education-section line mentioning a degree keyword. The raw
/// line becomes `degree`; a single year fills both dates.
pub fn extract_education(lines: &[&str], vocabulary: &Vocabulary) -> Vec<EducationEntry> {
    let entries: Vec<EducationEntry> = scan_section(lines.iter().copied(), &vocabulary.education)
        .filter(|line| contains_any(&line.to_lowercase(), &vocabulary.degree_keywords))
        .map(|line| {
            let years = find_years(line);
            let start_date = years.first().copied().unwrap_or_default();
            let end_date = years.get(1).copied().unwrap_or(start_date);
            EducationEntry {
                id: Uuid::new_v4(),
                institution: String::new(),
                degree: line.to_string(),
                field: String::new(),
                start_date: start_date.to_string(),
                end_date: end_date.to_string(),
                gpa: None,
            }
        })
        .collect();

    debug!("Extracted {} education entries", entries.len());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::scanner::split_lines;

    fn run(text: &str) -> Vec<EducationEntry> {
        extract_education(&split_lines(text), &Vocabulary::default())
    }

    #[test]
    fn test_degree_line_with_range() {
        let entries = run("Education\nBachelor of Computer Science 2016-2020");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "Bachelor of Computer Science 2016-2020");
        assert_eq!(entries[0].start_date, "2016");
        assert_eq!(entries[0].end_date, "2020");
        assert!(entries[0].institution.is_empty());
        assert!(entries[0].field.is_empty());
        assert_eq!(entries[0].gpa, None);
    }

    #[test]
    fn test_single_year_fills_both_dates() {
        let entries = run("Qualifications\nAWS Certificate, 2022");
        assert_eq!(entries[0].start_date, "2022");
        assert_eq!(entries[0].end_date, "2022");
    }

    #[test]
    fn test_no_year_leaves_dates_empty() {
        let entries = run("Academic Background\nMaster of Science, Physics");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].start_date, "");
        assert_eq!(entries[0].end_date, "");
    }

    #[test]
    fn test_lines_without_degree_keyword_skipped() {
        let entries = run("Education\nState University\nPhD in Chemistry 2012-2017\nGPA 3.9");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "PhD in Chemistry 2012-2017");
    }

    #[test]
    fn test_each_line_is_its_own_entry() {
        let entries = run("Education\nBachelor of Arts 2008-2012\nMaster of Arts 2012-2014");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].start_date, "2012");
        assert_eq!(entries[1].end_date, "2014");
    }

    #[test]
    fn test_experience_terminates_section() {
        let entries = run("Education\nBachelor of Arts 2008-2012\nExperience\nDiploma mill 1999");
        assert_eq!(entries.len(), 1);
    }
}
