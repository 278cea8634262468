//! Section scanner: walks the line sequence and yields only the lines that
//! belong to one target section.
//!
//! ```text
//! SeekingHeader --header keyword--> InSection --terminator keyword--> Done
//! ```
//!
//! The header line itself is never yielded. The first header match wins and
//! the first terminator ends the scan for good, so a second occurrence of the
//! same section later in the document is ignored.

use crate::extraction::vocabulary::SectionKeywords;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingHeader,
    InSection,
    Done,
}

/// Iterator adapter returned by [`scan_section`].
pub struct SectionScan<'k, I> {
    lines: I,
    keywords: &'k SectionKeywords,
    state: ScanState,
}

impl<'a, 'k, I> Iterator for SectionScan<'k, I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.state == ScanState::Done {
                return None;
            }
            let Some(line) = self.lines.next() else {
                self.state = ScanState::Done;
                return None;
            };
            let lower = line.to_lowercase();
            match self.state {
                ScanState::SeekingHeader => {
                    if contains_any(&lower, &self.keywords.headers) {
                        self.state = ScanState::InSection;
                    }
                }
                ScanState::InSection => {
                    if contains_any(&lower, &self.keywords.terminators) {
                        self.state = ScanState::Done;
                        return None;
                    }
                    return Some(line);
                }
                ScanState::Done => return None,
            }
        }
    }
}

/// Yields the data lines of the section described by `keywords`.
pub fn scan_section<'a, 'k, I>(lines: I, keywords: &'k SectionKeywords) -> SectionScan<'k, I::IntoIter>
where
    I: IntoIterator<Item = &'a str>,
{
    SectionScan {
        lines: lines.into_iter(),
        keywords,
        state: ScanState::SeekingHeader,
    }
}

/// Splits text into trimmed, non-empty lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| haystack.contains(n.as_str()))
}
