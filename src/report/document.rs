// src/report/document.rs
// =============================================================================
// This module turns the collected SEO signals into a report document.
//
// The document is Markdown with a fixed layout - five numbered sections
// in an order that never changes:
//   1. Page Title
//   2. Meta Description
//   3. Keywords Presence
//   4. Page Load Speed
//   5. Mobile-Friendly
//
// The output filename is derived from the URL by replacing the scheme
// separator and every slash with underscores, so the same URL always
// produces the same filename. An existing file is overwritten silently.
//
// Rust concepts:
// - String building with format! and join
// - match: Rendering each tri-state/optional value as fixed text
// - PathBuf: Owned filesystem paths
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analyzer::PageFacts;
use crate::cli::AnalysisRequest;
use crate::mobile::MobileFriendliness;

// The finished report - everything the pipeline learned about one page
//
// Built once all stages have run, then only rendered, never changed.
#[derive(Debug, Clone, Serialize)]
pub struct SeoReport {
    /// The audited URL, exactly as the user entered it
    pub url: String,
    /// Title, meta description, and keyword presence
    #[serde(flatten)]  // This merges the PageFacts fields into SeoReport
    pub facts: PageFacts,
    /// Seconds until the page responded, if the timing request succeeded
    pub load_time_seconds: Option<f64>,
    /// The external service's verdict
    pub mobile_friendliness: MobileFriendliness,
}

// Combines the outputs of all pipeline stages into a report
//
// Parameters:
//   request: the user input that drove the run
//   facts: what the analyzer extracted from the markup
//   load_time_seconds: the (separate) timing measurement, if it worked
//   mobile_friendliness: the external service's verdict
pub fn build_report(
    request: &AnalysisRequest,
    facts: PageFacts,
    load_time_seconds: Option<f64>,
    mobile_friendliness: MobileFriendliness,
) -> SeoReport {
    SeoReport {
        url: request.url.clone(),
        facts,
        load_time_seconds,
        mobile_friendliness,
    }
}

// Renders the report as a Markdown document
//
// Section order is fixed; every value that could not be determined
// renders as its placeholder text instead of being left out, so the
// document always has the same shape.
pub fn render_markdown(report: &SeoReport) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push("# SEO Report".to_string());

    sections.push(format!("## 1. Page Title\n\n{}", report.facts.title));

    sections.push(format!(
        "## 2. Meta Description\n\n{}",
        report.facts.meta_description
    ));

    // One paragraph per keyword, in mapping order
    // Keywords are trimmed for DISPLAY only - the lookup already
    // happened with the untrimmed original
    let keyword_lines: Vec<String> = report
        .facts
        .keywords
        .iter()
        .map(|entry| {
            let verdict = if entry.found { "Found" } else { "Not Found" };
            format!("{}: {}", entry.keyword.trim(), verdict)
        })
        .collect();
    sections.push(format!(
        "## 3. Keywords Presence\n\n{}",
        keyword_lines.join("\n\n")
    ));

    sections.push(format!(
        "## 4. Page Load Speed\n\n{}",
        format_load_time(report.load_time_seconds)
    ));

    sections.push(format!(
        "## 5. Mobile-Friendly\n\n{}",
        format_mobile(report.mobile_friendliness)
    ));

    sections.join("\n\n") + "\n"
}

// Derives the output filename from the URL
//
// Pure and deterministic: the same URL always maps to the same name.
//
// Example:
//   "https://example.com/about" -> "SEO_Report_https_example.com_about.md"
pub fn report_filename(url: &str) -> String {
    format!("SEO_Report_{}.md", url.replace("://", "_").replace('/', "_"))
}

// Writes the rendered report into a directory
//
// Parameters:
//   report: the report to write
//   dir: target directory (the filename comes from the URL)
//
// Returns: the path the document was written to
//
// An existing file at that path is overwritten without asking.
pub fn persist(report: &SeoReport, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(report_filename(&report.url));
    fs::write(&path, render_markdown(report))?;
    Ok(path)
}

// Renders the load-speed measurement as report text
fn format_load_time(elapsed: Option<f64>) -> String {
    match elapsed {
        Some(seconds) => format!("{:.2} seconds", seconds),
        None => "Not Available".to_string(),
    }
}

// Renders the mobile verdict as report text
fn format_mobile(verdict: MobileFriendliness) -> &'static str {
    match verdict {
        MobileFriendliness::Friendly => "Yes",
        MobileFriendliness::NotFriendly => "No",
        MobileFriendliness::Unknown => "Not Available",
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[serde(flatten)] do?
//    - Lifts the fields of the inner struct up into the outer JSON object
//    - The --json output shows "title" at the top level, not "facts.title"
//
// 2. Why join("\n\n")?
//    - A blank line separates paragraphs in Markdown
//    - Joining sections (and keyword lines) this way keeps the spacing
//      uniform without sprinkling newlines through the code
//
// 3. What is {:.2}?
//    - A format specifier: floating point with exactly two decimals
//    - format!("{:.2}", 0.4567) gives "0.46"
//
// 4. Why does persist take a directory, not a full path?
//    - The filename is not the caller's choice - it is a function of the
//      URL, so reports for the same page land in the same file
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::KeywordPresence;

    fn sample_report(url: &str) -> SeoReport {
        SeoReport {
            url: url.to_string(),
            facts: PageFacts {
                title: "Example Domain".to_string(),
                meta_description: "An example page".to_string(),
                keywords: vec![
                    KeywordPresence {
                        keyword: "rust".to_string(),
                        found: true,
                    },
                    KeywordPresence {
                        keyword: " web".to_string(),
                        found: false,
                    },
                ],
            },
            load_time_seconds: Some(0.4567),
            mobile_friendliness: MobileFriendliness::Friendly,
        }
    }

    #[test]
    fn test_filename_replaces_scheme_and_slashes() {
        assert_eq!(
            report_filename("https://example.com/about/team"),
            "SEO_Report_https_example.com_about_team.md"
        );
    }

    #[test]
    fn test_filename_is_deterministic() {
        let url = "https://example.com/page";
        assert_eq!(report_filename(url), report_filename(url));
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let document = render_markdown(&sample_report("https://example.com"));

        let title_pos = document.find("## 1. Page Title").unwrap();
        let meta_pos = document.find("## 2. Meta Description").unwrap();
        let keywords_pos = document.find("## 3. Keywords Presence").unwrap();
        let speed_pos = document.find("## 4. Page Load Speed").unwrap();
        let mobile_pos = document.find("## 5. Mobile-Friendly").unwrap();

        assert!(title_pos < meta_pos);
        assert!(meta_pos < keywords_pos);
        assert!(keywords_pos < speed_pos);
        assert!(speed_pos < mobile_pos);
    }

    #[test]
    fn test_keywords_render_trimmed_in_input_order() {
        let document = render_markdown(&sample_report("https://example.com"));
        // " web" was looked up with its space but displays trimmed
        assert!(document.contains("rust: Found"));
        assert!(document.contains("web: Not Found"));
        assert!(!document.contains(" web: Not Found"));
    }

    #[test]
    fn test_load_time_renders_two_decimals() {
        let document = render_markdown(&sample_report("https://example.com"));
        assert!(document.contains("0.46 seconds"));
    }

    #[test]
    fn test_missing_load_time_renders_not_available() {
        let mut report = sample_report("https://example.com");
        report.load_time_seconds = None;
        let document = render_markdown(&report);
        assert!(document.contains("## 4. Page Load Speed\n\nNot Available"));
    }

    #[test]
    fn test_mobile_verdict_rendering() {
        let mut report = sample_report("https://example.com");

        report.mobile_friendliness = MobileFriendliness::Friendly;
        assert!(render_markdown(&report).contains("## 5. Mobile-Friendly\n\nYes"));

        report.mobile_friendliness = MobileFriendliness::NotFriendly;
        assert!(render_markdown(&report).contains("## 5. Mobile-Friendly\n\nNo"));

        report.mobile_friendliness = MobileFriendliness::Unknown;
        assert!(render_markdown(&report).contains("## 5. Mobile-Friendly\n\nNot Available"));
    }

    #[test]
    fn test_persist_writes_named_file() {
        let report = sample_report("https://persist-test.example/one");
        let dir = std::env::temp_dir();

        let path = persist(&report, &dir).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "SEO_Report_https_persist-test.example_one.md"
        );
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# SEO Report"));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_persist_overwrites_existing_file() {
        let dir = std::env::temp_dir();

        let mut report = sample_report("https://persist-test.example/two");
        report.facts.title = "First".to_string();
        let path = persist(&report, &dir).unwrap();

        report.facts.title = "Second".to_string();
        persist(&report, &dir).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Second"));
        assert!(!written.contains("First"));

        fs::remove_file(path).unwrap();
    }
}
