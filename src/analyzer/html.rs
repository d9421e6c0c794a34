// src/analyzer/html.rs
// =============================================================================
// This module extracts SEO signals from page markup.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Signals extracted:
// - Page title: text of the first <title> element
// - Meta description: content attribute of <meta name="description">
// - Keyword presence: case-insensitive substring search of body text
//
// Rust concepts:
// - Iterators: For walking text nodes
// - Closures: Anonymous functions (|x| ...)
// - Option chaining: and_then / map / unwrap_or_else
// =============================================================================

use scraper::{Html, Selector};
use serde::Serialize;

// Placeholder strings used when a signal cannot be determined.
// Kept here as the single source of truth - formatting code never
// spells these out itself.
pub const TITLE_NOT_FOUND: &str = "Title not found";
pub const META_DESCRIPTION_NOT_FOUND: &str = "Meta description not found";

// One keyword and whether the page body contains it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordPresence {
    /// The keyword exactly as the user supplied it (untrimmed)
    pub keyword: String,
    /// Whether any body text node contains it (case-insensitive)
    pub found: bool,
}

// Everything the analyzer learns about a page
//
// The keywords vector acts as an ordered map: entries appear in
// first-occurrence order and a duplicate keyword overwrites its
// existing entry instead of adding a second one.
#[derive(Debug, Clone, Serialize)]
pub struct PageFacts {
    pub title: String,
    pub meta_description: String,
    pub keywords: Vec<KeywordPresence>,
}

impl PageFacts {
    // Runs both extraction passes over the markup
    //
    // Parameters:
    //   html: the raw page markup
    //   keywords: the user's keywords, in input order, untrimmed
    pub fn extract(html: &str, keywords: &[String]) -> Self {
        let (title, meta_description) = extract_title_and_description(html);
        let keywords = extract_keyword_presence(html, keywords);

        PageFacts {
            title,
            meta_description,
            keywords,
        }
    }
}

// Extracts the page title and meta description from markup
//
// Parameters:
//   html: the raw page markup
//
// Returns: (title, meta_description), with a placeholder string for
//          anything that is missing
//
// Title: the text content of the first <title> element, verbatim -
// nested tags are flattened, nothing is trimmed.
//
// Meta description: the content attribute of the first
// <meta name="description">. The attribute VALUE match is
// case-sensitive, so name="Description" does not count. A meta tag
// without a content attribute falls back to the placeholder as well.
pub fn extract_title_and_description(html: &str) -> (String, String) {
    let document = Html::parse_document(html);

    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selectors are constants and known to be valid
    let title_selector = Selector::parse("title").unwrap();
    let meta_selector = Selector::parse(r#"meta[name="description"]"#).unwrap();

    let title = document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .unwrap_or_else(|| TITLE_NOT_FOUND.to_string());

    let meta_description = document
        .select(&meta_selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
        .unwrap_or_else(|| META_DESCRIPTION_NOT_FOUND.to_string());

    (title, meta_description)
}

// Checks which keywords appear in the page body
//
// Parameters:
//   html: the raw page markup
//   keywords: keywords in input order, used exactly as supplied
//
// Returns: one entry per distinct keyword, in first-occurrence order
//
// A keyword counts as found when at least one individual text node
// under <body> contains it as a case-insensitive substring. There is
// no word-boundary logic: "cat" matches "concatenate". Without a body
// element every keyword resolves to false.
//
// The lookup uses the keyword untrimmed - " rust" with its leading
// space is searched for literally, even though the report later
// displays it trimmed.
pub fn extract_keyword_presence(html: &str, keywords: &[String]) -> Vec<KeywordPresence> {
    let document = Html::parse_document(html);
    let body_selector = Selector::parse("body").unwrap();
    let body = document.select(&body_selector).next();

    let mut presence: Vec<KeywordPresence> = Vec::new();

    for keyword in keywords {
        let found = match body {
            Some(body) => {
                let needle = keyword.to_lowercase();
                // .text() yields each descendant text node separately;
                // a keyword spanning two nodes will not match
                body.text().any(|text| text.to_lowercase().contains(&needle))
            }
            None => false,
        };

        upsert(&mut presence, keyword, found);
    }

    presence
}

// Inserts or overwrites one keyword entry, keeping first-occurrence order
fn upsert(presence: &mut Vec<KeywordPresence>, keyword: &str, found: bool) {
    match presence.iter_mut().find(|entry| entry.keyword == keyword) {
        Some(entry) => entry.found = found,
        None => presence.push(KeywordPresence {
            keyword: keyword.to_string(),
            found,
        }),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is scraper and how does it work?
//    - scraper parses HTML into a tree structure (DOM)
//    - You can then query it using CSS selectors (like querySelector)
//    - meta[name="description"] means "meta tags whose name is description"
//
// 2. What does .text() return?
//    - An iterator over the text nodes inside an element
//    - "<p>foo <b>bar</b></p>" yields "foo " and "bar" as separate items
//    - .collect::<String>() glues them together for the title
//
// 3. Why parse the document twice?
//    - Each extraction function is self-contained: markup in, facts out
//    - Parsing is cheap at this scale and keeps the functions pure
//
// 4. What is and_then?
//    - Option chaining: "if there is a value, try the next step"
//    - Here: if a meta tag exists, also require its content attribute
//    - Either miss falls through to unwrap_or_else and the placeholder
//
// 5. Why a Vec instead of a HashMap for keyword presence?
//    - The report must list keywords in input order
//    - HashMap iteration order is arbitrary in Rust
//    - A small Vec with a linear find gives us an ordered map
// -----------------------------------------------------------------------------
