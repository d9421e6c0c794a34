// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate,
// plus the interactive prompts used when arguments are left out.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Option<T>: Arguments the user may omit
// - Derive macros: Automatically generate code for our types
// =============================================================================

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "seo-auditor",
    version = "0.1.0",
    about = "A CLI tool to audit on-page SEO signals of a webpage",
    long_about = "seo-auditor fetches a webpage and reports its title, meta description, \
                  keyword presence, load speed, and mobile-friendliness as a document. \
                  Anything not passed as an argument is prompted for interactively."
)]
pub struct Cli {
    /// URL of the webpage to audit (e.g., https://example.com)
    ///
    /// This is a positional argument; if omitted you will be prompted for it
    pub url: Option<String>,

    /// Comma-separated keywords to look for in the page body
    ///
    /// Split verbatim on ',' - whitespace around a keyword is kept
    /// If omitted you will be prompted for the list
    #[arg(long)]
    pub keywords: Option<String>,

    /// Also print the collected signals as JSON on stdout
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,

    /// Directory the report document is written into
    ///
    /// #[arg(long, default_value = ".")] creates --output-dir with a default
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

// The user input that drives one audit run
//
// Built once from CLI arguments and/or prompts, then never mutated.
// The whole pipeline reads from this struct.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Target page URL, exactly as entered (no validation before the fetch)
    pub url: String,
    /// Keywords in input order, exactly as entered (untrimmed)
    pub keywords: Vec<String>,
}

impl AnalysisRequest {
    // Builds a request from the raw URL and the raw keyword list
    //
    // Parameters:
    //   url: the target URL as entered by the user
    //   keyword_list: comma-separated keywords as entered by the user
    //
    // The split keeps every piece verbatim: "rust, web" becomes
    // ["rust", " web"] - the leading space stays with the keyword.
    // Trimming happens only when the report is rendered, not here.
    pub fn new(url: String, keyword_list: &str) -> Self {
        let keywords = keyword_list.split(',').map(str::to_string).collect();
        AnalysisRequest { url, keywords }
    }
}

// Prints a prompt and reads one line from stdin
//
// Parameters:
//   message: the prompt text, printed without a trailing newline
//
// Returns: the entered line with the line ending stripped
//          (inner whitespace is kept - keywords must survive untouched)
pub fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    // stdout is line-buffered, so flush to make the prompt appear
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<String> for the url argument?
//    - Option represents a value that might not exist
//    - clap maps an omitted argument to None instead of erroring
//    - That lets us fall back to an interactive prompt
//
// 2. What is PathBuf?
//    - An owned filesystem path (String is to &str what PathBuf is to &Path)
//    - clap parses --output-dir straight into it
//
// 3. Why split without trimming?
//    - The keyword lookup later uses each keyword exactly as supplied
//    - Trimming here would silently change what gets searched for
//    - Display-time trimming is a separate, deliberate step
//
// 4. Why flush stdout before reading?
//    - print! does not end with a newline, so the text may sit in the buffer
//    - flush() forces it onto the terminal before we block on stdin
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_split_verbatim() {
        let request = AnalysisRequest::new("https://example.com".to_string(), "rust, web,seo");
        assert_eq!(request.keywords, vec!["rust", " web", "seo"]);
    }

    #[test]
    fn test_empty_keyword_list_yields_one_empty_keyword() {
        let request = AnalysisRequest::new("https://example.com".to_string(), "");
        assert_eq!(request.keywords, vec![""]);
    }

    #[test]
    fn test_url_kept_exactly_as_entered() {
        let request = AnalysisRequest::new("not a url at all".to_string(), "x");
        assert_eq!(request.url, "not a url at all");
    }
}
