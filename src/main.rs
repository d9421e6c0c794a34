// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (prompting for anything missing)
// 2. Fetch the target page's HTML
// 3. Analyze it for SEO signals (title, meta description, keywords)
// 4. Measure load speed and check mobile-friendliness
// 5. Write the SEO report document and exit with proper code
//    (0 = report generated, 1 = page could not be fetched, 2 = error)
//
// Rust concepts used:
// - async/await: Because every stage waits on network I/O
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Option<T>: For signals that may simply be unavailable
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing and input prompts
mod fetcher;       // src/fetcher/ - page retrieval and load timing
mod analyzer;      // src/analyzer/ - HTML content analysis
mod mobile;        // src/mobile/ - mobile-friendliness API check
mod report;        // src/report/ - report assembly and persistence

// Import items we need from our modules
use cli::{AnalysisRequest, Cli};
use clap::Parser;  // Parser trait enables the parse() method
use reqwest::Client;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("An unexpected error occurred: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = report generated
//   Ok(1) = page could not be fetched
//   Err = unexpected error (mapped to exit code 2 in main)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Anything not given on the command line is prompted for interactively
    let url = match cli.url {
        Some(url) => url,
        None => cli::prompt("Enter the URL of the webpage: ")?,
    };
    let keyword_list = match cli.keywords {
        Some(keywords) => keywords,
        None => cli::prompt("Enter keywords (comma-separated): ")?,
    };

    // Build the immutable request that drives the whole pipeline
    // Keywords are split on ',' verbatim - no trimming at this point
    let request = AnalysisRequest::new(url, &keyword_list);

    println!("🔍 Auditing webpage: {}", request.url);
    println!("🔑 Keywords to check: {}", request.keywords.len());

    // One HTTP client shared by all stages (connection pooling)
    // Library-default timeout and redirect policy - no overrides
    let client = Client::new();

    // Stage 1: fetch the page markup
    // A failure here is terminal - without HTML there is nothing to analyze
    let html = match fetcher::fetch_html(&client, &request.url).await {
        Some(html) => html,
        None => {
            println!("❌ Unable to fetch HTML. Check the URL and try again.");
            return Ok(1);
        }
    };

    // Stage 2: extract title, meta description, and keyword presence
    println!("📄 Analyzing page content...");
    let facts = analyzer::PageFacts::extract(&html, &request.keywords);

    // Stage 3: measure load speed with a second, independent request
    // (the page is fetched again; this timing is separate from stage 1)
    println!("⏱️  Measuring page load speed...");
    let load_time = fetcher::measure_load_time(&client, &request.url).await;

    // Stage 4: ask the external testing service about mobile-friendliness
    println!("📱 Checking mobile-friendliness...");
    let mobile = mobile::check_mobile_friendly(&client, &request.url).await;

    // Stage 5: assemble the report and write it to disk
    let seo_report = report::build_report(&request, facts, load_time, mobile);
    let path = report::persist(&seo_report, &cli.output_dir)?;

    // Optionally mirror the collected signals as JSON on stdout
    if cli.json {
        let json_output = serde_json::to_string_pretty(&seo_report)?;
        println!("{}", json_output);
    }

    println!("\n✅ SEO Report generated: {}", path.display());

    Ok(0)
}
