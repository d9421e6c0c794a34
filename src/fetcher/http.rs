// src/fetcher/http.rs
// =============================================================================
// This module retrieves page markup and measures page load speed.
//
// Key behavior:
// - One plain GET per operation, no retries
// - Library-default timeout and redirect handling (no overrides)
// - Any failure (DNS, refused connection, non-2xx status) becomes None
// - Load speed is measured by a second, independent request - it does NOT
//   reuse the response the markup came from
//
// Rust concepts:
// - async/await: For network I/O
// - Option<T>: "got it" vs "could not get it", with no error details
// - The ? operator on Option via .ok()? conversions
// =============================================================================

use reqwest::Client;
use std::time::Instant;

// Fetches the raw HTML of a webpage
//
// Parameters:
//   client: shared reqwest HTTP client
//   url: the URL to fetch, exactly as the user entered it
//
// Returns: Some(html) on a 2xx response, None on any failure
//
// Malformed URLs are not validated up front - they simply fail the
// request and come back as None like every other fetch problem.
pub async fn fetch_html(client: &Client, url: &str) -> Option<String> {
    // .ok()? turns any request error into an early None return
    let response = client.get(url).send().await.ok()?;

    // Non-2xx statuses (404, 500, ...) count as failures too
    if !response.status().is_success() {
        return None;
    }

    response.text().await.ok()
}

// Measures how long the page takes to respond
//
// Parameters:
//   client: shared reqwest HTTP client
//   url: the URL to time
//
// Returns: Some(elapsed seconds) on a 2xx response, None on any failure
//
// The clock runs from sending the request until the response head
// arrives - downloading the body is not part of the measurement.
// This is its own GET request, independent of fetch_html.
pub async fn measure_load_time(client: &Client, url: &str) -> Option<f64> {
    let started = Instant::now();
    let response = client.get(url).send().await.ok()?;
    let elapsed = started.elapsed();

    if !response.status().is_success() {
        return None;
    }

    Some(elapsed.as_secs_f64())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does .ok()? do?
//    - .ok() converts Result<T, E> into Option<T>, throwing the error away
//    - ? then returns None from this function if the Option is None
//    - Together they say "on any error, give up and report nothing"
//
// 2. Why Option instead of Result here?
//    - The caller never inspects WHY a fetch failed, only whether it did
//    - A missing value degrades one report field; an error type would just
//      be extra surface nobody reads
//
// 3. What is Instant?
//    - A monotonic clock timestamp from std::time
//    - elapsed() gives the Duration since it was taken
//    - as_secs_f64() converts that to fractional seconds
// -----------------------------------------------------------------------------
