// src/mobile/api.rs
// =============================================================================
// This module asks Google's mobile-friendly test service about a URL.
//
// How it works:
// - POST {"url": "..."} as JSON to the fixed testing endpoint
// - Read the "mobileFriendliness" field out of the JSON response
// - "MOBILE_FRIENDLY" means friendly, any other value means not friendly,
//   a missing field (or any request failure) means we simply don't know
//
// The real endpoint wants an API key; supplying one is deployment
// configuration and not handled here - unauthenticated calls just come
// back as Unknown like any other failure.
//
// Rust concepts:
// - Enums: Three-way verdicts instead of a nullable bool
// - serde_json::Value: Poking at loosely-shaped JSON
// - Pattern matching: To fold every failure path into Unknown
// =============================================================================

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

// The fixed testing endpoint (Google Search Console URL Testing Tools)
const MOBILE_FRIENDLY_API: &str =
    "https://searchconsole.googleapis.com/v1/urlTestingTools/mobileFriendlyTest:run";

// The three possible outcomes of a mobile-friendliness check
//
// Unknown covers both "service unreachable" and "response had no
// verdict in it" - either way we could not check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MobileFriendliness {
    /// Tested and classified as mobile-friendly
    Friendly,
    /// Tested and classified as anything else
    NotFriendly,
    /// Could not be tested
    Unknown,
}

// Checks whether a page is mobile-friendly
//
// Parameters:
//   client: shared reqwest HTTP client
//   url: the page URL to submit for testing
//
// Returns: the tri-state verdict; every failure path maps to Unknown
pub async fn check_mobile_friendly(client: &Client, url: &str) -> MobileFriendliness {
    let payload = serde_json::json!({ "url": url });

    // Single best-effort POST, no retries
    let response = match client.post(MOBILE_FRIENDLY_API).json(&payload).send().await {
        Ok(response) => response,
        Err(_) => return MobileFriendliness::Unknown,
    };

    if !response.status().is_success() {
        return MobileFriendliness::Unknown;
    }

    // The response should be JSON; anything unparseable counts as unchecked
    let body: Value = match response.json().await {
        Ok(body) => body,
        Err(_) => return MobileFriendliness::Unknown,
    };

    classify_verdict(&body)
}

// Reads the classification field out of a response body
//
// Parameters:
//   body: the parsed JSON response
//
// Returns:
//   Friendly    - field present and equal to "MOBILE_FRIENDLY"
//   NotFriendly - field present with any other value
//   Unknown     - field absent
pub fn classify_verdict(body: &Value) -> MobileFriendliness {
    match body.get("mobileFriendliness") {
        None => MobileFriendliness::Unknown,
        Some(value) => {
            if value.as_str() == Some("MOBILE_FRIENDLY") {
                MobileFriendliness::Friendly
            } else {
                MobileFriendliness::NotFriendly
            }
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why an enum instead of Option<bool>?
//    - Option<bool> has three states too, but None reads as "no value"
//      rather than "we could not check" at every use site
//    - A named variant documents itself: MobileFriendliness::Unknown
//
// 2. What is serde_json::Value?
//    - A dynamically-typed JSON tree (like a parsed dict in Python)
//    - .get("key") returns Option<&Value>
//    - .as_str() returns Some(&str) only if the value is a JSON string
//
// 3. Why is classify_verdict a separate function?
//    - The network call can't run in a unit test, the classification can
//    - Splitting them lets the interesting logic be tested offline
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mobile_friendly_verdict() {
        let body = json!({ "mobileFriendliness": "MOBILE_FRIENDLY" });
        assert_eq!(classify_verdict(&body), MobileFriendliness::Friendly);
    }

    #[test]
    fn test_not_mobile_friendly_verdict() {
        let body = json!({ "mobileFriendliness": "NOT_MOBILE_FRIENDLY" });
        assert_eq!(classify_verdict(&body), MobileFriendliness::NotFriendly);
    }

    #[test]
    fn test_missing_field_is_unknown() {
        let body = json!({ "testStatus": { "status": "COMPLETE" } });
        assert_eq!(classify_verdict(&body), MobileFriendliness::Unknown);
    }

    #[test]
    fn test_non_string_verdict_is_not_friendly() {
        // Present but not the expected literal - counts as a negative verdict
        let body = json!({ "mobileFriendliness": 42 });
        assert_eq!(classify_verdict(&body), MobileFriendliness::NotFriendly);
    }

    #[test]
    fn test_empty_object_is_unknown() {
        let body = json!({});
        assert_eq!(classify_verdict(&body), MobileFriendliness::Unknown);
    }
}
