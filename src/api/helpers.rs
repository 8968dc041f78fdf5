//! Response envelope builders for the trigger output.
//!
//! The envelope is the API-Gateway-style `{"statusCode", "body"}` shape where
//! `body` is itself a JSON-encoded string.

use serde_json::{Value, json};

/// Body text returned when the source document cannot be read.
pub const EXTRACTION_FAILED_MESSAGE: &str = "Failed to extract content";

/// 200 envelope carrying the answer as a JSON-encoded string.
///
/// An empty answer still returns 200 with body `"\"\""`; only a missing
/// source document changes the status code.
#[must_use]
pub fn ok_answer(answer: &str) -> Value {
    json!({
        "statusCode": 200,
        "body": json!(answer).to_string()
    })
}

/// 400 envelope signaling that no source content was available.
#[must_use]
pub fn extraction_failed() -> Value {
    json!({
        "statusCode": 400,
        "body": json!(EXTRACTION_FAILED_MESSAGE).to_string()
    })
}
