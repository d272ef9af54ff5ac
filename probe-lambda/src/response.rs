use crate::probe::Downstream;
use serde::Serialize;
use std::fmt::Display;

/// Reported when the downstream call did not complete.
pub(crate) const TRANSPORT_FAILURE_STATUS: u16 = 500;

/// The lambda response in the format expected by API Gateway proxy integrations.
/// It is serialized into `{"statusCode": 200, "body": "..."}` by the runtime.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    /// Converts the outcome of the downstream call into a response.
    /// The status of a completed call is passed through as-is, even if it is 4xx or 5xx.
    pub(crate) fn from_outcome<E: Display>(outcome: Result<Downstream, E>, snippet_len: usize) -> Self {
        match outcome {
            Ok(downstream) => Self {
                status_code: downstream.status,
                body: format!(
                    "Google responded with status {}. Here's a snippet: {}",
                    downstream.status,
                    snippet(&downstream.text, snippet_len)
                ),
            },
            Err(e) => Self {
                status_code: TRANSPORT_FAILURE_STATUS,
                body: format!("Error occurred while making request to Google: {e}"),
            },
        }
    }
}

/// Returns the first `len` chars of `text`, or all of it if it is shorter.
/// Counts chars, not bytes, so multibyte text is never cut in the middle of a char.
pub(crate) fn snippet(text: &str, len: usize) -> &str {
    match text.char_indices().nth(len) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
