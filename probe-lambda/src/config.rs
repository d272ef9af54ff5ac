/// The only endpoint this lambda sends requests to.
pub(crate) const TARGET_URL: &str = "https://www.google.com";

/// Max number of characters of the downstream response body included in the lambda response.
pub(crate) const SNIPPET_LEN: usize = 500;

/// Immutable settings shared by all invocations.
/// There are no env var overrides: the target is fixed at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    /// E.g. https://www.google.com
    pub target_url: String,
    /// The body of the downstream response is cut to this many chars
    pub snippet_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_url: TARGET_URL.to_string(),
            snippet_len: SNIPPET_LEN,
        }
    }
}

#[cfg(test)]
impl Config {
    /// Same as the default config, but pointing at a different URL, e.g. a local test server.
    pub(crate) fn with_target(target_url: &str) -> Self {
        Self {
            target_url: target_url.to_string(),
            ..Self::default()
        }
    }
}
