use reqwest::Client;
use std::error::Error as _;
use thiserror::Error;
use tracing::debug;

/// Whatever the downstream server sent back, regardless of the HTTP status.
/// A 4xx or 5xx is still a completed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Downstream {
    pub status: u16,
    pub text: String,
}

/// A failure at the transport level, i.e. the call did not complete.
/// The variants tell at which stage of the call it happened.
#[derive(Debug, Error)]
pub(crate) enum TransportError {
    /// The HTTP client could not be built, e.g. the TLS backend failed to initialize
    #[error("{}", chain(.0))]
    Client(reqwest::Error),
    /// No response headers were received: invalid URL, DNS, connect, TLS, redirect loop
    #[error("{}", chain(.0))]
    Send(reqwest::Error),
    /// The status line arrived, but the body could not be read
    #[error("{}", chain(.0))]
    Body(reqwest::Error),
}

impl TransportError {
    /// A short name of the failure for logging.
    pub(crate) fn kind(&self) -> &'static str {
        let e = match self {
            // reqwest flags a truncated body as a decode error, so the stage is the better label
            Self::Body(e) if !e.is_timeout() => return "body",
            Self::Client(e) | Self::Send(e) | Self::Body(e) => e,
        };

        if e.is_builder() {
            "builder"
        } else if e.is_timeout() {
            "timeout"
        } else if e.is_connect() {
            "connect"
        } else if e.is_redirect() {
            "redirect"
        } else {
            "request"
        }
    }
}

/// Joins the error message with all its sources, e.g.
/// `error sending request for url (http://127.0.0.1:1/): client error (Connect): tcp connect error: Connection refused (os error 111)`
/// because reqwest keeps the interesting part at the bottom of the chain.
fn chain(e: &reqwest::Error) -> String {
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        msg.push_str(": ");
        msg.push_str(&inner.to_string());
        source = inner.source();
    }
    msg
}

/// Sends a GET request with no params, headers or body and reads the entire response as text.
/// No timeout is set, so reqwest waits for as long as the lambda is allowed to run.
/// Redirects are followed, up to 10.
pub(crate) async fn fetch(url: &str) -> Result<Downstream, TransportError> {
    // a new client per call - connections are not reused between invocations
    let client = Client::builder().build().map_err(TransportError::Client)?;

    let resp = client.get(url).send().await.map_err(TransportError::Send)?;

    let status = resp.status().as_u16();
    debug!("Downstream status: {status}");

    let text = resp.text().await.map_err(TransportError::Body)?;
    debug!("Downstream body: {} bytes", text.len());

    Ok(Downstream { status, text })
}
