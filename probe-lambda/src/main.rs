//! A lambda that sends a single GET request to a fixed endpoint and reports back
//! the downstream status code with a snippet of the response body.

use config::Config;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::str::FromStr;
use tracing::debug;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

mod config;
mod handler;
mod probe;
mod response;

#[cfg(test)]
mod test_server;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    // the config never changes, so all invocations borrow the same instance
    let config = Config::default();
    let config = &config;

    let func = service_fn(move |event: LambdaEvent<Value>| handler::my_handler(config, event));

    if let Err(e) = lambda_runtime::run(func).await {
        debug!("Runtime error: {:?}", e);
        return Err(e);
    }

    Ok(())
}

/// Initializes the tracing from RUST_LOG env var if present or sets minimal logging:
/// - INFO for this lambda
/// - nothing from the dependencies
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(
                    Directive::from_str("probe_lambda=info").expect("Invalid logging filter. It's a bug."),
                )
                .from_env_lossy(),
        )
        // CloudWatch adds its own timestamps and does not render colour codes
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .compact()
        .init();
}
