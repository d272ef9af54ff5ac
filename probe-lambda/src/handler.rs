use crate::config::Config;
use crate::probe;
use crate::response::Response;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Sends one GET request to the configured target and converts the outcome into a response.
///
/// The event and the context are not used beyond logging.
/// Transport failures are reported back as a 500 response, so this function never returns an error.
/// The `Result` is only there to fit the runtime's handler signature.
pub(crate) async fn my_handler(config: &Config, event: LambdaEvent<Value>) -> Result<Response, Error> {
    let (event, ctx) = event.into_parts();

    debug!("Event: {:?}", event);
    debug!("Context: {:?}", ctx);

    info!("GET {}", config.target_url);
    let outcome = probe::fetch(&config.target_url).await;

    match &outcome {
        Ok(downstream) => info!("Downstream responded with {}", downstream.status),
        Err(e) => warn!("Request failed ({}): {}", e.kind(), e),
    }

    Ok(Response::from_outcome(outcome, config.snippet_len))
}
