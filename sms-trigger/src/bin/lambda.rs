//! API Gateway proxy entry point.
//!
//! Same handler as the standalone server, invoked through the Lambda
//! runtime. Configuration comes from the function's environment.

use lambda_http::{Error, run, service_fn};
use log::info;
use sms_trigger::AppState;
use sms_trigger::config::Config;
use sms_trigger::lambda::function_handler;
use sns_client::SnsPublisher;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = Config::from_env();
    info!(
        "Starting SMS trigger function, region={}, auth_token_set={}, topic={:?}",
        config.region,
        config.auth_token.is_some(),
        config.topic_arn
    );

    let publisher = SnsPublisher::for_region(&config.region).await;
    let state = Arc::new(AppState { publisher, config });

    run(service_fn(|event| function_handler(state.clone(), event))).await
}
