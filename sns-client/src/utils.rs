use anyhow::anyhow;
use aws_config::BehaviorVersion;
use aws_sdk_sns::Client;
use aws_sdk_sns::config::Region;
use aws_sdk_sns::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sns::operation::publish::PublishError;
use log::{debug, error};
use std::fmt::Debug;

pub async fn publish_message(
    client: &Client,
    topic_arn: &str,
    message: &str,
) -> anyhow::Result<String> {
    let result = client
        .publish()
        .topic_arn(topic_arn)
        .message(message)
        .send()
        .await;

    match result {
        Ok(output) => {
            debug!("Publish output {:?}", output);
            Ok(output.message_id().unwrap_or_default().to_string())
        }
        Err(e) => {
            error!("Failed to send SMS: {}", DisplayErrorContext(&e));
            Err(anyhow!(describe(&e)))
        }
    }
}

/// Human-readable cause of a failed publish: the service's own message
/// (e.g. "Rate exceeded") when it sent one, otherwise the full error chain.
pub fn describe<R: Debug>(e: &SdkError<PublishError, R>) -> String {
    e.as_service_error()
        .and_then(|se| se.message())
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(e).to_string())
}

pub async fn build_client(region: &str) -> Client {
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await;
    Client::new(&config)
}
