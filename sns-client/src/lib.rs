pub mod utils;

use anyhow::Result;
use aws_sdk_sns::Client;
use log::info;
use std::future::Future;

/// Delivers a message to every subscriber of a topic.
///
/// On success the provider-assigned message id is returned.
pub trait Publisher {
    fn publish(&self, topic_arn: &str, message: &str) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Clone)]
pub struct SnsPublisher {
    pub client: Client,
}

impl SnsPublisher {
    pub fn new(client: Client) -> Self {
        SnsPublisher { client }
    }

    pub async fn for_region(region: &str) -> Self {
        SnsPublisher::new(utils::build_client(region).await)
    }
}

impl Publisher for SnsPublisher {
    fn publish(&self, topic_arn: &str, message: &str) -> impl Future<Output = Result<String>> + Send {
        let client = self.client.clone();
        let topic_arn = topic_arn.to_string();
        let message = message.to_string();
        async move {
            let message_id = utils::publish_message(&client, &topic_arn, &message).await?;
            info!("SMS sent successfully: {message_id}");
            Ok(message_id)
        }
    }
}
