#![allow(dead_code)]

use anyhow::{Result, anyhow};
use sms_trigger::config::Config;
use sms_trigger::{AppState, TriggerRequest};
use sns_client::Publisher;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

pub const SECRET: &str = "abc123";
pub const TOPIC: &str = "arn:test:topic";

/// Records every publish call and answers with a canned outcome.
#[derive(Clone)]
pub struct FakePublisher {
    calls: Arc<Mutex<Vec<(String, String)>>>,
    outcome: Result<String, String>,
}

impl FakePublisher {
    pub fn succeeding(message_id: &str) -> Self {
        FakePublisher {
            calls: Arc::default(),
            outcome: Ok(message_id.to_string()),
        }
    }

    pub fn failing(description: &str) -> Self {
        FakePublisher {
            calls: Arc::default(),
            outcome: Err(description.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Publisher for FakePublisher {
    fn publish(&self, topic_arn: &str, message: &str) -> impl Future<Output = Result<String>> + Send {
        self.calls
            .lock()
            .unwrap()
            .push((topic_arn.to_string(), message.to_string()));
        let outcome = self.outcome.clone();
        async move { outcome.map_err(|e| anyhow!(e)) }
    }
}

pub fn state(
    publisher: FakePublisher,
    auth_token: Option<&str>,
    topic_arn: Option<&str>,
) -> AppState<FakePublisher> {
    let mut vars = HashMap::new();
    if let Some(token) = auth_token {
        vars.insert("AUTH_TOKEN", token.to_string());
    }
    if let Some(topic) = topic_arn {
        vars.insert("SNS_TOPIC_ARN", topic.to_string());
    }
    AppState {
        publisher,
        config: Config::from_lookup(|key| vars.get(key).cloned()),
    }
}

pub fn request(headers: &[(&str, &str)], query: &[(&str, &str)]) -> TriggerRequest {
    let to_map = |pairs: &[(&str, &str)]| {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    };
    TriggerRequest {
        headers: to_map(headers),
        query: to_map(query),
    }
}
