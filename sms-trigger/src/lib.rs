pub mod config;
pub mod lambda;
pub mod schedule;
pub mod server;
pub mod trigger;

use config::Config;
use serde::Serialize;
use std::collections::HashMap;

/// Body of every SMS sent by this function.
pub const SMS_MESSAGE: &str = "予約が取れるかも！ <https://ssc3.doctorqube.com/mukainada-mc/>";

#[derive(Clone)]
pub struct AppState<P> {
    pub publisher: P,
    pub config: Config,
}

/// Transport-independent view of an inbound call. Only headers and query
/// parameters are consulted; the body is ignored.
#[derive(Debug, Default, Clone)]
pub struct TriggerRequest {
    pub headers: HashMap<String, String>,
    pub query: HashMap<String, String>,
}

impl TriggerRequest {
    /// Builds a request from raw header pairs and decoded query pairs.
    /// Headers whose value is not valid UTF-8 are dropped.
    pub fn from_parts<'h, H, Q, K, V>(headers: H, query: Q) -> Self
    where
        H: IntoIterator<Item = (&'h str, &'h [u8])>,
        Q: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let headers = headers
            .into_iter()
            .filter_map(|(name, value)| {
                std::str::from_utf8(value)
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect();
        let query = query
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        TriggerRequest { headers, query }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseBody {
    pub message: String,
    #[serde(rename = "topicArn", skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseBody {
    pub fn message(message: impl Into<String>) -> Self {
        ResponseBody {
            message: message.into(),
            topic_arn: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl TriggerResponse {
    pub fn new(status_code: u16, body: ResponseBody) -> Self {
        TriggerResponse { status_code, body }
    }

    pub fn body_json(&self) -> String {
        serde_json::to_string(&self.body).unwrap_or_default()
    }
}
