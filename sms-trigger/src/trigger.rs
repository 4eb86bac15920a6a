use crate::{AppState, ResponseBody, SMS_MESSAGE, TriggerRequest, TriggerResponse};
use log::{error, warn};
use sns_client::Publisher;
use std::collections::HashMap;

pub const CREDENTIAL_NAME: &str = "Authorization";

pub const MSG_AUTH_TOKEN_UNSET: &str = "AUTH_TOKEN environment variable is not set";
pub const MSG_UNAUTHORIZED: &str = "Unauthorized: Invalid or missing Authorization";
pub const MSG_TOPIC_UNSET: &str = "SNS_TOPIC_ARN environment variable is not set";
pub const MSG_SENT: &str = "SMS sent successfully";
pub const MSG_SEND_FAILED: &str = "Failed to send SMS";
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Looks up `name` in `values`: exact spelling first, then all lowercase,
/// then any ASCII-case-insensitive match (smallest key wins among several).
/// Empty values are skipped.
pub fn lookup_credential<'a>(values: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    let non_empty = |key: &str| values.get(key).map(String::as_str).filter(|v| !v.is_empty());

    non_empty(name)
        .or_else(|| non_empty(&name.to_ascii_lowercase()))
        .or_else(|| {
            values
                .iter()
                .filter(|(k, v)| k.eq_ignore_ascii_case(name) && !v.is_empty())
                .min_by(|a, b| a.0.cmp(b.0))
                .map(|(_, v)| v.as_str())
        })
}

/// True when the header credential or the query credential equals `secret`.
pub fn is_authorized(request: &TriggerRequest, secret: &str) -> bool {
    let header = lookup_credential(&request.headers, CREDENTIAL_NAME);
    let query = lookup_credential(&request.query, CREDENTIAL_NAME);

    header == Some(secret) || query == Some(secret)
}

/// Runs one invocation: secret check, credential check, topic check, publish.
///
/// Never fails; every outcome, including a publish error, is turned into a
/// response.
pub async fn handle<P: Publisher>(state: &AppState<P>, request: &TriggerRequest) -> TriggerResponse {
    let Some(secret) = state.config.auth_token.as_deref() else {
        warn!("AUTH_TOKEN is not configured");
        return TriggerResponse::new(500, ResponseBody::message(MSG_AUTH_TOKEN_UNSET));
    };

    if !is_authorized(request, secret) {
        warn!("Rejected request with invalid or missing credential");
        return TriggerResponse::new(401, ResponseBody::message(MSG_UNAUTHORIZED));
    }

    let Some(topic_arn) = state.config.topic_arn.as_deref() else {
        warn!("SNS_TOPIC_ARN is not configured");
        return TriggerResponse::new(500, ResponseBody::message(MSG_TOPIC_UNSET));
    };

    match state.publisher.publish(topic_arn, SMS_MESSAGE).await {
        Ok(_) => TriggerResponse::new(
            200,
            ResponseBody {
                message: MSG_SENT.to_string(),
                topic_arn: Some(topic_arn.to_string()),
                error: None,
            },
        ),
        Err(e) => {
            error!("Failed to send SMS to topic={topic_arn}: {e:#}");
            let description = e.to_string();
            let description = if description.is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                description
            };
            TriggerResponse::new(
                500,
                ResponseBody {
                    message: MSG_SEND_FAILED.to_string(),
                    topic_arn: None,
                    error: Some(description),
                },
            )
        }
    }
}
