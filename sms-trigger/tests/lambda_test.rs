mod common;

use common::{FakePublisher, SECRET, TOPIC, state};
use lambda_http::{Body, Request, RequestExt as _};
use sms_trigger::lambda::{function_handler, to_trigger_request};
use std::collections::HashMap;
use std::sync::Arc;

fn event(headers: &[(&str, &str)], query: &[(&str, &str)]) -> Request {
    let mut builder = lambda_http::http::Request::builder().uri("/trigger");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let query: HashMap<String, String> = query
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    builder
        .body(Body::Empty)
        .unwrap()
        .with_query_string_parameters(query)
}

#[test]
fn query_string_parameters_become_query_map() {
    let request = to_trigger_request(&event(
        &[("AUTHORIZATION", "from-header")],
        &[("authorization", "from-query")],
    ));

    assert_eq!(request.headers["authorization"], "from-header");
    assert_eq!(request.query["authorization"], "from-query");
}

#[tokio::test]
async fn query_credential_publishes() {
    let publisher = FakePublisher::succeeding("msg-1");
    let state = Arc::new(state(publisher.clone(), Some(SECRET), Some(TOPIC)));

    let resp = function_handler(state, event(&[], &[("authorization", SECRET)]))
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["content-type"], "application/json");
    let body: serde_json::Value = serde_json::from_slice(resp.body().as_ref()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "message": "SMS sent successfully", "topicArn": TOPIC })
    );
    assert_eq!(publisher.calls().len(), 1);
}

#[tokio::test]
async fn missing_topic_is_reported_through_lambda() {
    let publisher = FakePublisher::succeeding("msg-1");
    let state = Arc::new(state(publisher.clone(), Some(SECRET), None));

    let resp = function_handler(state, event(&[("Authorization", SECRET)], &[]))
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let body: serde_json::Value = serde_json::from_slice(resp.body().as_ref()).unwrap();
    assert_eq!(body["message"], "SNS_TOPIC_ARN environment variable is not set");
    assert!(publisher.calls().is_empty());
}
