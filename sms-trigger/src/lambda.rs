//! API Gateway proxy adapter.

use crate::trigger::handle;
use crate::{AppState, TriggerRequest};
use lambda_http::{Body, Error, Request, RequestExt as _, Response};
use sns_client::Publisher;
use std::sync::Arc;

pub fn to_trigger_request(event: &Request) -> TriggerRequest {
    TriggerRequest::from_parts(
        event
            .headers()
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_bytes())),
        event
            .query_string_parameters()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
}

pub async fn function_handler<P: Publisher>(
    state: Arc<AppState<P>>,
    event: Request,
) -> Result<Response<Body>, Error> {
    let resp = handle(&*state, &to_trigger_request(&event)).await;

    let response = Response::builder()
        .status(resp.status_code)
        .header("Content-Type", "application/json")
        .body(Body::from(resp.body_json()))
        .map_err(Box::new)?;
    Ok(response)
}
