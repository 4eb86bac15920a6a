use crate::trigger::handle;
use crate::{AppState, TriggerRequest};
use ntex::http::StatusCode;
use ntex::web;
use sns_client::Publisher;
use std::collections::HashMap;
use std::sync::Arc;

/// `GET|POST /trigger`.
pub async fn trigger<P: Publisher + 'static>(
    data: web::types::State<Arc<AppState<P>>>,
    req: web::HttpRequest,
    query: web::types::Query<HashMap<String, String>>,
) -> Result<web::HttpResponse, web::Error> {
    let request = TriggerRequest::from_parts(
        req.headers()
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_bytes())),
        query.into_inner(),
    );

    let resp = handle(&**data, &request).await;
    let status =
        StatusCode::from_u16(resp.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    Ok(web::HttpResponse::build(status).json(&resp.body))
}
