use dotenvy::dotenv;
use log::info;
use ntex::web;
use sms_trigger::AppState;
use sms_trigger::config::Config;
use sms_trigger::server::trigger;
use sns_client::SnsPublisher;
use std::sync::Arc;

#[ntex::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let bind_addr = config.bind_address.clone();

    info!(
        "Starting SMS trigger on {bind_addr}, region={}, auth_token_set={}, topic={:?}",
        config.region,
        config.auth_token.is_some(),
        config.topic_arn
    );

    let publisher = SnsPublisher::for_region(&config.region).await;

    let state = Arc::new(AppState { publisher, config });

    web::server(move || {
        let s = state.clone();
        web::App::new()
            .state(s)
            .route("/health", web::get().to(async || "OK"))
            .route("/trigger", web::get().to(trigger::<SnsPublisher>))
            .route("/trigger", web::post().to(trigger::<SnsPublisher>))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
