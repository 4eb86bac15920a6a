use std::time::Duration;

use clap::Parser;
use dotenvy::dotenv;
use log::{error, info};
use reqwest::{Client, ClientBuilder};
use sms_trigger::schedule::run_every;
use sms_trigger::trigger::CREDENTIAL_NAME;

#[derive(Parser, Debug)]
#[command(
    name = "trigger-daemon",
    about = "Invoke a deployed SMS trigger endpoint, once or on a fixed interval"
)]
struct Args {
    /// Full URL of the trigger endpoint
    #[arg(long, env = "SMS_TRIGGER_ENDPOINT")]
    endpoint: String,

    /// Shared secret sent as the Authorization credential
    #[arg(long, env = "AUTH_TOKEN", hide_env_values = true)]
    token: String,

    /// Send the credential as an `Authorization` query parameter instead of a header
    #[arg(long)]
    via_query: bool,

    /// Seconds between invocations; 0 fires a single request
    #[arg(short, long, default_value_t = 0)]
    interval_secs: u64,

    /// Stop after this many invocations (only meaningful with an interval)
    #[arg(short, long)]
    count: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    if args.endpoint.is_empty() {
        anyhow::bail!("endpoint must not be empty");
    }
    if args.token.is_empty() {
        anyhow::bail!("token must not be empty");
    }

    info!(
        "Starting trigger daemon: endpoint={}, via_query={}, interval_secs={}, count={:?}",
        args.endpoint, args.via_query, args.interval_secs, args.count
    );

    let http_client = ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .build()?;

    if args.interval_secs == 0 {
        invoke(&http_client, &args).await;
        return Ok(());
    }

    let sent = run_every(
        Duration::from_secs(args.interval_secs),
        args.count,
        tokio::signal::ctrl_c(),
        || invoke(&http_client, &args),
    )
    .await;

    info!("trigger daemon exiting, total_sent={sent}");
    Ok(())
}

async fn invoke(client: &Client, args: &Args) {
    let request = if args.via_query {
        client
            .get(&args.endpoint)
            .query(&[(CREDENTIAL_NAME, args.token.as_str())])
    } else {
        client
            .get(&args.endpoint)
            .header(CREDENTIAL_NAME, &args.token)
    };

    match request.send().await {
        Ok(resp) => {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            if status.is_success() {
                info!("status={status} body={body}");
            } else {
                error!("status={status} body={body}");
            }
        }
        Err(e) => error!("HTTP send error: {e}"),
    }
}
