use log::info;
use std::future::Future;
use std::time::Duration;

/// Calls `fire` once per `period` until `count` calls were made or
/// `shutdown` resolves. Returns the number of calls made.
///
/// `shutdown` is polled for the whole run, so a signal that lands while
/// `fire` is in flight stops the loop before the next tick.
pub async fn run_every<S, F, Fut>(period: Duration, count: Option<u64>, shutdown: S, mut fire: F) -> u64
where
    S: Future,
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut ticker = tokio::time::interval(period);
    tokio::pin!(shutdown);

    let mut sent: u64 = 0;
    while count.is_none_or(|limit| sent < limit) {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!("Shutdown requested after {sent} invocations");
                break;
            }
            _ = ticker.tick() => {
                fire().await;
                sent += 1;
            }
        }
    }
    sent
}
