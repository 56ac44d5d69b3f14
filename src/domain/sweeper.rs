//! Background task that purges expired links.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::domain::registry::Registry;

/// Sweeps `registry` every `interval` until `shutdown` reports `true` or its
/// sender is dropped.
///
/// The first sweep happens one full interval after start. Each sweep takes the
/// registry's write lock once.
///
/// # Example
///
/// ```rust,ignore
/// let (shutdown_tx, shutdown_rx) = watch::channel(false);
/// let handle = tokio::spawn(run_sweeper(registry.clone(), Duration::from_secs(300), shutdown_rx));
/// // ...
/// shutdown_tx.send(true).ok();
/// handle.await?;
/// ```
pub async fn run_sweeper(
    registry: Arc<Registry>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(interval_secs = interval.as_secs(), "Sweeper started");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let removed = registry.sweep(registry.now());
                if removed > 0 {
                    info!(removed, remaining = registry.len(), "Swept expired links");
                } else {
                    debug!("Sweep found nothing to remove");
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    info!("Sweeper stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::ManualClock;
    use chrono::{TimeDelta, Utc};

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_removes_expired_links() {
        let clock = ManualClock::new(Utc::now());
        let registry = Arc::new(Registry::with_clock(Arc::new(clock.clone())));
        registry
            .create("https://gone.com", TimeDelta::seconds(1), None)
            .unwrap();
        let keep = registry
            .create("https://kept.com", TimeDelta::hours(1), None)
            .unwrap();
        clock.advance(TimeDelta::seconds(10));

        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(run_sweeper(registry.clone(), Duration::from_secs(60), rx));

        time::sleep(Duration::from_secs(61)).await;
        tokio::task::yield_now().await;

        assert_eq!(registry.len(), 1);
        assert!(registry.resolve(&keep).is_ok());

        tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_tolerates_empty_registry() {
        let registry = Arc::new(Registry::new());
        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(run_sweeper(registry.clone(), Duration::from_secs(1), rx));

        time::sleep(Duration::from_secs(5)).await;
        assert!(registry.is_empty());

        tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_sweeper_stops_when_sender_dropped() {
        let registry = Arc::new(Registry::new());
        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(run_sweeper(registry, Duration::from_secs(3600), rx));

        drop(tx);

        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("sweeper should exit")
            .unwrap();
    }
}
