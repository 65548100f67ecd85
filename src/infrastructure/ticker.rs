//! Periodic wall-clock ticks
//!
//! The ticker pushes `Event::Tick(now)` into a bounded channel at a fixed
//! period. With a channel of capacity 1 at most one tick waits for the UI
//! loop; the ticker blocks on send until that tick is consumed. It stops when
//! its cancellation token fires or the receiving side is dropped.

use std::time::Duration;

use chrono::Local;
use tokio::{sync::mpsc, task::JoinHandle, time::MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::infrastructure::tui::Event;

pub const DEFAULT_PERIOD: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    period: Duration,
}

impl Ticker {
    /// A zero period is raised to one millisecond.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn spawn(self, tx: mpsc::Sender<Event>, token: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {}
                }
                let tick = Event::Tick(Local::now());
                tokio::select! {
                    _ = token.cancelled() => break,
                    sent = tx.send(tick) => {
                        if sent.is_err() {
                            log::debug!("tick receiver dropped");
                            break;
                        }
                    }
                }
            }
            log::debug!("ticker stopped");
        })
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const WAIT: Duration = Duration::from_secs(2);

    #[test]
    fn test_default_period() {
        assert_eq!(Ticker::default().period(), Duration::from_millis(100));
    }

    #[test]
    fn test_zero_period_is_raised() {
        assert_eq!(
            Ticker::new(Duration::ZERO).period(),
            Duration::from_millis(1)
        );
    }

    #[tokio::test]
    async fn test_ticks_are_delivered() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let handle = Ticker::new(Duration::from_millis(5)).spawn(tx, token.clone());

        for _ in 0..3 {
            let ev = tokio::time::timeout(WAIT, rx.recv())
                .await
                .expect("tick within timeout");
            assert!(matches!(ev, Some(Event::Tick(_))));
        }

        token.cancel();
        tokio::time::timeout(WAIT, handle)
            .await
            .expect("ticker stops after cancel")
            .expect("ticker task does not panic");
    }

    #[tokio::test]
    async fn test_at_most_one_pending_tick() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let _handle = Ticker::new(Duration::from_millis(5)).spawn(tx, token.clone());

        // Several periods pass without a consumer.
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert!(matches!(rx.try_recv(), Ok(Event::Tick(_))));
        assert!(rx.try_recv().is_err());
        token.cancel();
    }

    #[tokio::test]
    async fn test_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        let handle = Ticker::new(Duration::from_millis(5)).spawn(tx, CancellationToken::new());
        drop(rx);
        tokio::time::timeout(WAIT, handle)
            .await
            .expect("ticker stops without receiver")
            .expect("ticker task does not panic");
    }

    #[tokio::test]
    async fn test_tick_timestamps_do_not_go_backwards() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let _handle = Ticker::new(Duration::from_millis(5)).spawn(tx, token.clone());

        let mut last = None;
        for _ in 0..5 {
            let Some(Event::Tick(at)) = tokio::time::timeout(WAIT, rx.recv())
                .await
                .expect("tick within timeout")
            else {
                panic!("expected a tick");
            };
            if let Some(previous) = last {
                assert!(at >= previous);
            }
            last = Some(at);
        }
        token.cancel();
    }
}
