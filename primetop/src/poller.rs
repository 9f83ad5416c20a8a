//! Snapshot poller: a cancellable fixed-cadence task that GETs the
//! coordinator's status endpoint and hands outcomes to the app loop.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::types::RawSnapshot;

/// How often the coordinator is polled.
pub const POLL_PERIOD: Duration = Duration::from_millis(1000);

/// Why a single poll produced no snapshot. None of these are fatal; the
/// next tick is a fresh attempt.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("coordinator returned {0}")]
    Status(StatusCode),
    #[error("invalid status payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One poll's result, tagged with the tick it was issued on. The consumer
/// applies outcomes in issue order and drops late stragglers.
#[derive(Debug)]
pub struct PollOutcome {
    pub seq: u64,
    pub result: Result<RawSnapshot, PollError>,
}

/// Handle to the background polling task. Dropping it (or calling
/// [`Poller::shutdown`]) aborts the tick loop; responses still in flight
/// land on a closed channel and are discarded.
pub struct Poller {
    rx: mpsc::Receiver<PollOutcome>,
    task: JoinHandle<()>,
}

impl Poller {
    /// Start polling `status_url` on a fixed cadence. Each tick issues an
    /// independent request; the schedule is never paused while a request
    /// is in flight, and there is no retry beyond the cadence itself.
    pub fn spawn(client: Client, status_url: String, period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(16);
        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut seq: u64 = 0;
            loop {
                ticker.tick().await;
                seq += 1;
                let client = client.clone();
                let url = status_url.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = fetch_snapshot(&client, &url).await;
                    let _ = tx.send(PollOutcome { seq, result }).await;
                });
            }
        });
        Self { rx, task }
    }

    /// Non-blocking: next outcome if one has arrived.
    pub fn try_recv(&mut self) -> Option<PollOutcome> {
        self.rx.try_recv().ok()
    }

    pub fn shutdown(&self) {
        self.task.abort();
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// GET the status endpoint once. Non-2xx and undecodable bodies are
/// failures of this poll, never a crash.
pub async fn fetch_snapshot(client: &Client, url: &str) -> Result<RawSnapshot, PollError> {
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(PollError::Status(status));
    }
    let body = resp.bytes().await?;
    let snap = serde_json::from_slice::<RawSnapshot>(&body)?;
    Ok(snap)
}
