//! Stats reducer and alert engine: turns raw coordinator snapshots into the
//! view model and the bounded alert feed the dashboard renders.
//!
//! All state transitions go through [`Dashboard::apply`]; nothing else
//! mutates the stats or the feed, so the whole core is testable without a
//! network or a timer.

use chrono::{DateTime, Local};

use crate::poller::PollError;
use crate::types::RawSnapshot;

/// The alert feed never grows past this many entries.
pub const MAX_ALERTS: usize = 5;

/// Queued jobs above this fraction of total jobs count as backlog.
pub const BACKLOG_RATIO: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerStatus {
    Active,
}

impl WorkerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkerStatus::Active => "Active",
        }
    }
}

/// One worker as reported by the coordinator. Only live workers are listed
/// by id; dead workers surface as a count on [`ClusterStats`].
#[derive(Debug, Clone)]
pub struct Worker {
    pub id: String,
    pub status: WorkerStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Success,
    Error,
}

/// An alert event. Generated once, never mutated; it expires by falling
/// off the end of the bounded feed.
#[derive(Debug, Clone)]
pub struct Alert {
    pub id: u64,
    pub kind: AlertKind,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// The normalized view of one coordinator snapshot.
#[derive(Debug, Clone)]
pub struct ClusterStats {
    pub total_jobs: u64,
    pub completed_jobs: u64,
    pub active_workers: u64,
    pub dead_workers: u64,
    pub total_primes: u64,
    pub queued_jobs: u64,
    pub assigned_jobs: u64,
    pub snapshots_processed: u64,
    pub snapshots_failed: u64,
    /// Percent complete in [0, 100]; zero total jobs reads as 0, not NaN.
    pub progress: f64,
    pub workers: Vec<Worker>,
    pub last_update: DateTime<Local>,
}

impl ClusterStats {
    fn empty(now: DateTime<Local>) -> Self {
        Self {
            total_jobs: 0,
            completed_jobs: 0,
            active_workers: 0,
            dead_workers: 0,
            total_primes: 0,
            queued_jobs: 0,
            assigned_jobs: 0,
            snapshots_processed: 0,
            snapshots_failed: 0,
            progress: 0.0,
            workers: Vec::new(),
            last_update: now,
        }
    }

    fn from_snapshot(snap: RawSnapshot, now: DateTime<Local>) -> Self {
        let progress = if snap.total_jobs > 0 {
            snap.completed_jobs as f64 / snap.total_jobs as f64 * 100.0
        } else {
            0.0
        };
        let workers = snap
            .worker_ids
            .into_iter()
            .map(|id| Worker {
                id,
                status: WorkerStatus::Active,
            })
            .collect();
        Self {
            total_jobs: snap.total_jobs,
            completed_jobs: snap.completed_jobs,
            active_workers: snap.active_workers,
            dead_workers: snap.dead_workers,
            total_primes: snap.total_primes,
            queued_jobs: snap.queued_jobs,
            assigned_jobs: snap.assigned_jobs,
            snapshots_processed: snap.snapshots_processed,
            snapshots_failed: snap.snapshots_failed,
            progress,
            workers,
            last_update: now,
        }
    }
}

/// The one state container for the dashboard: current stats, the alert
/// feed, and the previous stats kept as the baseline for edge-triggered
/// alerts. Replaced wholesale on every applied poll result.
pub struct Dashboard {
    pub stats: ClusterStats,
    pub alerts: Vec<Alert>,
    previous: Option<ClusterStats>,
    next_alert_id: u64,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            stats: ClusterStats::empty(Local::now()),
            alerts: Vec::new(),
            previous: None,
            next_alert_id: 0,
        }
    }

    /// True once at least one snapshot has been applied successfully.
    pub fn has_data(&self) -> bool {
        self.previous.is_some()
    }

    /// The single reducer transition. Success replaces the stats and may
    /// fire alerts; failure keeps the last-known-good stats on screen and
    /// surfaces one error alert.
    pub fn apply(&mut self, result: Result<RawSnapshot, PollError>) {
        match result {
            Ok(snap) => self.apply_snapshot(snap),
            Err(err) => self.apply_failure(&err),
        }
    }

    fn apply_snapshot(&mut self, snap: RawSnapshot) {
        let now = Local::now();
        let stats = ClusterStats::from_snapshot(snap, now);

        // Dead-worker and backlog alerts are level-triggered: they re-fire
        // every cycle the condition holds. Completion is edge-triggered
        // against the previous snapshot and needs a baseline to exist.
        let mut fired = Vec::new();
        if stats.dead_workers > 0 {
            fired.push(self.make_alert(
                AlertKind::Warning,
                format!("{} worker(s) dead", stats.dead_workers),
                now,
            ));
        }
        if stats.queued_jobs as f64 > stats.total_jobs as f64 * BACKLOG_RATIO {
            fired.push(self.make_alert(
                AlertKind::Warning,
                format!("Queue building up: {} jobs waiting", stats.queued_jobs),
                now,
            ));
        }
        let completed_increased = self
            .previous
            .as_ref()
            .is_some_and(|prev| stats.completed_jobs > prev.completed_jobs);
        if completed_increased {
            fired.push(self.make_alert(
                AlertKind::Success,
                format!(
                    "Job completed! Total primes: {}",
                    crate::ui::util::group_digits(stats.total_primes)
                ),
                now,
            ));
        }
        self.prepend_alerts(fired);

        self.previous = Some(stats.clone());
        self.stats = stats;
    }

    fn apply_failure(&mut self, err: &PollError) {
        // Keep the last-known-good numbers on screen; a transient network
        // failure must not blank the dashboard. last_update stays put too.
        let now = Local::now();
        let alert = self.make_alert(
            AlertKind::Error,
            format!("Failed to reach coordinator: {err}"),
            now,
        );
        self.prepend_alerts(vec![alert]);
    }

    fn make_alert(&mut self, kind: AlertKind, message: String, now: DateTime<Local>) -> Alert {
        // Counter-based ids: several alerts can fire within one poll cycle,
        // so a timestamp alone would not be unique.
        let id = self.next_alert_id;
        self.next_alert_id += 1;
        Alert {
            id,
            kind,
            message,
            timestamp: now,
        }
    }

    fn prepend_alerts(&mut self, mut fired: Vec<Alert>) {
        if fired.is_empty() {
            return;
        }
        fired.append(&mut self.alerts);
        fired.truncate(MAX_ALERTS);
        self.alerts = fired;
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
