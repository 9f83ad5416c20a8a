//! Types that mirror the coordinator's status JSON schema.

use serde::Deserialize;

/// One raw status reading from the coordinator's `/api/status` endpoint.
///
/// The coordinator omits fields it has no data for yet, so every numeric
/// field defaults to zero instead of failing the parse.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawSnapshot {
    #[serde(default)]
    pub total_jobs: u64,
    #[serde(default)]
    pub completed_jobs: u64,
    #[serde(default)]
    pub active_workers: u64,
    #[serde(default)]
    pub dead_workers: u64,
    #[serde(default)]
    pub total_primes: u64,
    #[serde(default)]
    pub queued_jobs: u64,
    #[serde(default)]
    pub assigned_jobs: u64,
    #[serde(default)]
    pub snapshots_processed: u64,
    #[serde(default)]
    pub snapshots_failed: u64,
    // ordered as reported; order is preserved in the worker grid
    #[serde(default)]
    pub worker_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_parse_as_zero() {
        let snap: RawSnapshot = serde_json::from_str(r#"{"total_jobs": 10}"#).unwrap();
        assert_eq!(snap.total_jobs, 10);
        assert_eq!(snap.dead_workers, 0);
        assert_eq!(snap.queued_jobs, 0);
        assert!(snap.worker_ids.is_empty());
    }

    #[test]
    fn full_payload_parses() {
        let snap: RawSnapshot = serde_json::from_str(
            r#"{
                "total_jobs": 100,
                "completed_jobs": 40,
                "active_workers": 2,
                "dead_workers": 1,
                "total_primes": 500,
                "queued_jobs": 10,
                "assigned_jobs": 5,
                "snapshots_processed": 7,
                "snapshots_failed": 1,
                "worker_ids": ["w1", "w2"]
            }"#,
        )
        .unwrap();
        assert_eq!(snap.completed_jobs, 40);
        assert_eq!(snap.worker_ids, vec!["w1", "w2"]);
    }
}
