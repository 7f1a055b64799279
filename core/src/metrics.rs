// core/src/metrics.rs
use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

/// Tellere for analyse-pipelinen. Egen Registry per instans;
/// embedderen bestemmer selv hvordan den eksponeres.
pub struct Metrics {
    registry: Registry,
    sessions_resolved: IntCounterVec,
    documents_rejected: IntCounter,
    summary_requests: IntCounter,
    summary_failures: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let sessions_resolved = IntCounterVec::new(
            Opts::new("sessions_resolved_total", "Resolved sessions by source"),
            &["source"],
        )
        .unwrap();
        let documents_rejected = IntCounter::new(
            "documents_rejected_total",
            "Documents without usable activity data",
        )
        .unwrap();
        let summary_requests =
            IntCounter::new("summary_requests_total", "AI summary requests issued").unwrap();
        let summary_failures =
            IntCounter::new("summary_failures_total", "AI summary requests that failed").unwrap();

        registry.register(Box::new(sessions_resolved.clone())).unwrap();
        registry.register(Box::new(documents_rejected.clone())).unwrap();
        registry.register(Box::new(summary_requests.clone())).unwrap();
        registry.register(Box::new(summary_failures.clone())).unwrap();

        Self {
            registry,
            sessions_resolved,
            documents_rejected,
            summary_requests,
            summary_failures,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Teller løste økter per kilde ("session" | "lap" | "records").
pub fn sessions_resolved_total(metrics: &Metrics, source: &str) -> IntCounter {
    metrics.sessions_resolved.with_label_values(&[source])
}

pub fn documents_rejected_total(metrics: &Metrics) -> IntCounter {
    metrics.documents_rejected.clone()
}

pub fn summary_requests_total(metrics: &Metrics) -> IntCounter {
    metrics.summary_requests.clone()
}

pub fn summary_failures_total(metrics: &Metrics) -> IntCounter {
    metrics.summary_failures.clone()
}
