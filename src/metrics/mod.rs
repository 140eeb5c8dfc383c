use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;
use std::time::Duration;

/// Counters accumulated over the life of a snapping session.
#[derive(Debug, Default, Clone)]
pub struct SessionMetrics {
    drags: u64,
    moves: u64,
    snaps: u64,
    misses: u64,
    cancels: u64,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_drag(&mut self) {
        self.drags = self.drags.saturating_add(1);
    }

    pub fn record_move(&mut self) {
        self.moves = self.moves.saturating_add(1);
    }

    pub fn record_snap(&mut self) {
        self.snaps = self.snaps.saturating_add(1);
    }

    /// A drag that ended outside every zone.
    pub fn record_miss(&mut self) {
        self.misses = self.misses.saturating_add(1);
    }

    pub fn record_cancel(&mut self) {
        self.cancels = self.cancels.saturating_add(1);
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            drags: self.drags,
            moves: self.moves,
            snaps: self.snaps,
            misses: self.misses,
            cancels: self.cancels,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub drags: u64,
    pub moves: u64,
    pub snaps: u64,
    pub misses: u64,
    pub cancels: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "session_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert("drags".to_string(), json!(self.drags));
        map.insert("moves".to_string(), json!(self.moves));
        map.insert("snaps".to_string(), json!(self.snaps));
        map.insert("misses".to_string(), json!(self.misses));
        map.insert("cancels".to_string(), json!(self.cancels));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_into_snapshot() {
        let mut metrics = SessionMetrics::new();
        metrics.record_drag();
        metrics.record_move();
        metrics.record_move();
        metrics.record_snap();
        metrics.record_cancel();
        metrics.record_miss();

        let snapshot = metrics.snapshot(Duration::from_millis(1500));
        assert_eq!(snapshot.uptime_ms, 1500);
        assert_eq!(snapshot.drags, 1);
        assert_eq!(snapshot.moves, 2);
        assert_eq!(snapshot.snaps, 1);
        assert_eq!(snapshot.misses, 1);
        assert_eq!(snapshot.cancels, 1);
    }

    #[test]
    fn snapshot_becomes_a_log_event() {
        let snapshot = SessionMetrics::new().snapshot(Duration::ZERO);
        let event = snapshot.to_log_event("zonesnap::runtime.metrics");
        assert_eq!(event.message, "session_metrics");
        assert_eq!(event.fields.get("snaps"), Some(&json!(0)));
    }
}
