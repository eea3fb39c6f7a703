use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Counts completed and failed search estimations across a process.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub completed: usize,
    pub failed: usize,
    pub points_generated: usize,
}

#[derive(Default)]
struct Metrics {
    completed: usize,
    failed: usize,
    points_generated: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics::default()),
        }
    }

    pub fn record_completed(&self, points: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.completed += 1;
            metrics.points_generated += points;
        }
    }

    pub fn record_failure(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.failed += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            MetricsSnapshot {
                completed: metrics.completed,
                failed: metrics.failed,
                points_generated: metrics.points_generated,
            }
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn counts_accumulate() {
        let metrics = MetricsRecorder::new();
        metrics.record_completed(100);
        metrics.record_completed(50);
        metrics.record_failure();
        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                completed: 2,
                failed: 1,
                points_generated: 150,
            }
        );
    }

    #[test]
    fn recorder_is_shareable_across_threads() {
        let metrics = Arc::new(MetricsRecorder::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let metrics = Arc::clone(&metrics);
                thread::spawn(move || metrics.record_completed(10))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(metrics.snapshot().completed, 4);
        assert_eq!(metrics.snapshot().points_generated, 40);
    }
}
