use std::sync::Mutex;

/// Fetch counters shown in the dashboard status line.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub fetches: usize,
    pub failures: usize,
    pub records: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_fetch(&self, records: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.fetches += 1;
            metrics.records = records;
        }
    }

    pub fn record_failure(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.failures += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner.lock().map(|metrics| *metrics).unwrap_or_default()
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

    #[test]
    fn counts_fetches_and_failures() {
        let metrics = MetricsRecorder::new();
        metrics.record_failure();
        metrics.record_fetch(12);
        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                fetches: 1,
                failures: 1,
                records: 12
            }
        );
    }
}
