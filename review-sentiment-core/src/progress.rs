use {
    std::time::{Duration, Instant},
    tracing::info,
};

const REPORT_INTERVAL: Duration = Duration::from_secs(10);

/// Throughput log for long batches. Reports at most once per interval so it
/// stays readable in non-tty container logs.
pub struct Progress {
    stage: &'static str,
    expected: usize,
    started_at: Instant,
    reported_at: Instant,
    processed: usize,
}

impl Progress {
    pub fn new(stage: &'static str, expected: usize) -> Self {
        let now = Instant::now();
        Self {
            stage,
            expected,
            started_at: now,
            reported_at: now,
            processed: 0,
        }
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Returns true when this call produced a log line.
    pub fn update(&mut self) -> bool {
        self.processed += 1;
        self.report_if_due(Instant::now())
    }

    pub fn finish(&self) {
        info!(
            "{}: {} of {} records done in {:.1}s",
            self.stage,
            self.processed,
            self.expected,
            self.started_at.elapsed().as_secs_f32(),
        );
    }

    fn report_if_due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.reported_at) < REPORT_INTERVAL {
            return false;
        }

        self.reported_at = now;
        let elapsed = now.duration_since(self.started_at).as_secs_f32();
        let rate = if elapsed > 0.0 { self.processed as f32 / elapsed } else { 0.0 };
        info!("{}: {}/{} records ({:.2}/second)", self.stage, self.processed, self.expected, rate);
        true
    }
}
