use std::time::Duration;

/// Wall-clock statistics over scene frames, reported when the session ends.
#[derive(Debug, Default)]
pub struct FrameProfiler {
    frames: u64,
    total: Duration,
    worst: Duration,
}

impl FrameProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, elapsed: Duration) {
        self.frames += 1;
        self.total += elapsed;
        self.worst = self.worst.max(elapsed);
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn mean(&self) -> Option<Duration> {
        u32::try_from(self.frames)
            .ok()
            .filter(|&n| n > 0)
            .map(|n| self.total / n)
    }

    pub fn worst(&self) -> Duration {
        self.worst
    }

    pub fn report(&self) {
        match self.mean() {
            Some(mean) => log::info!(
                "frames = {}, mean = {:.3} ms, worst = {:.3} ms",
                self.frames(),
                mean.as_secs_f64() * 1e3,
                self.worst().as_secs_f64() * 1e3
            ),
            None => log::info!("no frames recorded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profiler_has_no_mean() {
        let p = FrameProfiler::new();
        assert_eq!(p.frames(), 0);
        assert_eq!(p.mean(), None);
        assert_eq!(p.worst(), Duration::ZERO);
    }

    #[test]
    fn tracks_mean_and_worst() {
        let mut p = FrameProfiler::new();
        p.record(Duration::from_millis(2));
        p.record(Duration::from_millis(6));
        p.record(Duration::from_millis(4));

        assert_eq!(p.frames(), 3);
        assert_eq!(p.mean(), Some(Duration::from_millis(4)));
        assert_eq!(p.worst(), Duration::from_millis(6));
    }
}
