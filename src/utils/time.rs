use std::time::{Duration, Instant};

/// Frame timer driving animation playback.
pub struct Timer {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Samples the wall clock and starts a new frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_update;
        self.elapsed = now - self.start_time;
        self.last_update = now;
        self.frame_count += 1;
    }

    /// Starts a new frame of fixed length, ignoring the wall clock.
    pub fn step(&mut self, delta: Duration) {
        self.delta = delta;
        self.elapsed += delta;
        self.last_update = Instant::now();
        self.frame_count += 1;
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Wall-clock time since the timer was created.
    #[must_use]
    pub fn since_start(&self) -> Duration {
        self.start_time.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_steps_accumulate() {
        let mut timer = Timer::new();
        timer.step(Duration::from_millis(250));
        timer.step(Duration::from_millis(250));

        assert_eq!(timer.frame_count, 2);
        assert!((timer.dt_seconds() - 0.25).abs() < 1e-6);
        assert!((timer.elapsed_seconds() - 0.5).abs() < 1e-6);
    }
}
