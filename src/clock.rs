//! Frame-rate limiting and logical timers.

use std::time::{Duration, Instant};

/// Caps the loop at a fixed tick rate and reports the time between ticks.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last_tick: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Sleep out the rest of the current frame, then return the time elapsed
    /// since the previous call.
    pub fn tick(&mut self) -> Duration {
        let busy = self.last_tick.elapsed();
        if busy < self.frame {
            std::thread::sleep(self.frame - busy);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        elapsed
    }
}

/// Fires once per full interval of elapsed time fed into it.
///
/// Polled once per tick with the clock's delta, so no timer thread exists.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: Duration,
    accumulated: Duration,
}

impl SpawnTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Add `elapsed` and return how many intervals completed.
    pub fn poll(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.accumulated += elapsed;
        let mut fired = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            fired += 1;
        }
        fired
    }
}
