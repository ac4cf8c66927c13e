//! Frame-rate limiting clock

use std::time::{Duration, Instant};

/// Sleeps between frames so the loop runs no faster than the requested rate
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Block until at least `1 / fps` seconds have passed since the previous
    /// tick, then return the real elapsed time in seconds.
    ///
    /// An `fps` of 0 disables the limit.
    pub fn tick(&mut self, fps: u32) -> f32 {
        if fps > 0 {
            let frame = Duration::from_secs_f64(1.0 / fps as f64);
            let elapsed = self.last.elapsed();
            if elapsed < frame {
                std::thread::sleep(frame - elapsed);
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt.as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
