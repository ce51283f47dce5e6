//! Fixed-rate frame pacing.

use std::thread;
use std::time::{Duration, Instant};

/// Blocks until the next frame boundary.
pub trait Clock {
    fn tick(&mut self);
}

/// Sleeps so that ticks land on a fixed schedule.
///
/// When a frame overruns by more than a whole frame the schedule is
/// re-anchored to now instead of running a burst of catch-up ticks.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            next: Instant::now() + frame,
        }
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Next scheduled boundary after a tick that ended at `now`.
    fn advance(&mut self, now: Instant) -> Option<Duration> {
        let wait = self.next.checked_duration_since(now);
        self.next += self.frame;
        if self.next < now {
            self.next = now + self.frame;
        }
        wait
    }
}

impl Clock for FrameClock {
    fn tick(&mut self) {
        if let Some(wait) = self.advance(Instant::now()) {
            thread::sleep(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_on_schedule() {
        let frame = Duration::from_millis(16);
        let mut clock = FrameClock::new(frame);
        let start = clock.next - frame;

        let wait = clock.advance(start + Duration::from_millis(4));
        assert_eq!(wait, Some(Duration::from_millis(12)));
        assert_eq!(clock.next, start + frame * 2);
    }

    #[test]
    fn test_overrun_reanchors() {
        let frame = Duration::from_millis(16);
        let mut clock = FrameClock::new(frame);
        let start = clock.next - frame;
        let late = start + Duration::from_millis(100);

        let wait = clock.advance(late);
        assert_eq!(wait, None);
        assert_eq!(clock.next, late + frame);
    }

    #[test]
    fn test_tick_waits_about_one_frame() {
        let mut clock = FrameClock::new(Duration::from_millis(10));
        let started = Instant::now();
        clock.tick();
        clock.tick();
        assert!(started.elapsed() >= Duration::from_millis(15));
    }
}
