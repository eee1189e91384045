//! Frame pacing
//!
//! The loop runs one update per frame: measure the full frame time as
//! `dt`, do the work, then sleep away whatever is left of the target
//! frame time.

use std::time::{Duration, Instant};

/// Sleeps each frame out to a target rate and hands out capped delta times
pub struct FramePacer {
    target_frame_time: Duration,
    max_dt: f32,
    last_frame: Instant,
    frame_start: Instant,
}

impl FramePacer {
    /// Create a pacer for `target_fps`, capping dt at `max_dt` seconds
    ///
    /// A `target_fps` that yields no representable frame time (zero,
    /// negative, NaN, or so small the frame time overflows) disables sleeping.
    pub fn new(target_fps: f32, max_dt: f32) -> Self {
        let target_frame_time = frame_time(target_fps);
        let now = Instant::now();
        Self {
            target_frame_time,
            max_dt,
            last_frame: now,
            frame_start: now,
        }
    }

    pub fn target_frame_time(&self) -> Duration {
        self.target_frame_time
    }

    /// Start a frame and return the seconds since the previous one
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_start = now;
        cap_dt(raw_dt, self.max_dt)
    }

    /// Sleep for the rest of the frame, if any remains
    pub fn end_frame(&self) {
        if let Some(rest) = remaining(self.target_frame_time, self.frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(60.0, 0.25)
    }
}

fn frame_time(target_fps: f32) -> Duration {
    if target_fps > 0.0 {
        Duration::try_from_secs_f32(1.0 / target_fps).unwrap_or(Duration::ZERO)
    } else {
        Duration::ZERO
    }
}

/// Time left to sleep after `work` in a frame of `target`
pub fn remaining(target: Duration, work: Duration) -> Option<Duration> {
    target.checked_sub(work).filter(|rest| !rest.is_zero())
}

/// Clamp a measured frame time into `0.0..=max_dt`
///
/// Prevents a huge step after a stall (first frame, window drag).
pub fn cap_dt(raw_dt: f32, max_dt: f32) -> f32 {
    raw_dt.clamp(0.0, max_dt.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_after_short_frame() {
        let target = Duration::from_millis(16);
        assert_eq!(remaining(target, Duration::from_millis(10)), Some(Duration::from_millis(6)));
    }

    #[test]
    fn test_no_sleep_after_long_frame() {
        let target = Duration::from_millis(16);
        assert_eq!(remaining(target, Duration::from_millis(16)), None);
        assert_eq!(remaining(target, Duration::from_millis(40)), None);
    }

    #[test]
    fn test_cap_dt() {
        assert_eq!(cap_dt(0.016, 0.25), 0.016);
        assert_eq!(cap_dt(3.0, 0.25), 0.25);
        assert_eq!(cap_dt(-1.0, 0.25), 0.0);
    }

    #[test]
    fn test_target_frame_time() {
        let pacer = FramePacer::default();
        let expected = Duration::from_secs_f32(1.0 / 60.0);
        assert_eq!(pacer.target_frame_time(), expected);
        assert_eq!(FramePacer::new(0.0, 0.25).target_frame_time(), Duration::ZERO);
    }

    #[test]
    fn test_unrepresentable_target_disables_sleep() {
        assert_eq!(FramePacer::new(1e-40, 0.25).target_frame_time(), Duration::ZERO);
        assert_eq!(FramePacer::new(-30.0, 0.25).target_frame_time(), Duration::ZERO);
        assert_eq!(FramePacer::new(f32::NAN, 0.25).target_frame_time(), Duration::ZERO);
        assert_eq!(frame_time(0.5), Duration::from_secs(2));
    }

    #[test]
    fn test_begin_frame_is_capped() {
        let mut pacer = FramePacer::new(60.0, 0.25);
        std::thread::sleep(Duration::from_millis(5));
        let dt = pacer.begin_frame();
        assert!(dt > 0.0 && dt <= 0.25);

        let mut pacer = FramePacer::new(60.0, 0.001);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(pacer.begin_frame(), 0.001);
    }
}
