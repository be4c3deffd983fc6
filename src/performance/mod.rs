//! # Frame Timing
//!
//! [`FrameClock`] turns wall-clock time into the per-frame `dt` that drives
//! camera movement and animation, and keeps a rolling frame-rate estimate.
//!
//! ```rust
//! use ferris_view::performance::FrameClock;
//!
//! let mut clock = FrameClock::new();
//! // In your main loop
//! let dt = clock.tick();
//! assert!(dt >= 0.0);
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of recent frames averaged into the frame-rate estimate
const MAX_SAMPLES: usize = 120;
const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Monotonic frame timer
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Ring buffer of recent frame times for averaging
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    last_report: Instant,
    fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(MAX_SAMPLES),
            last_frame: now,
            last_report: now,
            fps: 0.0,
        }
    }

    /// Seconds since the previous tick, never negative.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        // saturates to zero if `now` is somehow behind the previous frame
        let frame_time = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        if self.frame_times.len() >= MAX_SAMPLES {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);
        self.update_fps();

        if now.saturating_duration_since(self.last_report) >= REPORT_INTERVAL {
            log::debug!("{:.1} fps ({:.2} ms/frame)", self.fps, self.average_frame_ms());
            self.last_report = now;
        }

        frame_time.as_secs_f32()
    }

    fn update_fps(&mut self) {
        let average_ms = self.average_frame_ms();
        self.fps = if average_ms > 0.0 { 1000.0 / average_ms } else { 0.0 };
    }

    fn average_frame_ms(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: Duration = self.frame_times.iter().sum();
        total.as_secs_f32() * 1000.0 / self.frame_times.len() as f32
    }

    /// Frame rate averaged over recent frames
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Forgets history and restarts timing from now, so a long pause (window
    /// hidden, debugger) does not produce a huge `dt` on the next frame.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
