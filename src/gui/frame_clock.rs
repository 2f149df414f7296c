use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Measures frame durations and caps the frame rate.
pub struct FrameClock {
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }
}

impl FrameClock {
    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Sleeps out the rest of a `1 / max_fps` frame and starts the next one.
    ///
    /// Returns the duration of the finished frame.
    pub fn finish_frame(&mut self, max_fps: f64) -> Duration {
        let target_frametime = Duration::from_secs_f64(1. / max_fps);
        let before_wait = self.frame_timer.elapsed();
        if target_frametime > before_wait {
            sleep(target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed();
        self.frametime_smoothed += (frametime.as_secs_f64() - self.frametime_smoothed) * 0.1;
        self.frame_timer = Instant::now();
        frametime
    }
}
