use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Seconds since the clock started (sum of clamped deltas).
    pub elapsed: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Frame counter, starting at 0.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped so a stall (debugger, minimized window) does not
/// make time-driven animation jump. `elapsed` accumulates the clamped deltas
/// for the same reason.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    elapsed: Duration,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            elapsed: Duration::ZERO,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the delta baseline without touching `elapsed`.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock using the current time.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;
        self.elapsed += dt;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: self.elapsed.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    #[test]
    fn frame_index_counts_from_zero() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        assert_eq!(clock.tick_at(start + ms(16)).frame_index, 0);
        assert_eq!(clock.tick_at(start + ms(32)).frame_index, 1);
    }

    #[test]
    fn dt_clamped_to_max_after_stall() {
        let mut clock = FrameClock::with_clamps(ms(1), ms(100));
        let start = Instant::now();
        let ft = clock.tick_at(start + Duration::from_secs(5));
        assert!((ft.dt - 0.1).abs() < 1e-6);
    }

    #[test]
    fn dt_clamped_to_min() {
        let mut clock = FrameClock::with_clamps(ms(1), ms(100));
        let start = Instant::now();
        clock.tick_at(start + ms(10));
        let ft = clock.tick_at(start + ms(10));
        assert!((ft.dt - 0.001).abs() < 1e-6);
    }

    #[test]
    fn elapsed_accumulates_clamped_deltas() {
        let mut clock = FrameClock::with_clamps(ms(1), ms(100));
        let base = Instant::now();
        clock.tick_at(base + ms(50));
        clock.tick_at(base + ms(100));
        let ft = clock.tick_at(base + ms(2100));
        // 50 + 50 + 100 (clamped from 2000)
        assert!(ft.elapsed >= 0.2 - 1e-4 && ft.elapsed <= 0.2 + 0.05);
    }
}
