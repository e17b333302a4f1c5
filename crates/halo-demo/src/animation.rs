use halo_engine::render::SceneUniform;
use halo_engine::time::FrameTime;

/// Channel value that bounces between 0 and 1 by a fixed step per frame.
///
/// The bound check runs before the step, so the value overshoots each
/// bound by at most one step before turning around.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorPulse {
    value: f32,
    step: f32,
}

impl ColorPulse {
    pub const fn new(value: f32, step: f32) -> Self {
        Self { value, step }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Advances one frame and returns the new value.
    pub fn advance(&mut self) -> f32 {
        if self.value > 1.0 || self.value < 0.0 {
            self.step = -self.step;
        }
        self.value += self.step;
        self.value
    }
}

impl Default for ColorPulse {
    fn default() -> Self {
        Self::new(0.0, 0.05)
    }
}

/// Which uniform a program animates each frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Animation {
    /// Red channel of `color` follows a [`ColorPulse`]; other channels stay 1.
    RedPulse(ColorPulse),
    /// `time` carries the seconds elapsed since the first frame.
    ElapsedTime,
}

impl Animation {
    /// Produces this frame's uniforms from the previous ones.
    pub fn apply(&mut self, time: &FrameTime, uniforms: SceneUniform) -> SceneUniform {
        match self {
            Animation::RedPulse(pulse) => uniforms.with_color([pulse.advance(), 1.0, 1.0, 1.0]),
            Animation::ElapsedTime => uniforms.with_time(time.elapsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn frame(elapsed: f32) -> FrameTime {
        FrameTime { dt: 0.016, elapsed, now: Instant::now(), frame_index: 0 }
    }

    #[test]
    fn first_step_from_zero() {
        let mut p = ColorPulse::default();
        assert!((p.advance() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn exactly_one_does_not_turn() {
        let mut p = ColorPulse::new(1.0, 0.05);
        assert!((p.advance() - 1.05).abs() < 1e-6);
        assert!(p.step() > 0.0);
    }

    #[test]
    fn turns_above_one() {
        let mut p = ColorPulse::new(1.05, 0.05);
        assert!((p.advance() - 1.0).abs() < 1e-6);
        assert!(p.step() < 0.0);
    }

    #[test]
    fn turns_below_zero() {
        let mut p = ColorPulse::new(-0.05, -0.05);
        assert!(p.advance().abs() < 1e-6);
        assert!(p.step() > 0.0);
    }

    #[test]
    fn stays_within_one_step_of_unit_range() {
        let mut p = ColorPulse::default();
        for _ in 0..1000 {
            let v = p.advance();
            assert!((-0.05 - 1e-3..=1.05 + 1e-3).contains(&v), "value {v}");
        }
    }

    #[test]
    fn pulse_writes_red_channel_only() {
        let mut anim = Animation::RedPulse(ColorPulse::default());
        let u = anim.apply(&frame(0.0), SceneUniform::default());
        assert!((u.color[0] - 0.05).abs() < 1e-6);
        assert_eq!(&u.color[1..], &[1.0, 1.0, 1.0]);
        assert_eq!(u.time, 0.0);
    }

    #[test]
    fn elapsed_time_written_to_time() {
        let mut anim = Animation::ElapsedTime;
        let u = anim.apply(&frame(3.5), SceneUniform::default());
        assert_eq!(u.time, 3.5);
        assert_eq!(u.color, [1.0, 1.0, 1.0, 1.0]);
    }
}
