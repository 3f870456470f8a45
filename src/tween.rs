///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Tween
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use std::time::Duration;

/// Duration of programmatic and attention rotations.
pub const DEFAULT_ROTATE_ANIM_TIME: Duration = Duration::from_millis(500);
/// Duration of the post-release fit rotation.
pub const FIT_ANIM_TIME: Duration = Duration::from_millis(300);

/// A fixed-duration eased interpolation between two angles, advanced by the
/// nanosecond intervals druid reports with each anim frame.
#[derive(Debug, Clone)]
pub struct Tween {
    start: f64,
    end: f64,
    duration: Duration,
    elapsed: Duration,
}

impl Tween {
    pub fn new(start: f64, end: f64, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Advances the tween and returns the interpolated value.
    pub fn advance(&mut self, interval_nanos: u64) -> f64 {
        self.elapsed = (self.elapsed + Duration::from_nanos(interval_nanos)).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> f64 {
        if self.duration.is_zero() || self.elapsed >= self.duration {
            return self.end;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.start + (self.end - self.start) * ease_in_out(t)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Smoothstep easing: fast in the middle, slow at both ends.
fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn starts_at_start_and_lands_on_end() {
        let mut tween = Tween::new(0.0, 180.0, Duration::from_millis(300));
        assert_relative_eq!(tween.value(), 0.0);
        tween.advance(Duration::from_millis(300).as_nanos() as u64);
        assert_relative_eq!(tween.value(), 180.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn overshooting_the_duration_clamps_to_the_end() {
        let mut tween = Tween::new(90.0, -90.0, Duration::from_millis(100));
        assert_relative_eq!(tween.advance(10_u64.pow(9)), -90.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn progresses_monotonically_toward_the_target() {
        let mut tween = Tween::new(0.0, 360.0, Duration::from_millis(300));
        let mut previous = tween.value();
        for _ in 0..30 {
            let value = tween.advance(10_000_000); // 10ms
            assert!(value >= previous, "{value} < {previous}");
            previous = value;
        }
        assert_relative_eq!(previous, 360.0);
    }

    #[test]
    fn zero_duration_jumps_to_the_end() {
        let tween = Tween::new(5.0, 42.0, Duration::ZERO);
        assert_relative_eq!(tween.value(), 42.0);
        assert!(tween.is_finished());
    }
}
