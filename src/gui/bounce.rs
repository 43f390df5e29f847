//! Bounce feedback for the floating icon

use std::time::{Duration, Instant};

/// Length of one bounce
pub const DURATION: Duration = Duration::from_millis(500);

/// Peak lift in logical pixels
pub const HEIGHT: f32 = 20.0;

/// A running bounce
#[derive(Debug, Clone, Copy)]
pub struct Bounce {
    started: Instant,
}

impl Bounce {
    pub fn start(now: Instant) -> Self {
        Self { started: now }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= DURATION
    }

    /// Vertical offset at `now`; negative is up, zero when finished
    pub fn offset(&self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.started).as_secs_f32();
        let t = (elapsed / DURATION.as_secs_f32()).clamp(0.0, 1.0);
        let eased = out_bounce(t);

        // Keyframes: rest -> peak at the midpoint -> rest
        let lift = if eased <= 0.5 {
            eased * 2.0
        } else {
            (1.0 - eased) * 2.0
        };
        -HEIGHT * lift
    }
}

fn out_bounce(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_and_ends_at_rest() {
        let now = Instant::now();
        let bounce = Bounce::start(now);
        assert_eq!(bounce.offset(now), 0.0);
        assert!(bounce.offset(now + DURATION).abs() < 1e-3);
        assert!(bounce.is_finished(now + DURATION));
        assert!(!bounce.is_finished(now + DURATION / 2));
    }

    #[test]
    fn test_stays_within_height() {
        let now = Instant::now();
        let bounce = Bounce::start(now);
        for ms in 0..=500 {
            let offset = bounce.offset(now + Duration::from_millis(ms));
            assert!(offset <= 0.0 && offset >= -HEIGHT - 1e-3);
        }
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(out_bounce(0.0), 0.0);
        assert!((out_bounce(1.0) - 1.0).abs() < 1e-6);
    }
}
