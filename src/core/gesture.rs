use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Only pointer samples this recent contribute to the release velocity.
pub const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// Translation and horizontal velocity (units per second) of a finished pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanRelease {
    pub translation: f32,
    pub velocity: f32,
}

/// Tracks one horizontal pan from pointer-down to pointer-up.
#[derive(Debug, Clone)]
pub struct PanTracker {
    origin: f32,
    samples: VecDeque<(Instant, f32)>,
}

impl PanTracker {
    pub fn begin(x: f32, at: Instant) -> Self {
        let mut samples = VecDeque::new();
        samples.push_back((at, x));
        Self { origin: x, samples }
    }

    /// Record a pointer position and return the translation since the pan began.
    pub fn sample(&mut self, x: f32, at: Instant) -> f32 {
        self.samples.push_back((at, x));
        while self.samples.len() > 1 {
            let oldest = self.samples[0].0;
            if at.saturating_duration_since(oldest) > VELOCITY_WINDOW {
                self.samples.pop_front();
            } else {
                break;
            }
        }
        x - self.origin
    }

    pub fn translation(&self) -> f32 {
        self.samples.back().map_or(0.0, |&(_, x)| x - self.origin)
    }

    pub fn release(mut self, x: f32, at: Instant) -> PanRelease {
        let translation = self.sample(x, at);
        PanRelease {
            translation,
            velocity: self.velocity(),
        }
    }

    fn velocity(&self) -> f32 {
        let (Some(&(t0, x0)), Some(&(t1, x1))) = (self.samples.front(), self.samples.back()) else {
            return 0.0;
        };
        let dt = t1.saturating_duration_since(t0).as_secs_f32();
        if dt <= f32::EPSILON {
            0.0
        } else {
            (x1 - x0) / dt
        }
    }
}
