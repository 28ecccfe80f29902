use std::time::Duration;

/// Integration step; small enough to stay stable for stiff springs.
const SUBSTEP_SECS: f32 = 1.0 / 240.0;

/// Longest frame gap fed to the integrator. Stalls longer than this slow the
/// animation down instead of making it jump.
const MAX_FRAME_SECS: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from the target below which the spring may come to rest.
    pub rest_displacement: f32,
    /// Speed (units per second) below which the spring may come to rest.
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 120.0,
            damping: 15.0,
            mass: 1.0,
            rest_displacement: 0.01,
            rest_speed: 2.0,
        }
    }
}

/// A damped spring pulling a scalar position toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, from: f32, to: f32) -> Self {
        let mut spring = Self {
            config,
            position: from,
            velocity: 0.0,
            target: to,
        };
        spring.snap_if_resting();
        spring
    }

    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advance by `dt`. Returns true once the spring has come to rest.
    pub fn step(&mut self, dt: Duration) -> bool {
        let mut remaining = dt.as_secs_f32().min(MAX_FRAME_SECS);
        while remaining > 0.0 && !self.is_settled() {
            let h = remaining.min(SUBSTEP_SECS);
            let displacement = self.position - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass.max(f32::EPSILON) * h;
            self.position += self.velocity * h;
            remaining -= h;
            self.snap_if_resting();
        }
        self.is_settled()
    }

    fn snap_if_resting(&mut self) {
        let near = (self.position - self.target).abs() < self.config.rest_displacement;
        let slow = self.velocity.abs() < self.config.rest_speed;
        if near && slow {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }
}
