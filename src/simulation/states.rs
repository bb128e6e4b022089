//! Core state types for the particle simulation
//!
//! A `Particle` is a 2D point mass with a derived radius (`mass^0.25`),
//! a `glow` flag fixed at construction and its own glow [`Pulse`].
//! Mass never changes after construction; merging produces a new particle.

use nalgebra::Vector2;
use rand::Rng;

use crate::error::SimError;
use crate::visualization::surface::Bounds;

use super::params::{DEFAULT_VELOCITY_MAX, GLOW_THRESHOLD};
use super::pulse::Pulse;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    x: NVec2, // position
    v: NVec2, // velocity
    m: f64, // mass, always > 0
    radius: f64, // m^0.25
    glow: bool, // m > GLOW_THRESHOLD
    pulse: Pulse,
}

/// Radius used for collisions and drawing
pub fn radius_for_mass(mass: f64) -> f64 {
    mass.powf(0.25)
}

impl Particle {
    /// Build a particle with an explicit velocity.
    /// Glowing particles (mass above [`GLOW_THRESHOLD`]) start pulsing immediately
    pub fn new(x: NVec2, v: NVec2, m: f64) -> Result<Self, SimError> {
        if !m.is_finite() || m <= 0.0 {
            return Err(SimError::InvalidMass(m));
        }
        if !(x.x.is_finite() && x.y.is_finite() && v.x.is_finite() && v.y.is_finite()) {
            return Err(SimError::NonFiniteState);
        }

        Ok(Self::build(x, v, m))
    }

    /// Construction without validation, for callers that already guarantee `m > 0`
    pub(crate) fn build(x: NVec2, v: NVec2, m: f64) -> Self {
        let glow = m > GLOW_THRESHOLD;
        let mut pulse = Pulse::default();
        if glow {
            pulse.start();
        }

        Self {
            x,
            v,
            m,
            radius: radius_for_mass(m),
            glow,
            pulse,
        }
    }

    /// Build a particle whose velocity components are drawn independently
    /// from `[-0.5, 0.5]`
    pub fn with_random_velocity(x: NVec2, m: f64, rng: &mut impl Rng) -> Result<Self, SimError> {
        let v = NVec2::new(
            rng.gen_range(-DEFAULT_VELOCITY_MAX..=DEFAULT_VELOCITY_MAX),
            rng.gen_range(-DEFAULT_VELOCITY_MAX..=DEFAULT_VELOCITY_MAX),
        );
        Self::new(x, v, m)
    }

    /// Impulse-style update: `v += f / m`, one tick is the implicit time unit
    pub fn apply_force(&mut self, f: NVec2) {
        self.v += f / self.m;
    }

    /// Explicit Euler position step with unit time step
    pub fn integrate_position(&mut self) {
        self.x += self.v;
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        (other.x - self.x).norm()
    }

    /// Strict overlap test; exact tangency is not a collision
    pub fn collides_with(&self, other: &Particle) -> bool {
        self.distance_to(other) < self.radius + other.radius
    }

    /// True when the bounding circle reaches into the open region `(0, width) x (0, height)`
    pub fn is_visible(&self, bounds: Bounds) -> bool {
        let r = self.radius;
        let inside_x = self.x.x + r > 0.0 && self.x.x - r < bounds.width;
        let inside_y = self.x.y + r > 0.0 && self.x.y - r < bounds.height;
        inside_x && inside_y
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn glow(&self) -> bool {
        self.glow
    }

    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    pub fn pulse(&self) -> &Pulse {
        &self.pulse
    }

    /// Advance the glow pulse; does nothing unless the particle is pulsing
    pub fn advance_pulse(&mut self, delta_time: f64) {
        self.pulse.advance(delta_time);
    }
}
