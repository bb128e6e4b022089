//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings read from a scenario:
//! - gravitational constant `G`,
//! - how coincident pairs are treated (`coincident`),
//! - the largest frame delta handed to pulse timers,
//! - the rng seed used for default velocities and seeding
//!
//! The constants below are fixed properties of a particle and are not configurable.

use super::forces::CoincidentPolicy;

/// Gravitational constant of the reference simulation
pub const DEFAULT_G: f64 = 0.01;

/// Particles heavier than this glow and pulse once when created
pub const GLOW_THRESHOLD: f64 = 1000.0;

/// Length of a glow pulse, in the caller's delta-time unit (ms for frame-driven hosts)
pub const PULSE_DURATION: f64 = 100.0;

/// Default velocity components are drawn uniformly from `[-MAX, MAX]`
pub const DEFAULT_VELOCITY_MAX: f64 = 0.5;

/// Largest frame delta (ms) accepted by the frame clock by default
pub const DEFAULT_MAX_FRAME_DELTA: f64 = 250.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub coincident: CoincidentPolicy, // zero / tiny separation handling
    pub max_frame_delta: f64, // clamp for host frame deltas
    pub seed: u64, // deterministic seed
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            coincident: CoincidentPolicy::Skip,
            max_frame_delta: DEFAULT_MAX_FRAME_DELTA,
            seed: 42,
        }
    }
}
