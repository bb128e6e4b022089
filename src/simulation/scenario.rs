//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the populated `Simulation`
//! - the frame clock and the visible bounds used by draw passes
//!
//! With the `viewer` feature the scenario is a Bevy `Resource` consumed by
//! the 2D viewer systems

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::configuration::config::{CoincidentConfig, ScenarioConfig, SeedingConfig};
use crate::error::SimError;
use crate::visualization::surface::{Bounds, FrameContext, Surface};

use super::clock::FrameClock;
use super::engine::Engine;
use super::forces::CoincidentPolicy;
use super::params::Parameters;
use super::world::{Simulation, TickReport};

/// Bounds used when a scenario has no seeding region
pub const DEFAULT_BOUNDS: Bounds = Bounds { width: 1280.0, height: 720.0 };

/// Runtime bundle built from a [`ScenarioConfig`]
#[cfg_attr(feature = "viewer", derive(bevy::prelude::Resource))]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub simulation: Simulation,
    pub clock: FrameClock,
    pub bounds: Bounds,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let coincident = match p_cfg.coincident {
            CoincidentConfig::Skip => CoincidentPolicy::Skip,
            CoincidentConfig::Clamp => CoincidentPolicy::Clamp {
                min_distance: p_cfg.min_distance,
            },
        };
        let parameters = Parameters {
            g: p_cfg.g,
            coincident,
            max_frame_delta: p_cfg.max_frame_delta,
            seed: p_cfg.seed,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            mode: e_cfg.mode,
            ticks: e_cfg.ticks,
            frame_ms: e_cfg.frame_ms,
            log_every: e_cfg.log_every,
        };

        let mut simulation = Simulation::new(&parameters);

        // Seeded population first, then explicit particles in file order
        let mut bounds = DEFAULT_BOUNDS;
        if let Some(seeding) = &cfg.seeding {
            // Offset the seed so positions and default velocities use separate streams
            let mut rng = ChaCha8Rng::seed_from_u64(parameters.seed.wrapping_add(1));
            seed_particles(&mut simulation, seeding, &mut rng)?;
            bounds = Bounds::new(seeding.width, seeding.height);
        }

        for pc in &cfg.particles {
            match pc.v {
                Some([vx, vy]) => simulation.add_particle_with_velocity(pc.x[0], pc.x[1], pc.m, vx, vy)?,
                None => simulation.add_particle(pc.x[0], pc.x[1], pc.m)?,
            }
        }

        info!(
            particles = simulation.len(),
            total_mass = simulation.total_mass(),
            mode = ?engine.mode,
            "scenario built"
        );

        Ok(Self {
            clock: FrameClock::new(parameters.max_frame_delta),
            engine,
            parameters,
            simulation,
            bounds,
        })
    }

    /// One host frame: physics tick, then a draw pass with the delta derived
    /// from `timestamp` (ms)
    pub fn frame<S: Surface + ?Sized>(&mut self, timestamp: f64, surface: &mut S) -> TickReport {
        let delta_time = self.clock.tick(timestamp);
        let report = self.simulation.update_physics();
        let ctx = FrameContext {
            bounds: self.bounds,
            delta_time,
        };
        self.simulation.draw(surface, &ctx);
        report
    }
}

/// Populate `sim` with `cfg.count` particles placed uniformly in
/// `[w/8, w/8 + w/1.3) x [h/8, h/8 + h/1.3)` with mass uniform in
/// `[mass_min, mass_max)`. Velocities come from the simulation's own rng
pub fn seed_particles(sim: &mut Simulation, cfg: &SeedingConfig, rng: &mut impl Rng) -> Result<(), SimError> {
    let (w, h) = (cfg.width, cfg.height);
    if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
        return Err(SimError::InvalidBounds { width: w, height: h });
    }
    if !(cfg.mass_min > 0.0 && cfg.mass_min < cfg.mass_max && cfg.mass_max.is_finite()) {
        return Err(SimError::InvalidMassRange {
            min: cfg.mass_min,
            max: cfg.mass_max,
        });
    }

    let (x0, y0) = (w / 8.0, h / 8.0);
    let (span_x, span_y) = (w / 1.3, h / 1.3);

    for _ in 0..cfg.count {
        let x = x0 + rng.gen_range(0.0..span_x);
        let y = y0 + rng.gen_range(0.0..span_y);
        let m = rng.gen_range(cfg.mass_min..cfg.mass_max);
        sim.add_particle(x, y, m)?;
    }

    Ok(())
}
