pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::SimError;

pub use simulation::states::{Particle, NVec2, radius_for_mass};
pub use simulation::pulse::{Pulse, PulseState};
pub use simulation::params::{Parameters, GLOW_THRESHOLD, PULSE_DURATION};
pub use simulation::forces::{PairForce, ForceSet, NewtonianGravity, CoincidentPolicy};
pub use simulation::merge::combine;
pub use simulation::integrator::euler_integrator;
pub use simulation::clock::FrameClock;
pub use simulation::world::{Simulation, TickReport};
pub use simulation::scenario::{Scenario, seed_particles};

pub use configuration::config::{RunMode, CoincidentConfig, EngineConfig, ParametersConfig, SeedingConfig, ParticleConfig, ScenarioConfig};

pub use visualization::surface::{Bounds, FrameContext, ParticleSprite, Surface, RecordingSurface};
#[cfg(feature = "viewer")]
pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_update_physics;
