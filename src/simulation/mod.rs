pub mod states;
pub mod pulse;
pub mod params;
pub mod engine;
pub mod forces;
pub mod merge;
pub mod integrator;
pub mod clock;
pub mod world;
pub mod scenario;
