//! High-level runtime engine settings
//!
//! Selects how a `Scenario` is run (headless tick loop or windowed viewer)
//! and the knobs of the headless loop

use crate::configuration::config::RunMode;

#[derive(Debug, Clone)]
pub struct Engine {
    pub mode: RunMode, // headless or viewer
    pub ticks: u64, // headless tick count
    pub frame_ms: f64, // synthetic frame period for headless runs
    pub log_every: u64, // ticks between diagnostics, 0 = never
}
