//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – how the scenario is run (headless loop or viewer)
//! - [`ParametersConfig`] – physical constants and numerical policies
//! - [`SeedingConfig`]    – optional random population inside a region
//! - [`ParticleConfig`]   – optional explicit particles
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   mode: "headless"        # or "viewer"
//!   ticks: 600
//!   frame_ms: 16.0
//!   log_every: 60
//!
//! parameters:
//!   G: 0.01                 # gravitational constant
//!   coincident: "skip"      # or "clamp"
//!   min_distance: 1.0e-6    # only used by "clamp"
//!   max_frame_delta: 250.0  # ms
//!   seed: 42
//!
//! seeding:
//!   count: 1000
//!   width: 1280.0
//!   height: 720.0
//!   mass_min: 1.0
//!   mass_max: 11.0
//!
//! particles:
//!   - x: [ 640.0, 360.0 ]
//!     v: [ 0.0, 0.0 ]       # optional, random when omitted
//!     m: 1500.0
//! ```

use serde::Deserialize;

use crate::simulation::params::{DEFAULT_G, DEFAULT_MAX_FRAME_DELTA};

/// How the binary runs a scenario
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[serde(rename = "headless")] // fixed number of ticks, no window
    #[default]
    Headless,

    #[serde(rename = "viewer")] // bevy window driving ticks from its frame loop
    Viewer,
}

/// Zero-distance handling for the gravity term
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoincidentConfig {
    #[serde(rename = "skip")]
    #[default]
    Skip,

    #[serde(rename = "clamp")]
    Clamp,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default)]
    pub mode: RunMode,
    #[serde(default = "default_ticks")]
    pub ticks: u64, // headless tick count
    #[serde(default = "default_frame_ms")]
    pub frame_ms: f64, // synthetic frame period in ms
    #[serde(default = "default_log_every")]
    pub log_every: u64, // ticks between diagnostics, 0 = never
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::default(),
            ticks: default_ticks(),
            frame_ms: default_frame_ms(),
            log_every: default_log_every(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(rename = "G", default = "default_g")]
    pub g: f64, // gravitational constant
    #[serde(default)]
    pub coincident: CoincidentConfig,
    #[serde(default = "default_min_distance")]
    pub min_distance: f64, // clamp floor for the force distance
    #[serde(default = "default_max_frame_delta")]
    pub max_frame_delta: f64, // ms
    #[serde(default = "default_seed")]
    pub seed: u64, // deterministic seed to make runs reproducible
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: default_g(),
            coincident: CoincidentConfig::default(),
            min_distance: default_min_distance(),
            max_frame_delta: default_max_frame_delta(),
            seed: default_seed(),
        }
    }
}

/// Random population: positions uniform in
/// `[w/8, w/8 + w/1.3) x [h/8, h/8 + h/1.3)`, mass uniform in `[mass_min, mass_max)`
#[derive(Deserialize, Debug, Clone)]
pub struct SeedingConfig {
    pub count: usize,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_mass_min")]
    pub mass_min: f64,
    #[serde(default = "default_mass_max")]
    pub mass_max: f64,
}

/// A single explicit particle
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub x: [f64; 2], // initial position
    #[serde(default)]
    pub v: Option<[f64; 2]>, // initial velocity, random when omitted
    pub m: f64, // mass
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub seeding: Option<SeedingConfig>,
    #[serde(default)]
    pub particles: Vec<ParticleConfig>,
}

fn default_ticks() -> u64 { 600 }
fn default_frame_ms() -> f64 { 16.0 }
fn default_log_every() -> u64 { 60 }
fn default_g() -> f64 { DEFAULT_G }
fn default_min_distance() -> f64 { 1.0e-6 }
fn default_max_frame_delta() -> f64 { DEFAULT_MAX_FRAME_DELTA }
fn default_seed() -> u64 { 42 }
fn default_mass_min() -> f64 { 1.0 }
fn default_mass_max() -> f64 { 11.0 }
