//! Boundary between the simulation and whatever draws it
//!
//! The simulation never talks to a window directly. Each frame it is handed a
//! [`FrameContext`] (visible bounds plus the frame delta) and a [`Surface`]
//! that receives one [`ParticleSprite`] per visible particle, in collection order.

use crate::simulation::states::{NVec2, Particle};

/// Visible region `[0, width] x [0, height]` in simulation units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Everything a draw pass needs from the host for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub bounds: Bounds,
    pub delta_time: f64, // ms since the previous frame, already clamped
}

/// Snapshot of a particle's visual state taken just before its pulse advances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSprite {
    pub position: NVec2,
    pub radius: f64,
    pub glow: bool,
    pub intensity: f64,
}

impl ParticleSprite {
    pub fn from_particle(p: &Particle) -> Self {
        Self {
            position: p.position(),
            radius: p.radius(),
            glow: p.glow(),
            intensity: p.pulse().intensity(),
        }
    }

    /// Glowing particles are drawn with a halo three times their radius
    pub fn display_radius(&self) -> f64 {
        if self.glow {
            self.radius * 3.0
        } else {
            self.radius
        }
    }

    /// Opacity of the white core
    pub fn core_alpha(&self) -> f64 {
        (self.intensity + 0.8).min(1.0)
    }

    /// Opacity of the inner halo ring
    pub fn halo_alpha(&self) -> f64 {
        0.5 * self.intensity
    }
}

pub trait Surface {
    fn draw_particle(&mut self, sprite: &ParticleSprite);
}

/// Surface that just keeps what it was asked to draw
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub sprites: Vec<ParticleSprite>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
    }
}

impl Surface for RecordingSurface {
    fn draw_particle(&mut self, sprite: &ParticleSprite) {
        self.sprites.push(*sprite);
    }
}
