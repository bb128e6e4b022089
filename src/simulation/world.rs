//! The simulation: an ordered collection of particles advanced tick by tick
//!
//! One call to [`Simulation::update_physics`] runs three passes:
//! 1. pair pass: for every unordered pair `(i, j)`, `i < j`, in index order,
//!    exchange one gravitational impulse and then test for a collision.
//!    A colliding pair is consumed: both particles drop out of the rest of
//!    the scan and their merge product is staged,
//! 2. collection update: survivors keep their order, merge products are
//!    appended in the order the merges happened,
//! 3. integration: every particle of the new collection drifts once.
//!
//! A particle takes part in at most one merge per tick, so any further
//! overlap is resolved on a later tick.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::error::SimError;
use crate::visualization::surface::{FrameContext, ParticleSprite, Surface};

use super::forces::{ForceSet, NewtonianGravity};
use super::integrator::euler_integrator;
use super::merge::combine;
use super::params::Parameters;
use super::states::{NVec2, Particle};

/// Outcome of one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub merges: usize, // pairs merged this tick
    pub particles: usize, // collection size after the tick
}

pub struct Simulation {
    particles: Vec<Particle>,
    forces: ForceSet,
    rng: ChaCha8Rng, // default velocities for `add_particle`
    ticks: u64,
}

impl Simulation {
    /// Empty simulation with Newtonian gravity configured from `params`
    pub fn new(params: &Parameters) -> Self {
        let forces = ForceSet::new().with(NewtonianGravity {
            g: params.g,
            coincident: params.coincident,
        });
        Self::with_forces(forces, params.seed)
    }

    /// Empty simulation with a custom force set
    pub fn with_forces(forces: ForceSet, seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            forces,
            rng: ChaCha8Rng::seed_from_u64(seed),
            ticks: 0,
        }
    }

    /// Append a particle whose velocity is drawn from `[-0.5, 0.5]` per axis
    pub fn add_particle(&mut self, x: f64, y: f64, mass: f64) -> Result<(), SimError> {
        let p = Particle::with_random_velocity(NVec2::new(x, y), mass, &mut self.rng)?;
        self.particles.push(p);
        Ok(())
    }

    pub fn add_particle_with_velocity(&mut self, x: f64, y: f64, mass: f64, vx: f64, vy: f64) -> Result<(), SimError> {
        let p = Particle::new(NVec2::new(x, y), NVec2::new(vx, vy), mass)?;
        self.particles.push(p);
        Ok(())
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Advance the whole collection by one tick
    pub fn update_physics(&mut self) -> TickReport {
        let n = self.particles.len();
        let mut consumed = vec![false; n];
        let mut merged: Vec<Particle> = Vec::new();

        for i in 0..n {
            if consumed[i] {
                continue;
            }

            for j in (i + 1)..n {
                if consumed[j] {
                    continue;
                }

                // i < j, so i lives in head and j is the first element of tail
                let (head, tail) = self.particles.split_at_mut(j);
                let pi = &mut head[i];
                let pj = &mut tail[0];

                self.forces.apply_pair(pi, pj);

                if pi.collides_with(pj) {
                    let product = combine(pi, pj);
                    trace!(i, j, mass = product.mass(), "merge");
                    merged.push(product);
                    consumed[i] = true;
                    consumed[j] = true;
                    break;
                }
            }
        }

        let merges = merged.len();
        let survivors = std::mem::take(&mut self.particles)
            .into_iter()
            .zip(consumed)
            .filter_map(|(p, gone)| (!gone).then_some(p));
        self.particles = survivors.chain(merged).collect();

        euler_integrator(&mut self.particles);

        self.ticks += 1;
        debug!(tick = self.ticks, merges, particles = self.particles.len(), "physics tick");

        TickReport {
            merges,
            particles: self.particles.len(),
        }
    }

    /// Hand every visible particle to `surface`, advancing the pulse of each
    /// one that is drawn. Returns the number of particles drawn
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S, ctx: &FrameContext) -> usize {
        let mut drawn = 0;
        for p in self.particles.iter_mut() {
            if !p.is_visible(ctx.bounds) {
                continue;
            }
            let sprite = ParticleSprite::from_particle(p);
            p.advance_pulse(ctx.delta_time);
            surface.draw_particle(&sprite);
            drawn += 1;
        }
        drawn
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn total_mass(&self) -> f64 {
        self.particles.iter().map(Particle::mass).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.particles
            .iter()
            .fold(NVec2::zeros(), |acc, p| acc + p.momentum())
    }

    /// Mass-weighted mean position, `None` for an empty simulation
    pub fn center_of_mass(&self) -> Option<NVec2> {
        let m = self.total_mass();
        if self.particles.is_empty() || m <= 0.0 {
            return None;
        }
        let weighted = self
            .particles
            .iter()
            .fold(NVec2::zeros(), |acc, p| acc + p.position() * p.mass());
        Some(weighted / m)
    }
}
