//! Perfectly inelastic merge of two colliding particles
//!
//! The merged particle carries:
//! - mass `m1 + m2`,
//! - momentum `m1 v1 + m2 v2` (velocity is the mass-weighted mean),
//! - position at the centre of mass of the pair.
//!
//! It is a freshly constructed particle, so a merge product heavier than the
//! glow threshold starts its own pulse.

use crate::simulation::states::Particle;

pub fn combine(p1: &Particle, p2: &Particle) -> Particle {
    let m1 = p1.mass();
    let m2 = p2.mass();
    let m = m1 + m2;

    let x = (p1.position() * m1 + p2.position() * m2) / m;
    let v = (p1.velocity() * m1 + p2.velocity() * m2) / m;

    Particle::build(x, v, m)
}
