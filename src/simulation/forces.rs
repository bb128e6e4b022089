//! Pairwise force contributors for the particle engine
//!
//! Forces are evaluated pair by pair so that the engine can test for a
//! collision immediately after each pair has exchanged its impulse.
//! A [`PairForce`] returns the force acting on the first particle; the
//! engine applies the exact negation to the second one.

use crate::simulation::states::{NVec2, Particle};

/// How a pair at (near) zero separation is treated
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoincidentPolicy {
    /// No impulse for a pair at exactly zero distance
    Skip,
    /// Magnitude uses `max(d, min_distance)`, direction still uses the true separation
    Clamp { min_distance: f64 },
}

/// Collection of pair force terms (gravity, drag, etc.)
/// Each term implements [`PairForce`] and their contributions are summed
/// into a single force per pair
pub struct ForceSet {
    terms: Vec<Box<dyn PairForce + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: PairForce + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total force on `a` due to `b`, summed over all terms
    pub fn pair_force(&self, a: &Particle, b: &Particle) -> NVec2 {
        self.terms
            .iter()
            .fold(NVec2::zeros(), |acc, term| acc + term.force(a, b))
    }

    /// Exchange one impulse between `a` and `b`: `+F` to `a`, `-F` to `b`
    pub fn apply_pair(&self, a: &mut Particle, b: &mut Particle) -> NVec2 {
        let f = self.pair_force(a, b);
        a.apply_force(f);
        b.apply_force(-f);
        f
    }
}

/// Trait for pairwise force sources.
/// Returns the force acting on `a` due to `b`
pub trait PairForce {
    fn force(&self, a: &Particle, b: &Particle) -> NVec2;
}

/// Unsoftened Newtonian gravity, `F = G * m_a * m_b / d^2` along the separation
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub coincident: CoincidentPolicy,
}

impl PairForce for NewtonianGravity {
    fn force(&self, a: &Particle, b: &Particle) -> NVec2 {
        // r points from a to b, so a is pulled along +r
        let r = b.position() - a.position();
        let d = r.norm();

        // Direction is undefined at d = 0 under either policy
        if d == 0.0 {
            return NVec2::zeros();
        }

        let d_mag = match self.coincident {
            CoincidentPolicy::Skip => d,
            CoincidentPolicy::Clamp { min_distance } => d.max(min_distance),
        };

        let magnitude = self.g * a.mass() * b.mass() / (d_mag * d_mag);

        // Components F * dx / d, F * dy / d
        magnitude * r / d
    }
}
