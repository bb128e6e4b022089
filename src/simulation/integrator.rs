//! Fixed unit-step integration pass
//!
//! Velocities have already been kicked pair by pair during the force pass,
//! so integration is a single drift: `x_n+1 = x_n + v_n+1` for every particle.

use super::states::Particle;

/// Advance every particle by one explicit Euler step, exactly once each
pub fn euler_integrator(particles: &mut [Particle]) {
    for p in particles.iter_mut() {
        p.integrate_position();
    }
}
