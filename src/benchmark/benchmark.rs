use std::time::Instant;

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle};
use crate::simulation::world::Simulation;

/// Helper to build a manual simulation of size `n`
/// Particles sit on a spread-out lattice so the first ticks are merge-free
fn make_simulation(n: usize, params: &Parameters) -> Simulation {
    let mut sim = Simulation::new(params);
    let side = (n as f64).sqrt().ceil() as usize;

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = (i % side) as f64 * 20.0 + (i_f * 0.37).sin();
        let y = (i / side) as f64 * 20.0 + (i_f * 0.13).cos();
        sim.push(Particle::build(NVec2::new(x, y), NVec2::zeros(), 5.0));
    }

    sim
}

/// Time `update_physics` for a range of n
/// Paste output directly into excel to graph
pub fn bench_update_physics() {
    let params = Parameters::default();

    println!("N,tick_ms,merges");

    for n in [250, 500, 1000, 2000, 4000] {
        // Small n: average over a few ticks to smooth noise
        let steps = if n <= 1000 { 10 } else { 2 };

        let mut sim = make_simulation(n, &params);

        // Warm up
        sim.update_physics();

        let mut merges = 0;
        let t0 = Instant::now();
        for _ in 0..steps {
            merges += sim.update_physics().merges;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{}", n, ms, merges);
    }
}
