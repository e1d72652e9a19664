use std::time::Instant;
use std::f64::consts::PI;

use crate::simulation::forces::{CentralGravity, ForceSet};
use crate::simulation::integrator::{verlet_integrator, verlet_step};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a System of `n` bodies on staggered circular orbits
fn make_system(n: usize, gm: f64) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic spread, no rand needed
        let r = 1.0 + 0.5 * (i_f * 0.37).sin().abs();
        let theta = i_f * (2.0 * PI / n.max(1) as f64);
        let v_c = (gm / r).sqrt();

        bodies.push(Body::new(
            1.0,
            NVec2::new(r * theta.cos(), r * theta.sin()),
            NVec2::new(-v_c * theta.sin(), v_c * theta.cos()),
        ));
    }

    System { bodies, t: 0.0 }
}

/// Shared parameter template for the benchmarks
fn make_params() -> Parameters {
    Parameters {
        t_end: 1.0,
        h0: 0.001,
        gm: 4.0 * PI * PI,
    }
}

/// Benchmark the per-step cost of the verlet integrator for a range of N
pub fn bench_step() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 100; // integrator steps per size (tune as needed)

    for n in ns {
        let params = make_params();
        let forces = ForceSet::new().with(CentralGravity { gm: params.gm });

        let mut sys = make_system(n, params.gm);
        for b in sys.bodies.iter_mut() {
            b.compute_force(&forces).expect("initial force");
        }

        // Warm up
        verlet_integrator(&mut sys, &forces, &params).expect("warm-up step");

        let t0 = Instant::now();
        for _ in 0..steps {
            verlet_integrator(&mut sys, &forces, &params).expect("bench step");
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {:8.6} s", per_step);
    }
}

/// Worst relative energy drift over one full circular-orbit period, for a
/// range of step sizes. The curve shrinks ~quadratically with dt.
/// Paste output directly into excel to graph
pub fn energy_drift_curve() {
    println!("dt,rel_energy_drift");

    let gm = 4.0 * PI * PI; // period 1 at r = 1
    let dts: [f64; 6] = [0.02, 0.01, 0.005, 0.002, 0.001, 0.0005];

    for dt in dts {
        let forces = ForceSet::new().with(CentralGravity { gm });
        let mut body = Body::on_circular_orbit(0.1, 1.0, gm);
        body.compute_force(&forces).expect("initial force");

        let e0 = body.specific_energy(gm);
        let steps = (1.0 / dt).round() as usize;

        let mut max_drift: f64 = 0.0;
        for _ in 0..steps {
            verlet_step(&mut body, &forces, dt).expect("bench step");
            let drift = ((body.specific_energy(gm) - e0) / e0).abs();
            max_drift = max_drift.max(drift);
        }

        println!("{},{:.3e}", dt, max_drift);
    }
}
