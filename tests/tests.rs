use solsim::simulation::states::{Body, NVec2, System};
use solsim::simulation::params::Parameters;
use solsim::simulation::forces::{CentralGravity, DomainError, ForceSet};
use solsim::simulation::integrator::{verlet_integrator, verlet_step};
use solsim::simulation::scenario::run_headless;
use solsim::configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

use approx::assert_relative_eq;
use std::f64::consts::PI;

/// Gravitational parameter that gives a circular orbit at r = 1 a period
/// of exactly 1 (AU / year / solar-mass units)
const GM: f64 = 4.0 * PI * PI;

/// Default physics parameters for tests
fn test_params(t_end: f64, h0: f64) -> Parameters {
    Parameters { t_end, h0, gm: GM }
}

/// Build a central-gravity ForceSet
fn gravity_set(p: &Parameters) -> ForceSet {
    ForceSet::new().with(CentralGravity { gm: p.gm })
}

/// One body on an exact circular orbit at radius `r`, stored force evaluated
fn circular_body(m: f64, r: f64, forces: &ForceSet) -> Body {
    let mut body = Body::on_circular_orbit(m, r, GM);
    body.compute_force(forces).expect("initial force");
    body
}

/// Scenario config for the circular reference orbit
fn circular_cfg(t_end: f64, h0: f64) -> ScenarioConfig {
    ScenarioConfig {
        parameters: ParametersConfig { t_end, h0, gm: GM },
        bodies: vec![BodyConfig {
            x: [1.0, 0.0],
            v: [0.0, 2.0 * PI],
            m: 0.1,
        }],
    }
}

// ==================================================================================
// Force tests
// ==================================================================================

#[test]
fn central_force_points_toward_center() {
    let p = test_params(1.0, 0.001);
    let forces = gravity_set(&p);

    let x = NVec2::new(0.6, -0.8);
    let f = forces.evaluate(&x, 2.0).expect("force");

    // Attraction: f anti-parallel to x
    assert!(f.dot(&x) < 0.0, "Force is not toward the center: {:?}", f);
    assert!(f.norm() > 0.0);
}

#[test]
fn central_force_inverse_square_law() {
    let p = test_params(1.0, 0.001);
    let forces = gravity_set(&p);

    let f_r = forces.evaluate(&NVec2::new(1.0, 0.0), 1.0).expect("force at r");
    let f_2r = forces.evaluate(&NVec2::new(2.0, 0.0), 1.0).expect("force at 2r");

    let ratio = f_r.norm() / f_2r.norm();
    assert!((ratio - 4.0).abs() < 1e-12, "Expected ~4x, got {}", ratio);
}

#[test]
fn force_scales_with_mass() {
    let p = test_params(1.0, 0.001);
    let forces = gravity_set(&p);

    let x = NVec2::new(1.0, 0.5);
    let f1 = forces.evaluate(&x, 1.0).expect("force");
    let f3 = forces.evaluate(&x, 3.0).expect("force");

    assert_relative_eq!(f3.norm(), 3.0 * f1.norm(), max_relative = 1e-12);
}

#[test]
fn force_evaluation_is_idempotent() {
    let p = test_params(1.0, 0.001);
    let forces = gravity_set(&p);

    let mut body = circular_body(0.1, 1.3, &forces);
    let first = body.f;
    body.compute_force(&forces).expect("second evaluation");

    // Bitwise identical: nothing moved, nothing may change
    assert_eq!(first, body.f, "Force changed without the body moving");
}

#[test]
fn force_at_origin_is_a_domain_error() {
    let p = test_params(1.0, 0.001);
    let forces = gravity_set(&p);

    let err = forces.evaluate(&NVec2::zeros(), 1.0).unwrap_err();
    assert_eq!(err, DomainError::OriginSingularity);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn circular_orbit_radius_stays_bounded() {
    let trajectories = run_headless(circular_cfg(2.0, 0.001)).expect("run");
    assert_eq!(trajectories.len(), 1);

    for (step, s) in trajectories[0].samples().iter().enumerate() {
        let r = s.x.norm();
        assert!(
            (r - 1.0).abs() < 1e-3,
            "Radius drifted to {} at step {}",
            r,
            step
        );
    }
}

#[test]
fn energy_is_conserved_to_dt_squared() {
    let p = test_params(2.0, 0.001);
    let forces = gravity_set(&p);
    let mut body = circular_body(0.1, 1.0, &forces);

    let e0 = body.specific_energy(GM);
    for _ in 0..p.n_steps() {
        verlet_step(&mut body, &forces, p.h0).expect("step");
        let drift = ((body.specific_energy(GM) - e0) / e0).abs();
        assert!(drift < 1e-4, "Relative energy drift too large: {}", drift);
    }
}

#[test]
fn one_period_returns_to_start() {
    // m = 0.1, r = 1, gm = 4pi^2, h0 = 0.001, t_end = 2.0: period is exactly 1,
    // so after 2000 steps the body has closed two full revolutions
    let trajectories = run_headless(circular_cfg(2.0, 0.001)).expect("run");
    let samples = trajectories[0].samples();
    assert_eq!(samples.len(), 2001);

    let start = NVec2::new(1.0, 0.0);
    let after_one_period = samples[1000].x;
    let after_two_periods = samples[2000].x;

    assert!(
        (after_one_period - start).norm() < 1e-3,
        "Orbit did not close after one period: {:?}",
        after_one_period
    );
    assert!(
        (after_two_periods - start).norm() < 1e-3,
        "Orbit did not close after two periods: {:?}",
        after_two_periods
    );
}

#[test]
fn time_reversal_returns_to_start() {
    let p = test_params(0.5, 0.001);
    let forces = gravity_set(&p);
    let mut body = circular_body(0.1, 1.0, &forces);

    let x0 = body.x;
    let n = p.n_steps();

    for _ in 0..n {
        verlet_step(&mut body, &forces, p.h0).expect("forward step");
    }

    // Flip the velocity and integrate forward again: verlet is
    // time-symmetric, so this retraces the orbit up to roundoff
    body.v = -body.v;
    for _ in 0..n {
        verlet_step(&mut body, &forces, p.h0).expect("reversed step");
    }

    assert!(
        (body.x - x0).norm() < 1e-9,
        "Reversed run did not return to start: {:?}",
        body.x
    );
}

#[test]
fn step_leaves_stored_force_at_current_position() {
    let p = test_params(1.0, 0.01);
    let forces = gravity_set(&p);
    let mut body = circular_body(0.1, 1.0, &forces);

    verlet_step(&mut body, &forces, p.h0).expect("step");

    let fresh = forces.evaluate(&body.x, body.m).expect("force");
    assert_eq!(body.f, fresh, "Stored force is stale after a step");
}

#[test]
fn integrator_advances_the_clock_without_bodies() {
    let p = test_params(1.0, 0.25);
    let forces = gravity_set(&p);
    let mut sys = System { bodies: vec![], t: 0.0 };

    verlet_integrator(&mut sys, &forces, &p).expect("step");
    assert_relative_eq!(sys.t, 0.25);
}

// ==================================================================================
// Scenario / trajectory tests
// ==================================================================================

#[test]
fn zero_step_run_records_only_the_initial_condition() {
    let trajectories = run_headless(circular_cfg(0.0, 0.001)).expect("run");
    assert_eq!(trajectories.len(), 1);
    assert_eq!(trajectories[0].len(), 1);

    let s = trajectories[0].samples()[0];
    assert_eq!(s.x, NVec2::new(1.0, 0.0));
    assert_eq!(s.v, NVec2::new(0.0, 2.0 * PI));
}

#[test]
fn zero_bodies_yield_empty_trajectories() {
    let cfg = ScenarioConfig {
        parameters: ParametersConfig { t_end: 1.0, h0: 0.001, gm: GM },
        bodies: vec![],
    };
    let trajectories = run_headless(cfg).expect("run");
    assert!(trajectories.is_empty());
}

#[test]
fn body_at_force_center_fails_at_build() {
    let cfg = ScenarioConfig {
        parameters: ParametersConfig { t_end: 1.0, h0: 0.001, gm: GM },
        bodies: vec![BodyConfig { x: [0.0, 0.0], v: [0.0, 0.0], m: 1.0 }],
    };
    let err = run_headless(cfg).unwrap_err();
    assert_eq!(err, DomainError::OriginSingularity);
}

#[test]
fn scenario_config_parses_from_yaml() {
    let yaml = r#"
parameters:
  t_end: 2.0
  h0: 0.001
  gm: 39.47841760435743

bodies:
  - x: [ 1.0, 0.0 ]
    v: [ 0.0, 6.283185307179586 ]
    m: 0.1
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).expect("parse");
    assert_eq!(cfg.bodies.len(), 1);
    assert_relative_eq!(cfg.parameters.gm, GM, max_relative = 1e-12);
    assert_relative_eq!(cfg.bodies[0].v[1], 2.0 * PI, max_relative = 1e-12);
}

#[test]
fn trajectory_exposes_parallel_plot_sequences() {
    let trajectories = run_headless(circular_cfg(0.1, 0.001)).expect("run");
    let (xs, ys) = trajectories[0].plot_points();

    assert_eq!(xs.len(), trajectories[0].len());
    assert_eq!(ys.len(), trajectories[0].len());
    assert_relative_eq!(xs[0], 1.0);
    assert_relative_eq!(ys[0], 0.0);
}
