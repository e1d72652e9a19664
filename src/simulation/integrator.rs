//! Fixed-step velocity-Verlet integration
//!
//! Provides the single-body step cycle (`verlet_step`) and a system-level
//! driver (`verlet_integrator`), both running with the fixed step
//! `params.h0` and driven by a [`ForceSet`]

use super::forces::{DomainError, ForceSet};
use super::params::Parameters;
use super::states::{Body, System};

/// Advance one body by a full velocity-Verlet cycle
///
/// The phase order is the contract:
/// 1. drift      x_n+1 = x_n + dt v_n + (dt^2/2) a_n   (force from step start)
/// 2. half-kick  v_n+1/2 = v_n + (dt/2) a_n            (same old force)
/// 3. force      f_n+1 evaluated exactly once, at x_n+1
/// 4. half-kick  v_n+1 = v_n+1/2 + (dt/2) a_n+1        (new force)
///
/// After a successful return, position, velocity, and stored force are
/// mutually consistent at t_n+1 and finite. On error the body must not be
/// advanced further.
pub fn verlet_step(body: &mut Body, forces: &ForceSet, dt: f64) -> Result<(), DomainError> {
    body.drift(dt);
    body.half_kick(dt);
    body.compute_force(forces)?;
    body.half_kick(dt);

    // compute_force already vetted f; x and v can still overflow in the
    // kinematic updates themselves
    if !(body.x.x.is_finite() && body.x.y.is_finite()) {
        return Err(DomainError::NonFinite { what: "position" });
    }
    if !(body.v.x.is_finite() && body.v.y.is_finite()) {
        return Err(DomainError::NonFinite { what: "velocity" });
    }

    Ok(())
}

/// Advance the whole system by one step with `dt = params.h0`
///
/// Bodies are mutually independent under the central-force model, so the
/// per-body updates carry no ordering dependency. Any body failing its
/// update aborts the step and propagates the error. With zero bodies only
/// the clock advances.
pub fn verlet_integrator(sys: &mut System, forces: &ForceSet, params: &Parameters) -> Result<(), DomainError> {
    let dt = params.h0; // time step dt

    for b in sys.bodies.iter_mut() {
        verlet_step(b, forces, dt)?;
    }

    // Increment the system time by one full step
    sys.t += dt;

    Ok(())
}
