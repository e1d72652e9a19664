//! Core state types for the central-force simulation.
//!
//! Defines the per-body kinematic state (`Body`) and the system bundle
//! (`System`) holding the list of bodies and the current simulation time `t`.
//!
//! A `Body` carries its own force vector: at the start and end of every
//! completed integration step `f` is the force evaluated at the current
//! position, never a stale one from before the last drift.

use nalgebra::Vector2;

use crate::simulation::forces::{DomainError, ForceSet};

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub f: NVec2, // force at the current position
    pub m: f64, // mass
}

impl Body {
    /// New body with zeroed force. The stored force becomes valid once
    /// [`Body::compute_force`] runs; the scenario builder does this before
    /// the first step.
    pub fn new(m: f64, x: NVec2, v: NVec2) -> Self {
        Self {
            x,
            v,
            f: NVec2::zeros(),
            m,
        }
    }

    /// Body at (r, 0) on an exact counter-clockwise circular orbit around
    /// the force center: v = sqrt(gm / r), tangential
    pub fn on_circular_orbit(m: f64, r: f64, gm: f64) -> Self {
        Self::new(m, NVec2::new(r, 0.0), NVec2::new(0.0, (gm / r).sqrt()))
    }

    /// Evaluate the force at the current position and store it on the body
    pub fn compute_force(&mut self, forces: &ForceSet) -> Result<(), DomainError> {
        self.f = forces.evaluate(&self.x, self.m)?;
        Ok(())
    }

    /// Half-step velocity update using the currently stored force:
    /// v += f * (dt/2) / m
    pub fn half_kick(&mut self, dt: f64) {
        self.v += self.f * (0.5 * dt / self.m);
    }

    /// Full-step position update using velocity and force both from the
    /// start of the step: x += v*dt + f*dt^2 / (2m)
    pub fn drift(&mut self, dt: f64) {
        self.x += self.v * dt + self.f * (0.5 * dt * dt / self.m);
    }

    /// Specific orbital energy E = |v|^2/2 - gm/|x| (per unit mass),
    /// conserved to O(dt^2) by the integrator
    pub fn specific_energy(&self, gm: f64) -> f64 {
        0.5 * self.v.norm_squared() - gm / self.x.norm()
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // time
}
