//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0, initial forces evaluated)
//! - active force set (`ForceSet`)
//!
//! plus the run loop that advances the system and records one
//! [`Trajectory`] per body.

use tracing::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::forces::{CentralGravity, DomainError, ForceSet};
use crate::simulation::integrator::verlet_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};
use crate::simulation::trajectory::Trajectory;

/// Fully-initialized runtime bundle for one simulation run
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the numerical parameters, the current system state, and the
/// set of active force laws.
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
}

impl Scenario {
    /// Map a [`ScenarioConfig`] into the runtime bundle
    ///
    /// Every body's initial force is evaluated here, so the stored force
    /// is valid before the first step. Degenerate initial conditions (a
    /// body at the force center) fail fast instead of mid-run.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, DomainError> {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body::new(
            bc.m,
            NVec2::new(bc.x[0], bc.x[1]),
            NVec2::new(bc.v[0], bc.v[1]),
        )).collect();

        // Initial system state: bodies at t = 0
        let mut system = System {
            bodies,
            t: 0.0,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            gm: p_cfg.gm,
        };

        // Forces: construct a ForceSet and register central gravity
        let forces = ForceSet::new().with(CentralGravity {
            gm: parameters.gm,
        });

        // Stored forces must match the initial positions before stepping
        for b in system.bodies.iter_mut() {
            b.compute_force(&forces)?;
        }

        Ok(Self {
            parameters,
            system,
            forces,
        })
    }

    /// Run the integrator loop and record a trajectory per body
    ///
    /// Takes `round(t_end / h0)` fixed steps. Each trajectory starts with
    /// the initial condition (sample 0) and gains one sample per completed
    /// step, so a run of n steps yields trajectories of length n + 1.
    /// Zero bodies produce an empty trajectory list; zero steps leave only
    /// the initial conditions.
    pub fn run(&mut self) -> Result<Vec<Trajectory>, DomainError> {
        let n_steps = self.parameters.n_steps();
        info!(
            bodies = self.system.bodies.len(),
            steps = n_steps,
            h0 = self.parameters.h0,
            "starting run"
        );

        let mut trajectories: Vec<Trajectory> = self
            .system
            .bodies
            .iter()
            .map(|b| Trajectory::with_initial(b.x, b.v))
            .collect();

        for _ in 0..n_steps {
            verlet_integrator(&mut self.system, &self.forces, &self.parameters)?;
            for (traj, b) in trajectories.iter_mut().zip(self.system.bodies.iter()) {
                traj.record(b.x, b.v);
            }
        }

        info!(t = self.system.t, "run finished");
        Ok(trajectories)
    }
}

/// Build and run a scenario in one call
pub fn run_headless(cfg: ScenarioConfig) -> Result<Vec<Trajectory>, DomainError> {
    let mut scenario = Scenario::build_scenario(cfg)?;
    scenario.run()
}
