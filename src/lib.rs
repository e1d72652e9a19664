pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::forces::{CentralGravity, DomainError, ForceLaw, ForceSet};
pub use simulation::integrator::{verlet_integrator, verlet_step};
pub use simulation::params::Parameters;
pub use simulation::trajectory::{Sample, Trajectory};
pub use simulation::scenario::{run_headless, Scenario};

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_step, energy_drift_curve};
