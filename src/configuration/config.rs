//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   t_end: 2.0              # total simulated duration
//!   h0: 0.001               # fixed step size
//!   gm: 39.47841760435743   # 4*pi^2: AU / year / solar-mass units
//!
//! bodies:
//!   - x: [ 1.0, 0.0 ]
//!     v: [ 0.0, 6.283185307179586 ]
//!     m: 0.1
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // total simulated duration
    pub h0: f64,    // fixed step size
    pub gm: f64,    // gravitational parameter of the central mass
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 2], // Initial position vector `x` in simulation units
    pub v: [f64; 2], // Initial velocity vector `v` in simulation units per time unit
    pub m: f64,      // Mass of the body
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state of the system
}
