//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size and total duration (`h0`, `t_end`),
//! - gravitational parameter of the central mass (`gm`)

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // total simulated duration
    pub h0: f64, // fixed step size
    pub gm: f64, // gravitational parameter G*M of the central mass
}

impl Parameters {
    /// Number of fixed steps covering `t_end`
    pub fn n_steps(&self) -> usize {
        (self.t_end / self.h0).round() as usize
    }
}
