//! Force contributors for the central-force engine
//!
//! Defines the per-body force trait, the summing [`ForceSet`], the
//! reference central gravity law, and the `DomainError` raised on
//! degenerate evaluations

use thiserror::Error;

use crate::simulation::states::NVec2;

/// The single failure kind of the simulation core
///
/// Inputs are deterministic, so any error is a configuration problem
/// (degenerate initial conditions). It is surfaced immediately to the
/// caller and never retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A body sits exactly at the force center, where the central force
    /// is undefined
    #[error("body at the force center: central force is undefined at |x| = 0")]
    OriginSingularity,

    /// A computed quantity stopped being a finite number
    #[error("non-finite {what} encountered during integration")]
    NonFinite { what: &'static str },
}

/// Trait for per-body force sources
///
/// `x` and `m` are the body's current position and mass; the returned
/// vector is the total force this term exerts on the body. Evaluation is
/// pure: the same state yields the identical force.
pub trait ForceLaw {
    fn force(&self, x: &NVec2, m: f64) -> Result<NVec2, DomainError>;
}

/// Collection of force terms (central gravity, drag, etc.)
/// Each term implements [`ForceLaw`] and their contributions are summed
/// into a single force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn ForceLaw + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceLaw + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total force on a body of mass `m` at position `x`, summed over all
    /// registered terms
    pub fn evaluate(&self, x: &NVec2, m: f64) -> Result<NVec2, DomainError> {
        let mut out = NVec2::zeros();
        for term in &self.terms {
            out += term.force(x, m)?;
        }
        Ok(out)
    }
}

/// Gravity of a dominant mass fixed at the origin
///
/// `gm` is the gravitational parameter G*M of the central mass. The force
/// on a body of mass m at position x is
///
///   f = -gm * m * x / |x|^3
///
/// There is no softening: a body at |x| = 0 is a defined failure
/// ([`DomainError::OriginSingularity`]), not a silently propagated NaN.
pub struct CentralGravity {
    pub gm: f64, // gravitational parameter of the central mass
}

impl ForceLaw for CentralGravity {
    fn force(&self, x: &NVec2, m: f64) -> Result<NVec2, DomainError> {
        // Squared distance to the force center |x|^2
        let r2 = x.norm_squared();
        if r2 == 0.0 {
            return Err(DomainError::OriginSingularity);
        }

        // 1 / |x|
        let inv_r = r2.sqrt().recip();

        // 1 / |x|^3
        // (this is what appears in the central-force formula:
        //   f = -gm * m * x / |x|^3
        //   => f = -gm * m * x * (1 / |x|^3) )
        let inv_r3 = inv_r * inv_r * inv_r;

        // Direction: along -x (toward the center), magnitude scaled by
        // the body's mass
        let f = -self.gm * m * inv_r3 * *x;

        // Extreme separations can overflow the cube even when |x| > 0
        if !(f.x.is_finite() && f.y.is_finite()) {
            return Err(DomainError::NonFinite { what: "force" });
        }

        Ok(f)
    }
}
