//! Solver configuration

use crate::{
    error::CurveError,
    utils::{DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_DERIVATIVE, DEFAULT_TOLERANCE},
};

/// Stopping rules shared by the root solvers
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Residual and step size below which a solve counts as converged
    pub tolerance: f64,
    /// Iteration cap
    pub max_iterations: u32,
    /// Derivative magnitude below which a Newton step is refused
    pub min_derivative: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_derivative: DEFAULT_MIN_DERIVATIVE,
        }
    }
}

impl SolverConfig {
    /// Set tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set iteration cap
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set derivative floor
    pub fn with_min_derivative(mut self, min_derivative: f64) -> Self {
        self.min_derivative = min_derivative;
        self
    }

    /// Reject settings no solve can run under
    pub fn validate(&self) -> Result<(), CurveError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0)
            || !(self.min_derivative.is_finite() && self.min_derivative >= 0.0)
            || self.max_iterations == 0
        {
            return Err(CurveError::InvalidInput);
        }
        Ok(())
    }
}
