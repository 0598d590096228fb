//! Error types

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use thiserror::Error;

/// Errors that may be returned by the curve engines and solvers.
#[derive(Clone, Copy, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum CurveError {
    /// The solver derivative vanished or an evaluation became non-finite.
    #[error("Numerical divergence in root finding")]
    NumericalDivergence,
    /// The swap direction token is not recognized.
    #[error("Invalid direction, use 'x2y' or 'y2x'")]
    InvalidDirection,
    /// A price, reserve, amplification or solver setting is out of range.
    #[error("Invalid input")]
    InvalidInput,
    /// The output reserve is empty.
    #[error("Insufficient liquidity")]
    InsufficientLiquidity,
    /// Slippage was requested for an empty trade.
    #[error("Zero amount")]
    ZeroAmount,
}

impl CurveError {
    /// Numeric code of this error
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Decode an error from its numeric code
    pub fn from_code(code: u32) -> Option<Self> {
        Self::from_u32(code)
    }
}

/// Non-fatal outcome of a solve that hit the iteration cap.
///
/// The value returned alongside it is usable but unverified.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("max iterations ({iterations}) reached, may not have converged (residual {residual:e})")]
pub struct ConvergenceWarning {
    /// Iterations performed
    pub iterations: u32,
    /// `|f(z)|` at the returned root
    pub residual: f64,
}
