//! Curve modules

mod calc;
mod stable;
mod volatile;

pub use calc::*;
pub use stable::*;
pub use volatile::*;

use std::{convert::TryFrom, fmt, str::FromStr};

use crate::{
    error::{ConvergenceWarning, CurveError},
    solver::SolveStatus,
    state::PoolState,
    utils::{SWAP_DIRECTION_X_TO_Y, SWAP_DIRECTION_Y_TO_X, X_TO_Y_TOKEN, Y_TO_X_TOKEN},
};

/// Swap direction
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SwapDirection {
    /// sell x, receive y
    XToY,
    /// sell y, receive x
    YToX,
}

impl SwapDirection {
    /// Direction token
    pub fn as_str(self) -> &'static str {
        match self {
            SwapDirection::XToY => X_TO_Y_TOKEN,
            SwapDirection::YToX => Y_TO_X_TOKEN,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwapDirection {
    type Err = CurveError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            X_TO_Y_TOKEN => Ok(SwapDirection::XToY),
            Y_TO_X_TOKEN => Ok(SwapDirection::YToX),
            _ => Err(CurveError::InvalidDirection),
        }
    }
}

impl TryFrom<u64> for SwapDirection {
    type Error = CurveError;

    fn try_from(direction: u64) -> Result<Self, Self::Error> {
        match direction {
            SWAP_DIRECTION_X_TO_Y => Ok(SwapDirection::XToY),
            SWAP_DIRECTION_Y_TO_X => Ok(SwapDirection::YToX),
            _ => Err(CurveError::InvalidDirection),
        }
    }
}

/// Output of a swap
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwapResult {
    /// amount of the output token, below its reserve
    pub amount_out: f64,
    /// how the amount was obtained
    pub status: SolveStatus,
}

impl SwapResult {
    /// Closed form output
    pub fn exact(amount_out: f64) -> Self {
        Self {
            amount_out,
            status: SolveStatus::Exact,
        }
    }

    /// No-op swap
    pub fn zero() -> Self {
        Self::exact(0.0)
    }

    /// Convergence warning of the underlying solve, if any
    pub fn warning(&self) -> Option<ConvergenceWarning> {
        self.status.warning()
    }
}

/// Bonding curve pricing swaps against an oracle
pub trait SwapCurve {
    /// Amount received for `amount_in` of the input token of `direction`
    fn swap(
        &self,
        pool: &PoolState,
        direction: SwapDirection,
        amount_in: f64,
    ) -> Result<SwapResult, CurveError>;

    /// Amount of y received for `amount_x`
    fn swap_x_to_y(&self, pool: &PoolState, amount_x: f64) -> Result<SwapResult, CurveError> {
        self.swap(pool, SwapDirection::XToY, amount_x)
    }

    /// Amount of x received for `amount_y`
    fn swap_y_to_x(&self, pool: &PoolState, amount_y: f64) -> Result<SwapResult, CurveError> {
        self.swap(pool, SwapDirection::YToX, amount_y)
    }
}
