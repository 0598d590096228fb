//! Implicit stable curve

use log::{debug, warn};

use super::{
    calc::{cap_depletion, check_swap, swap_target},
    SwapCurve, SwapDirection, SwapResult,
};
use crate::{
    error::CurveError,
    solver::{NewtonRaphson, RootSolver},
    state::PoolState,
    utils::{DEFAULT_AMP, INITIAL_GUESS_CAP},
};

/// Curve flattened around the oracle rate. The depleted fraction `z` of the
/// output reserve solves
///
/// (1 - 1/A) * z - (1/A) * ln(1 - z) = k
///
/// so large `A` trades close to constant sum near balance and small `A`
/// behaves like a constant product curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StableCurve<S = NewtonRaphson> {
    /// amplification parameter
    pub amp: f64,
    /// root finding strategy
    pub solver: S,
}

impl Default for StableCurve {
    fn default() -> Self {
        Self::new(DEFAULT_AMP)
    }
}

impl StableCurve {
    /// Stable curve solved with the default Newton-Raphson solver
    pub fn new(amp: f64) -> Self {
        Self {
            amp,
            solver: NewtonRaphson::default(),
        }
    }
}

impl<S: RootSolver> StableCurve<S> {
    /// Swap the root finding strategy
    pub fn with_solver<T: RootSolver>(self, solver: T) -> StableCurve<T> {
        StableCurve {
            amp: self.amp,
            solver,
        }
    }
}

impl<S: RootSolver> SwapCurve for StableCurve<S> {
    fn swap(
        &self,
        pool: &PoolState,
        direction: SwapDirection,
        amount_in: f64,
    ) -> Result<SwapResult, CurveError> {
        let reserve = match check_swap(pool, direction, amount_in)? {
            Some(reserve) => reserve,
            None => return Ok(SwapResult::zero()),
        };
        if !(self.amp.is_finite() && self.amp > 0.0) {
            return Err(CurveError::InvalidInput);
        }

        let k = swap_target(pool, direction, amount_in);
        if k == f64::INFINITY {
            // the target overflowed, the trade drains the pool
            let amount_out = cap_depletion(reserve, reserve);
            debug!(
                "stable: {} amount in {} overflows, capped at {}",
                direction, amount_in, amount_out
            );
            return Ok(SwapResult::exact(amount_out));
        }
        let z_initial = k.min(INITIAL_GUESS_CAP);
        let outcome = self.solver.solve(k, self.amp, z_initial)?;
        let amount_out = cap_depletion(outcome.z * reserve, reserve);

        debug!(
            "stable: {} amount in {} k {} z {} amount out {} ({:?})",
            direction, amount_in, k, outcome.z, amount_out, outcome.status
        );
        if let Some(warning) = outcome.status.warning() {
            warn!("stable: {} swap of {}: {}", direction, amount_in, warning);
        }

        Ok(SwapResult {
            amount_out,
            status: outcome.status,
        })
    }
}

/// Amount of y received for `amount_x` on a stable curve with amplification `amp`
#[allow(clippy::too_many_arguments)]
pub fn swap_x_to_y_stable(
    amount_x: f64,
    reserve_x: f64,
    reserve_y: f64,
    price_x: f64,
    price_y: f64,
    decimals_x: u8,
    decimals_y: u8,
    amp: f64,
) -> Result<SwapResult, CurveError> {
    let pool = PoolState::new(reserve_x, reserve_y, price_x, price_y)
        .with_decimals(decimals_x, decimals_y);
    StableCurve::new(amp).swap_x_to_y(&pool, amount_x)
}

/// Amount of x received for `amount_y` on a stable curve with amplification `amp`
#[allow(clippy::too_many_arguments)]
pub fn swap_y_to_x_stable(
    amount_y: f64,
    reserve_x: f64,
    reserve_y: f64,
    price_x: f64,
    price_y: f64,
    decimals_x: u8,
    decimals_y: u8,
    amp: f64,
) -> Result<SwapResult, CurveError> {
    let pool = PoolState::new(reserve_x, reserve_y, price_x, price_y)
        .with_decimals(decimals_x, decimals_y);
    StableCurve::new(amp).swap_y_to_x(&pool, amount_y)
}
