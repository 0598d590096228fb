//! Exponential decay curve

use log::trace;

use super::{
    calc::{cap_depletion, check_swap, swap_target},
    SwapCurve, SwapDirection, SwapResult,
};
use crate::{error::CurveError, state::PoolState};

/// Closed form curve whose marginal price rises exponentially as the output
/// reserve drains:
///
/// amount_out = reserve_out * (1 - exp(-k))
///
/// with k the oracle scaled swap target of [`super::swap_target`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VolatileCurve;

impl SwapCurve for VolatileCurve {
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

        let k = swap_target(pool, direction, amount_in);
        let amount_out = cap_depletion(reserve * (1.0 - (-k).exp()), reserve);
        trace!(
            "volatile: {} amount in {} k {} amount out {}",
            direction,
            amount_in,
            k,
            amount_out
        );
        Ok(SwapResult::exact(amount_out))
    }
}

/// Amount of y received for `amount_x` on the volatile curve
pub fn swap_x_to_y_volatile(
    amount_x: f64,
    reserve_x: f64,
    reserve_y: f64,
    price_x: f64,
    price_y: f64,
    decimals_x: u8,
    decimals_y: u8,
) -> Result<SwapResult, CurveError> {
    let pool = PoolState::new(reserve_x, reserve_y, price_x, price_y)
        .with_decimals(decimals_x, decimals_y);
    VolatileCurve.swap_x_to_y(&pool, amount_x)
}

/// Amount of x received for `amount_y` on the volatile curve
pub fn swap_y_to_x_volatile(
    amount_y: f64,
    reserve_x: f64,
    reserve_y: f64,
    price_x: f64,
    price_y: f64,
    decimals_x: u8,
    decimals_y: u8,
) -> Result<SwapResult, CurveError> {
    let pool = PoolState::new(reserve_x, reserve_y, price_x, price_y)
        .with_decimals(decimals_x, decimals_y);
    VolatileCurve.swap_y_to_x(&pool, amount_y)
}
