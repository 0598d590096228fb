//! Calculation functions

use super::SwapDirection;
use crate::{error::CurveError, state::PoolState, utils::DEPLETION_CAP};

/// Get the dimensionless swap target.
///
/// x to y: k = amount_x * p_o / (reserve_y * dec_pow)
/// y to x: k = amount_y * dec_pow / (reserve_x * p_o)
///
/// where p_o = price_x / price_y and dec_pow = 10^(decimals_x - decimals_y).
pub fn swap_target(pool: &PoolState, direction: SwapDirection, amount_in: f64) -> f64 {
    let p_o = pool.oracle_ratio();
    let dec_pow = pool.decimal_scale();
    match direction {
        SwapDirection::XToY => (amount_in * p_o) / (pool.reserve_y * dec_pow),
        SwapDirection::YToX => (amount_in * dec_pow) / (pool.reserve_x * p_o),
    }
}

/// Reserve paying out the swap
pub fn reserve_out(pool: &PoolState, direction: SwapDirection) -> f64 {
    match direction {
        SwapDirection::XToY => pool.reserve_y,
        SwapDirection::YToX => pool.reserve_x,
    }
}

/// Keep a payout strictly below the reserve it drains
pub fn cap_depletion(amount_out: f64, reserve_out: f64) -> f64 {
    if amount_out >= reserve_out {
        reserve_out * DEPLETION_CAP
    } else {
        amount_out
    }
}

/// Screen a swap request.
///
/// Returns `Ok(None)` for a no-op (amount not positive), otherwise the
/// output reserve of a valid pool.
pub(crate) fn check_swap(
    pool: &PoolState,
    direction: SwapDirection,
    amount_in: f64,
) -> Result<Option<f64>, CurveError> {
    if amount_in.is_nan() || amount_in == f64::INFINITY {
        return Err(CurveError::InvalidInput);
    }
    if amount_in <= 0.0 {
        return Ok(None);
    }
    pool.validate()?;
    let reserve = reserve_out(pool, direction);
    if reserve == 0.0 {
        return Err(CurveError::InsufficientLiquidity);
    }
    Ok(Some(reserve))
}
