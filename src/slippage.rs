//! Slippage against the oracle price

use crate::{curve::SwapDirection, error::CurveError, state::PoolState};

/// Price paid per unit received, in human units of each token
pub fn effective_price(
    amount_x: f64,
    amount_y: f64,
    pool: &PoolState,
    direction: SwapDirection,
) -> Result<f64, CurveError> {
    if amount_x.is_nan() || amount_y.is_nan() {
        return Err(CurveError::InvalidInput);
    }
    if amount_x <= 0.0 || amount_y <= 0.0 {
        return Err(CurveError::ZeroAmount);
    }
    let x = amount_x / 10f64.powi(i32::from(pool.decimals_x));
    let y = amount_y / 10f64.powi(i32::from(pool.decimals_y));
    Ok(match direction {
        SwapDirection::XToY => x / y,
        SwapDirection::YToX => y / x,
    })
}

/// Oracle reference quoted in the convention of `direction`:
/// `1 / p_o` for x to y and `p_o` for y to x
pub fn reference_price(pool: &PoolState, direction: SwapDirection) -> f64 {
    match direction {
        SwapDirection::XToY => 1.0 / pool.oracle_ratio(),
        SwapDirection::YToX => pool.oracle_ratio(),
    }
}

/// Relative deviation of the effective price from the oracle reference.
/// Positive slippage means the trade cost more than the oracle rate.
pub fn slippage(
    amount_x: f64,
    amount_y: f64,
    pool: &PoolState,
    direction: SwapDirection,
) -> Result<f64, CurveError> {
    if !(pool.price_x.is_finite() && pool.price_x > 0.0)
        || !(pool.price_y.is_finite() && pool.price_y > 0.0)
    {
        return Err(CurveError::InvalidInput);
    }
    let effective = effective_price(amount_x, amount_y, pool, direction)?;
    let reference = reference_price(pool, direction);
    Ok((effective - reference) / reference)
}

/// [`slippage`] for a direction token, `"x2y"` or `"y2x"`
pub fn get_slippage(
    amount_x: f64,
    amount_y: f64,
    price_x: f64,
    price_y: f64,
    decimals_x: u8,
    decimals_y: u8,
    direction: &str,
) -> Result<f64, CurveError> {
    let direction: SwapDirection = direction.parse()?;
    let pool = PoolState::new(0.0, 0.0, price_x, price_y).with_decimals(decimals_x, decimals_y);
    slippage(amount_x, amount_y, &pool, direction)
}
