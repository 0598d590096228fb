#![allow(dead_code)]

use oracle_curve_swap::{PoolState, SwapCurve, SwapDirection};

/// Reserves of the default sensitivity pool
pub const DEFAULT_RESERVE_X: f64 = 2.0;
pub const DEFAULT_RESERVE_Y: f64 = 100.0;

pub const TEST_AMPS: [f64; 5] = [1.0, 2.0, 10.0, 100.0, 1000.0];

pub fn default_pool() -> PoolState {
    PoolState::new(DEFAULT_RESERVE_X, DEFAULT_RESERVE_Y, 1.0, 1.0)
}

pub fn balanced_pool(reserve: f64, price_x: f64, price_y: f64) -> PoolState {
    PoolState::new(reserve, reserve, price_x, price_y)
}

pub fn output_reserve(pool: &PoolState, direction: SwapDirection) -> f64 {
    match direction {
        SwapDirection::XToY => pool.reserve_y,
        SwapDirection::YToX => pool.reserve_x,
    }
}

/// Input amount giving the dimensionless target `k` in `direction`
pub fn amount_for_target(pool: &PoolState, direction: SwapDirection, k: f64) -> f64 {
    let p_o = pool.oracle_ratio();
    let dec_pow = pool.decimal_scale();
    match direction {
        SwapDirection::XToY => k * pool.reserve_y * dec_pow / p_o,
        SwapDirection::YToX => k * pool.reserve_x * p_o / dec_pow,
    }
}

pub fn amount_out<C: SwapCurve>(
    curve: &C,
    pool: &PoolState,
    direction: SwapDirection,
    amount_in: f64,
) -> f64 {
    curve.swap(pool, direction, amount_in).unwrap().amount_out
}

pub fn assert_close(actual: f64, expected: f64, eps: f64) {
    assert!(
        (actual - expected).abs() <= eps,
        "expected {} got {} (eps {})",
        expected,
        actual,
        eps
    );
}
