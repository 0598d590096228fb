//! Pool snapshot passed to the curves

use crate::error::CurveError;

/// Reserves and oracle prices of a two-asset pool.
///
/// Curves read a snapshot per call and never mutate it; reserve bookkeeping
/// between swaps belongs to the caller (see [`PoolState::after_swap_x_to_y`]).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoolState {
    /// x token reserve
    pub reserve_x: f64,
    /// y token reserve
    pub reserve_y: f64,
    /// oracle price of x
    pub price_x: f64,
    /// oracle price of y
    pub price_y: f64,
    /// x token decimals
    pub decimals_x: u8,
    /// y token decimals
    pub decimals_y: u8,
}

impl PoolState {
    /// Create a snapshot with zero decimals on both sides
    pub fn new(reserve_x: f64, reserve_y: f64, price_x: f64, price_y: f64) -> Self {
        Self {
            reserve_x,
            reserve_y,
            price_x,
            price_y,
            decimals_x: 0,
            decimals_y: 0,
        }
    }

    /// Set token decimals
    pub fn with_decimals(mut self, decimals_x: u8, decimals_y: u8) -> Self {
        self.decimals_x = decimals_x;
        self.decimals_y = decimals_y;
        self
    }

    /// Oracle exchange rate `price_x / price_y`
    pub fn oracle_ratio(&self) -> f64 {
        self.price_x / self.price_y
    }

    /// `10^(decimals_x - decimals_y)`
    pub fn decimal_scale(&self) -> f64 {
        10f64.powi(i32::from(self.decimals_x) - i32::from(self.decimals_y))
    }

    /// Check prices are positive and reserves are non-negative
    pub fn validate(&self) -> Result<(), CurveError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;
        if !positive(self.price_x)
            || !positive(self.price_y)
            || !non_negative(self.reserve_x)
            || !non_negative(self.reserve_y)
        {
            return Err(CurveError::InvalidInput);
        }
        Ok(())
    }

    /// Reserves after selling `amount_x` for `amount_y`
    pub fn after_swap_x_to_y(&self, amount_x: f64, amount_y: f64) -> Self {
        Self {
            reserve_x: self.reserve_x + amount_x,
            reserve_y: self.reserve_y - amount_y,
            ..*self
        }
    }

    /// Reserves after selling `amount_y` for `amount_x`
    pub fn after_swap_y_to_x(&self, amount_y: f64, amount_x: f64) -> Self {
        Self {
            reserve_x: self.reserve_x - amount_x,
            reserve_y: self.reserve_y + amount_y,
            ..*self
        }
    }
}
