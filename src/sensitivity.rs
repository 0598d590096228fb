//! Batch evaluation over amounts and reserve splits

use log::debug;

use crate::{
    curve::{SwapCurve, SwapDirection},
    error::CurveError,
    slippage::{effective_price, slippage},
    state::PoolState,
};

/// One x to y swap of a sensitivity run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensitivityRow {
    /// x reserve before the swap
    pub initial_reserve_x: f64,
    /// y reserve before the swap
    pub initial_reserve_y: f64,
    /// x sold
    pub amount_x: f64,
    /// y received
    pub delta_y: f64,
    /// x reserve after the swap
    pub new_reserve_x: f64,
    /// y reserve after the swap
    pub new_reserve_y: f64,
    /// x paid per y received, in whole tokens
    pub effective_price: f64,
    /// slippage against the oracle, in percent
    pub slippage_percent: f64,
}

/// Swap each of `amounts` of x against the same starting `pool`.
///
/// Rows whose swap pays nothing carry a zero price and slippage.
pub fn swap_x_to_y_sensitivity<C: SwapCurve>(
    curve: &C,
    pool: &PoolState,
    amounts: &[f64],
) -> Result<Vec<SensitivityRow>, CurveError> {
    amounts
        .iter()
        .map(|&amount_x| {
            let delta_y = curve.swap_x_to_y(pool, amount_x)?.amount_out;
            let after = pool.after_swap_x_to_y(amount_x, delta_y);
            let (price, slippage_percent) = if delta_y > 0.0 {
                (
                    effective_price(amount_x, delta_y, pool, SwapDirection::XToY)?,
                    slippage(amount_x, delta_y, pool, SwapDirection::XToY)? * 100.0,
                )
            } else {
                (0.0, 0.0)
            };
            Ok(SensitivityRow {
                initial_reserve_x: pool.reserve_x,
                initial_reserve_y: pool.reserve_y,
                amount_x,
                delta_y,
                new_reserve_x: after.reserve_x,
                new_reserve_y: after.reserve_y,
                effective_price: price,
                slippage_percent,
            })
        })
        .collect()
}

/// Slippage of x to y swaps over a grid of reserve splits and amounts
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlippageSurface {
    /// share of the total reserve held as y, one per row
    pub y_fractions: Vec<f64>,
    /// x sold, one per column
    pub amounts: Vec<f64>,
    /// slippage in percent, `[row][column]`
    pub slippage_percent: Vec<Vec<f64>>,
}

impl SlippageSurface {
    /// Slippage profile across reserve splits for the amount at `column`
    pub fn slice_at_amount(&self, column: usize) -> Option<Vec<f64>> {
        if column >= self.amounts.len() {
            return None;
        }
        Some(self.slippage_percent.iter().map(|row| row[column]).collect())
    }
}

/// Compute x to y slippage for every pair of y reserve fraction and amount.
///
/// A fraction `f` splits `total_reserve` into `reserve_y = f * total_reserve`
/// and `reserve_x = total_reserve - reserve_y`. Cells whose swap pays nothing
/// hold zero.
pub fn slippage_surface<C: SwapCurve>(
    curve: &C,
    y_fractions: &[f64],
    amounts: &[f64],
    total_reserve: f64,
    price_x: f64,
    price_y: f64,
) -> Result<SlippageSurface, CurveError> {
    let mut rows = Vec::with_capacity(y_fractions.len());
    for &fraction in y_fractions {
        let reserve_y = fraction * total_reserve;
        let pool = PoolState::new(total_reserve - reserve_y, reserve_y, price_x, price_y);
        let mut row = Vec::with_capacity(amounts.len());
        for &amount_x in amounts {
            let delta_y = curve.swap_x_to_y(&pool, amount_x)?.amount_out;
            row.push(if delta_y > 0.0 {
                slippage(amount_x, delta_y, &pool, SwapDirection::XToY)? * 100.0
            } else {
                0.0
            });
        }
        rows.push(row);
    }
    debug!(
        "slippage surface: {} reserve splits x {} amounts",
        y_fractions.len(),
        amounts.len()
    );

    Ok(SlippageSurface {
        y_fractions: y_fractions.to_vec(),
        amounts: amounts.to_vec(),
        slippage_percent: rows,
    })
}
