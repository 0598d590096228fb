//! Crate constants

/// swap directions - sell x for y
pub const SWAP_DIRECTION_X_TO_Y: u64 = 0;

/// swap directions - sell y for x
pub const SWAP_DIRECTION_Y_TO_X: u64 = 1;

/// Direction token for selling x
pub const X_TO_Y_TOKEN: &str = "x2y";

/// Direction token for selling y
pub const Y_TO_X_TOKEN: &str = "y2x";

/// Default amplification parameter of the stable curve
pub const DEFAULT_AMP: f64 = 10.0;

/// Fraction of the output reserve paid out when a swap would drain it
pub const DEPLETION_CAP: f64 = 0.999;

/// Ceiling of the stable curve initial guess
pub const INITIAL_GUESS_CAP: f64 = 0.99999;

/// Lower clamp of the solver domain
pub const Z_MIN: f64 = 1e-5;

/// Upper clamp of the Newton solver domain, the largest f64 below one
pub const Z_MAX: f64 = 1.0 - f64::EPSILON / 2.0;

/// Upper clamp of the Runge-Kutta solver domain
pub const RK_Z_MAX: f64 = 1.0 - 1e-12;

/// Default solver tolerance
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default solver iteration cap
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default derivative floor below which Newton steps are refused
pub const DEFAULT_MIN_DERIVATIVE: f64 = 1e-10;

/// Default Runge-Kutta time step
pub const DEFAULT_RK_STEP: f64 = 0.1;

/// Default amounts for the sensitivity table
pub const DEFAULT_SENSITIVITY_AMOUNTS: [f64; 7] = [1.0, 5.0, 10.0, 20.0, 30.0, 40.0, 50.0];

/// Evenly spaced points over `[start, end]`, both ends included
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_max_is_below_one() {
        assert!(Z_MAX < 1.0);
        assert!((1.0 - Z_MAX).ln().is_finite());
        // next representable value is one
        assert_eq!(Z_MAX + f64::EPSILON / 2.0, 1.0);
    }

    #[test]
    fn linspace_points() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        let points = linspace(0.05, 100.0, 50);
        assert_eq!(points.len(), 50);
        assert_eq!(points[0], 0.05);
        assert_eq!(points[49], 100.0);
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }
}
