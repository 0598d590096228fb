//! Root finding for the stable curve invariant

mod newton;
mod runge_kutta;

pub use newton::*;
pub use runge_kutta::*;

use crate::{
    error::{ConvergenceWarning, CurveError},
    utils::{Z_MAX, Z_MIN},
};

/// Stable curve invariant in the depleted fraction `z`:
///
/// f(z) = (1 - 1/A) * z - (1/A) * ln(1 - z) - k
///
/// f is strictly increasing on `[0, 1)` with an asymptote at `z = 1`, so any
/// `k > 0` has exactly one root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StableInvariant {
    /// dimensionless swap target
    pub k: f64,
    /// amplification parameter
    pub amp: f64,
}

impl StableInvariant {
    /// Create the invariant for target `k` and amplification `amp`
    pub fn new(k: f64, amp: f64) -> Self {
        Self { k, amp }
    }

    /// f(z)
    pub fn value(&self, z: f64) -> f64 {
        (1.0 - 1.0 / self.amp) * z - (1.0 / self.amp) * (1.0 - z).ln() - self.k
    }

    /// f'(z) = (1 - 1/A) + 1/(A(1 - z))
    pub fn derivative(&self, z: f64) -> f64 {
        1.0 - 1.0 / self.amp + 1.0 / (self.amp * (1.0 - z))
    }

    /// Repair a guess outside `(0, 1)` with the linear estimate `k / (1 - 1/A)`
    pub fn initial_guess(&self, z_initial: f64) -> f64 {
        if z_initial > 0.0 && z_initial < 1.0 {
            return z_initial;
        }
        let linear = self.k / (1.0 - 1.0 / self.amp);
        if linear.is_nan() {
            return Z_MAX;
        }
        linear.max(Z_MIN).min(Z_MAX)
    }
}

/// How a value was obtained
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SolveStatus {
    /// Closed form, or no solve was needed
    Exact,
    /// Root found within tolerance
    Converged {
        /// iterations performed
        iterations: u32,
    },
    /// Iteration cap reached, value unverified
    Unconverged {
        /// iterations performed
        iterations: u32,
        /// `|f(z)|` at the returned value
        residual: f64,
    },
}

impl SolveStatus {
    /// Whether the value can be trusted without further checks
    pub fn is_converged(&self) -> bool {
        !matches!(self, SolveStatus::Unconverged { .. })
    }

    /// Convergence warning, if the solve hit its cap
    pub fn warning(&self) -> Option<ConvergenceWarning> {
        match *self {
            SolveStatus::Unconverged {
                iterations,
                residual,
            } => Some(ConvergenceWarning {
                iterations,
                residual,
            }),
            _ => None,
        }
    }
}

/// Root returned by a solver
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverOutcome {
    /// depleted fraction of the output reserve
    pub z: f64,
    /// convergence status
    pub status: SolveStatus,
}

/// Strategy inverting [`StableInvariant`]
pub trait RootSolver {
    /// Find `z` in `(0, 1)` with `f(z) = 0`, starting from `z_initial`
    fn solve(&self, k: f64, amp: f64, z_initial: f64) -> Result<SolverOutcome, CurveError>;
}

fn check_invariant_args(k: f64, amp: f64) -> Result<(), CurveError> {
    if !(k.is_finite() && k >= 0.0) || !(amp.is_finite() && amp > 0.0) {
        return Err(CurveError::InvalidInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_shape() {
        let f = StableInvariant::new(0.5, 10.0);
        assert!((f.value(0.0) + 0.5).abs() < 1e-15);
        assert!(f.derivative(0.0) >= 1.0);
        let mut prev = f.value(0.0);
        for i in 1..100 {
            let z = i as f64 / 100.0;
            let value = f.value(z);
            assert!(value > prev);
            assert!(f.derivative(z) >= 1.0);
            prev = value;
        }
    }

    #[test]
    fn initial_guess_repair() {
        let f = StableInvariant::new(0.45, 10.0);
        assert_eq!(f.initial_guess(0.3), 0.3);
        assert!((f.initial_guess(0.0) - 0.5).abs() < 1e-12);
        assert!((f.initial_guess(1.0) - 0.5).abs() < 1e-12);

        // tiny k clamps to the lower bound
        let f = StableInvariant::new(1e-9, 10.0);
        assert_eq!(f.initial_guess(-1.0), Z_MIN);

        // A = 1 has no linear term
        let f = StableInvariant::new(0.2, 1.0);
        assert_eq!(f.initial_guess(0.0), Z_MAX);

        // large k clamps to the upper bound
        let f = StableInvariant::new(5.0, 10.0);
        assert_eq!(f.initial_guess(2.0), Z_MAX);
    }

    #[test]
    fn status_warning() {
        assert!(SolveStatus::Exact.is_converged());
        assert!(SolveStatus::Converged { iterations: 3 }.warning().is_none());
        let status = SolveStatus::Unconverged {
            iterations: 1,
            residual: 0.25,
        };
        assert!(!status.is_converged());
        assert_eq!(
            status.warning(),
            Some(ConvergenceWarning {
                iterations: 1,
                residual: 0.25
            })
        );
    }
}
