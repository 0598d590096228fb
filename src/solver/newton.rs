//! Damped Newton-Raphson

use log::{debug, trace, warn};

use super::{check_invariant_args, RootSolver, SolveStatus, SolverOutcome, StableInvariant};
use crate::{
    config::SolverConfig,
    error::CurveError,
    utils::{Z_MAX, Z_MIN},
};

/// Newton-Raphson with one half-step of damping when a step leaves `(0, 1)`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NewtonRaphson {
    /// stopping rules
    pub config: SolverConfig,
}

impl NewtonRaphson {
    /// Create a solver with the given stopping rules
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl RootSolver for NewtonRaphson {
    fn solve(&self, k: f64, amp: f64, z_initial: f64) -> Result<SolverOutcome, CurveError> {
        self.config.validate()?;
        check_invariant_args(k, amp)?;

        let f = StableInvariant::new(k, amp);
        let tolerance = self.config.tolerance;
        let mut z = f.initial_guess(z_initial);

        for iteration in 1..=self.config.max_iterations {
            let fx = f.value(z);
            if !fx.is_finite() {
                return Err(CurveError::NumericalDivergence);
            }
            trace!("newton: iteration {} z {} f(z) {}", iteration, z, fx);
            if fx.abs() < tolerance {
                return Ok(SolverOutcome {
                    z,
                    status: SolveStatus::Converged {
                        iterations: iteration,
                    },
                });
            }

            let fp = f.derivative(z);
            if !fp.is_finite() || fp.abs() < self.config.min_derivative {
                debug!("newton: derivative {} near zero at z {}", fp, z);
                return Err(CurveError::NumericalDivergence);
            }

            let step = fx / fp;
            let mut z_new = z - step;
            if z_new <= 0.0 || z_new >= 1.0 {
                // damp once, then clamp
                z_new = (z - 0.5 * step).max(Z_MIN).min(Z_MAX);
                debug!("newton: step left the domain, damped to z {}", z_new);
            }

            // a small step only counts once the residual agrees
            if (z_new - z).abs() < tolerance && f.value(z_new).abs() < tolerance {
                return Ok(SolverOutcome {
                    z: z_new,
                    status: SolveStatus::Converged {
                        iterations: iteration,
                    },
                });
            }
            z = z_new;
        }

        let residual = f.value(z).abs();
        warn!(
            "newton: max iterations ({}) reached, may not have converged (k {} A {} residual {:e})",
            self.config.max_iterations, k, amp, residual
        );
        Ok(SolverOutcome {
            z,
            status: SolveStatus::Unconverged {
                iterations: self.config.max_iterations,
                residual,
            },
        })
    }
}
