//! RK4 integration of the gradient flow dz/dt = -f(z)

use log::{trace, warn};

use super::{check_invariant_args, RootSolver, SolveStatus, SolverOutcome, StableInvariant};
use crate::{
    config::SolverConfig,
    error::CurveError,
    utils::{DEFAULT_RK_STEP, RK_Z_MAX, Z_MIN},
};

/// Classical fourth order Runge-Kutta on the flow `dz/dt = -f(z)`.
///
/// The flow settles on the root since f is increasing. Progress per step is
/// roughly a factor `exp(-dt * f'(z))`, so small steps need a larger
/// iteration cap than [`super::NewtonRaphson`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RungeKutta {
    /// stopping rules
    pub config: SolverConfig,
    /// time step
    pub dt: f64,
}

impl Default for RungeKutta {
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
            dt: DEFAULT_RK_STEP,
        }
    }
}

impl RungeKutta {
    /// Create a solver with the given stopping rules and time step
    pub fn new(config: SolverConfig, dt: f64) -> Self {
        Self { config, dt }
    }
}

fn clamp(z: f64) -> f64 {
    z.max(Z_MIN).min(RK_Z_MAX)
}

impl RootSolver for RungeKutta {
    fn solve(&self, k: f64, amp: f64, z_initial: f64) -> Result<SolverOutcome, CurveError> {
        self.config.validate()?;
        check_invariant_args(k, amp)?;
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(CurveError::InvalidInput);
        }

        let f = StableInvariant::new(k, amp);
        let tolerance = self.config.tolerance;
        let dt = self.dt;
        let mut z = clamp(f.initial_guess(z_initial));

        for iteration in 1..=self.config.max_iterations {
            let fx = f.value(z);
            if !fx.is_finite() {
                return Err(CurveError::NumericalDivergence);
            }
            if fx.abs() < tolerance {
                return Ok(SolverOutcome {
                    z,
                    status: SolveStatus::Converged {
                        iterations: iteration,
                    },
                });
            }

            let k1 = -fx;
            let k2 = -f.value(clamp(z + 0.5 * dt * k1));
            let k3 = -f.value(clamp(z + 0.5 * dt * k2));
            let k4 = -f.value(clamp(z + dt * k3));
            let z_new = clamp(z + (dt / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4));
            trace!("rk4: iteration {} z {} f(z) {}", iteration, z_new, fx);

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
            "rk4: max iterations ({}) reached, may not have converged (k {} A {} residual {:e})",
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
