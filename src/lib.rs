#![deny(missing_docs)]

//! Oracle-priced swap curves for two-asset pools.
//!
//! Two bonding curves price swaps against an external oracle rate: a closed
//! form volatile curve and an implicit stable curve inverted by a root solver.
//! Every call is pure; reserves are owned and updated by the caller.

pub mod config;
pub mod curve;
pub mod error;
pub mod sensitivity;
pub mod slippage;
pub mod solver;
pub mod state;
pub mod utils;

pub use config::SolverConfig;
pub use curve::{
    swap_x_to_y_stable, swap_x_to_y_volatile, swap_y_to_x_stable, swap_y_to_x_volatile,
    StableCurve, SwapCurve, SwapDirection, SwapResult, VolatileCurve,
};
pub use error::{ConvergenceWarning, CurveError};
pub use slippage::get_slippage;
pub use solver::{NewtonRaphson, RootSolver, RungeKutta, SolveStatus};
pub use state::PoolState;
