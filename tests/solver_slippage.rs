mod utils;

use oracle_curve_swap::{
    get_slippage,
    sensitivity::{slippage_surface, swap_x_to_y_sensitivity},
    solver::StableInvariant,
    utils::{linspace, DEFAULT_SENSITIVITY_AMOUNTS},
    CurveError, NewtonRaphson, RootSolver, RungeKutta, SolveStatus, SolverConfig, StableCurve,
    VolatileCurve,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use utils::*;

#[test]
fn test_reference_solve() {
    let outcome = NewtonRaphson::default().solve(0.5, 10.0, 0.4).unwrap();
    assert!(outcome.status.is_converged());
    assert!(StableInvariant::new(0.5, 10.0).value(outcome.z).abs() < 1e-10);
}

#[test]
fn test_forced_failures() {
    let capped = NewtonRaphson::new(SolverConfig::default().with_max_iterations(1))
        .solve(0.5, 10.0, 0.01)
        .unwrap();
    match capped.status {
        SolveStatus::Unconverged { iterations, .. } => assert_eq!(iterations, 1),
        status => panic!("unexpected status {:?}", status),
    }
    assert!(capped.status.warning().is_some());

    // f' never drops below 1
    let floor = NewtonRaphson::new(SolverConfig::default().with_min_derivative(2.0));
    assert_eq!(
        floor.solve(0.5, 10.0, 0.4),
        Err(CurveError::NumericalDivergence)
    );
}

#[test]
fn test_solvers_agree() {
    let rk = RungeKutta::new(SolverConfig::default().with_max_iterations(1_000), 0.5);
    for &(k, amp) in &[(0.01, 1.0), (0.05, 10.0), (0.1, 100.0)] {
        let newton = NewtonRaphson::default().solve(k, amp, k).unwrap();
        let flow = rk.solve(k, amp, k).unwrap();
        assert!(flow.status.is_converged());
        assert_close(flow.z, newton.z, 1e-6);
    }
}

#[test]
fn test_sensitivity_on_default_pool() {
    let pool = default_pool();
    let volatile = swap_x_to_y_sensitivity(&VolatileCurve, &pool, &DEFAULT_SENSITIVITY_AMOUNTS)
        .unwrap();
    let stable = swap_x_to_y_sensitivity(
        &StableCurve::new(100.0),
        &pool,
        &DEFAULT_SENSITIVITY_AMOUNTS,
    )
    .unwrap();

    for (v, s) in volatile.iter().zip(stable.iter()) {
        assert_eq!(v.amount_x, s.amount_x);
        assert_eq!(v.initial_reserve_y, DEFAULT_RESERVE_Y);
        assert_close(v.new_reserve_x, DEFAULT_RESERVE_X + v.amount_x, 1e-12);
        // the amplified curve trades closer to the oracle rate
        assert!(s.delta_y > v.delta_y);
        assert!(s.slippage_percent < v.slippage_percent);
    }
}

#[test]
fn test_random_surface() {
    let mut rng = StdRng::seed_from_u64(11);
    let fractions = linspace(0.05, 0.95, 10);
    let amounts: Vec<f64> = (0..6).map(|_| rng.gen_range(0.1, 50.0)).collect();
    let price_x = rng.gen_range(0.5, 2.0);

    let surface = slippage_surface(
        &StableCurve::new(10.0),
        &fractions,
        &amounts,
        1_000.0,
        price_x,
        1.0,
    )
    .unwrap();
    assert_eq!(surface.amounts, amounts);
    for column in 0..amounts.len() {
        let profile = surface.slice_at_amount(column).unwrap();
        assert_eq!(profile.len(), fractions.len());
        assert!(profile.iter().all(|s| *s > 0.0));
        assert!(profile.windows(2).all(|w| w[0] >= w[1]));
    }
    assert_eq!(surface.slice_at_amount(amounts.len()), None);
}

proptest! {
    #[test]
    fn converged_roots_have_small_residual(
        k in 1e-4..5.0f64,
        amp in 1.0..500.0f64,
        guess in 0.0..1.0f64,
    ) {
        let solver = NewtonRaphson::default();
        let outcome = solver.solve(k, amp, guess).unwrap();
        prop_assert!(outcome.z > 0.0 && outcome.z < 1.0);
        if outcome.status.is_converged() {
            let residual = StableInvariant::new(k, amp).value(outcome.z).abs();
            prop_assert!(residual < solver.config.tolerance);
        } else {
            prop_assert!(outcome.status.warning().is_some());
        }
    }

    #[test]
    fn slippage_sign_follows_price(
        amount_x in 1e-3..1e6f64,
        amount_y in 1e-3..1e6f64,
        price_x in 1e-2..1e2f64,
        price_y in 1e-2..1e2f64,
    ) {
        let fair_x = amount_y * price_y / price_x;
        let x2y = get_slippage(amount_x, amount_y, price_x, price_y, 0, 0, "x2y").unwrap();
        let y2x = get_slippage(amount_x, amount_y, price_x, price_y, 0, 0, "y2x").unwrap();
        if amount_x > fair_x * (1.0 + 1e-9) {
            // overpaid in x, under-received in x
            prop_assert!(x2y > 0.0);
            prop_assert!(y2x < 0.0);
        } else if amount_x < fair_x * (1.0 - 1e-9) {
            prop_assert!(x2y < 0.0);
            prop_assert!(y2x > 0.0);
        }
    }

    #[test]
    fn unknown_tokens_are_rejected(token in "[a-z0-9]{0,4}") {
        prop_assume!(token != "x2y" && token != "y2x");
        prop_assert_eq!(
            get_slippage(1.0, 1.0, 1.0, 1.0, 0, 0, &token),
            Err(CurveError::InvalidDirection)
        );
    }
}
