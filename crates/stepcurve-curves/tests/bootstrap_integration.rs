//! Integration test: bootstrap a known forward curve back from instrument
//! prices.
//!
//! Prices are generated on a reference curve, the curve is bootstrapped from
//! the prices alone, and the recovered knots are compared with the reference.
//!
//! | Segment   | Forward |
//! |-----------|---------|
//! | (0, 1]    | 3.0%    |
//! | (1, 2]    | 4.0%    |
//! | (2, 3]    | 5.0%    |

use approx::assert_relative_eq;
use proptest::prelude::*;
use stepcurve_curves::prelude::*;
use stepcurve_math::solvers::SolverConfig;
use stepcurve_math::MathError;

const KNOTS: [f64; 3] = [1.0, 2.0, 3.0];
const FORWARDS: [f64; 3] = [0.03, 0.04, 0.05];

/// Semiannual bullet bond schedule to `maturity` with `coupon` per annum on
/// `notional`.
fn bullet(maturity: f64, coupon: f64, notional: f64) -> (Vec<f64>, Vec<f64>) {
    let periods = (maturity * 2.0).round() as usize;
    let times: Vec<f64> = (1..=periods).map(|i| i as f64 * 0.5).collect();
    let mut amounts = vec![notional * coupon / 2.0; periods];
    if let Some(last) = amounts.last_mut() {
        *last += notional;
    }
    (times, amounts)
}

fn price_on<K>(curve: &PwFlat<K>, times: &[f64], amounts: &[f64]) -> f64
where
    K: Enumerator<Item = (f64, f64)> + Clone,
{
    curve.present_value(&paired(times, amounts).unwrap(), 0.0).0
}

#[test]
fn test_right_continuity() {
    let t = [1.0, 2.0, 3.0];
    let x = [0.1, 0.2, 0.3];
    let curve = PwFlat::from_slices(&t, &x).unwrap();

    for s in [-1.0, 0.0, 0.25, 1.0] {
        assert_eq!(curve.value(s), (1.0, 0.1));
    }
    for s in [1.0 + 1e-12, 1.5, 2.0] {
        assert_eq!(curve.value(s), (2.0, 0.2));
    }
    for s in [2.0 + 1e-12, 2.5, 3.0] {
        assert_eq!(curve.value(s), (3.0, 0.3));
    }

    let (time, value) = curve.value(3.0 + 1e-12);
    assert!(time.is_nan());
    assert!(value.is_nan());
}

#[test]
fn test_zero_coupon_round_trip() {
    let t = [1.0];
    let c = [1.0];
    let price = (-0.05f64).exp();

    let outcome = Bootstrapper::new()
        .add_instrument(Instrument::new("1Y zero", &t, &c, price))
        .bootstrap()
        .unwrap();

    assert_eq!(outcome.times, vec![1.0]);
    assert_relative_eq!(outcome.values[0], 0.05, epsilon = 1e-14);

    let curve = outcome.curve();
    let repriced = price_on(&curve, &t, &c);
    assert_relative_eq!(repriced, price, epsilon = 1e-14);
    assert!(outcome.is_valid());
}

#[test]
fn test_recover_curve_from_zeros() {
    let reference = PwFlat::from_slices(&KNOTS, &FORWARDS).unwrap();
    let knots = KNOTS;
    let ones = [1.0];

    let instruments: Vec<Instrument<'_>> = knots
        .iter()
        .map(|t| {
            let times = std::slice::from_ref(t);
            Instrument::new(format!("{}Y zero", t), times, &ones, reference.discount(*t, 0.0))
        })
        .collect();

    let outcome = Bootstrapper::new().add_instruments(instruments).bootstrap().unwrap();

    assert_eq!(outcome.times, KNOTS.to_vec());
    for (recovered, expected) in outcome.values.iter().zip(FORWARDS) {
        assert_relative_eq!(*recovered, expected, epsilon = 1e-12);
    }
}

#[test]
fn test_recover_curve_from_coupon_bonds() {
    let reference = PwFlat::from_slices(&KNOTS, &FORWARDS).unwrap();

    let schedules: Vec<(Vec<f64>, Vec<f64>)> = [(1.0, 0.03), (2.0, 0.035), (3.0, 0.045)]
        .iter()
        .map(|&(maturity, coupon)| bullet(maturity, coupon, 100.0))
        .collect();

    let instruments: Vec<Instrument<'_>> = schedules
        .iter()
        .zip(["1Y 3%", "2Y 3.5%", "3Y 4.5%"])
        .map(|((times, amounts), label)| {
            Instrument::new(label, times, amounts, price_on(&reference, times, amounts))
        })
        .collect();

    let outcome = Bootstrapper::new()
        .add_instruments(instruments.iter().cloned())
        .bootstrap()
        .unwrap();

    assert_eq!(outcome.times, KNOTS.to_vec());
    for (recovered, expected) in outcome.values.iter().zip(FORWARDS) {
        assert_relative_eq!(*recovered, expected, epsilon = 1e-11);
    }

    let report = &outcome.report;
    assert!(report.is_valid(), "{report}");
    assert_eq!(report.passed_count(), 3);
    assert!(report.max_error() < 1e-10);

    // the bootstrapped curve agrees with the reference everywhere on [0, 3]
    let curve = outcome.curve();
    for i in 0..=30 {
        let t = f64::from(i) / 10.0;
        assert_relative_eq!(curve.discount(t, 0.0), reference.discount(t, 0.0), epsilon = 1e-11);
    }
}

#[test]
fn test_large_notional_bonds_reprice() {
    let schedules: Vec<(Vec<f64>, Vec<f64>)> = [1.0, 2.0, 5.0, 10.0, 30.0]
        .iter()
        .map(|&maturity| bullet(maturity, 0.05, 1e6))
        .collect();

    for rate in [0.01, 0.04, 0.067] {
        let flat = PwFlat::constant(rate);
        let instruments: Vec<Instrument<'_>> = schedules
            .iter()
            .map(|(times, amounts)| {
                let label = format!("{}Y", times.len() / 2);
                Instrument::new(label, times, amounts, price_on(&flat, times, amounts))
            })
            .collect();

        let outcome = Bootstrapper::new().add_instruments(instruments).bootstrap().unwrap();

        assert!(outcome.is_valid(), "rate {rate}: {}", outcome.report);
        for value in &outcome.values {
            assert_relative_eq!(*value, rate, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_incremental_segments_match_bootstrapper() {
    let (times, amounts) = bullet(2.0, 0.04, 1.0);
    let t1 = [1.0];
    let one = [1.0];
    let p1 = 0.97;
    let p2 = 1.0;

    let first = next_segment(
        &PwFlat::constant(f64::NAN),
        paired(&t1, &one).unwrap(),
        p1,
        &BootstrapConfig::default(),
    )
    .unwrap();

    let knot_t = [first.time];
    let knot_x = [first.value];
    let curve = PwFlat::from_slices(&knot_t, &knot_x).unwrap();
    let second = next_segment(&curve, paired(&times, &amounts).unwrap(), p2, &BootstrapConfig::default()).unwrap();

    let outcome = Bootstrapper::new()
        .add_instrument(Instrument::new("1Y", &t1, &one, p1))
        .add_instrument(Instrument::new("2Y", &times, &amounts, p2))
        .bootstrap()
        .unwrap();

    assert_eq!(outcome.values, vec![first.value, second.value]);
    assert_eq!(outcome.times, vec![1.0, 2.0]);
}

#[test]
fn test_non_convergence_names_instrument() {
    let t = [1.0];
    let c = [1.0];
    let config = BootstrapConfig::default().with_solver(SolverConfig::default().with_max_iterations(1));

    let err = Bootstrapper::new()
        .with_config(config)
        .add_instrument(Instrument::new("1Y zero", &t, &c, (-0.05f64).exp()))
        .bootstrap()
        .unwrap_err();

    match &err {
        CurveError::BootstrapFailed {
            instrument,
            horizon,
            source: MathError::NonConvergence { iterations, .. },
        } => {
            assert_eq!(instrument, "1Y zero");
            assert_eq!(*horizon, 1.0);
            assert_eq!(*iterations, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("1Y zero"));
}

#[test]
fn test_failure_stops_at_offending_instrument() {
    let t1 = [1.0];
    let t2 = [2.0];
    let one = [1.0];
    let nothing = [0.0];

    let err = Bootstrapper::new()
        .add_instrument(Instrument::new("1Y", &t1, &one, 0.97))
        .add_instrument(Instrument::new("2Y empty", &t2, &nothing, 0.9))
        .bootstrap()
        .unwrap_err();

    assert!(matches!(
        err,
        CurveError::BootstrapFailed { ref instrument, horizon, .. } if instrument == "2Y empty" && horizon == 2.0
    ));
}

#[test]
fn test_config_from_json() {
    let config: BootstrapConfig =
        serde_json::from_str(r#"{"initial_guess": 0.04, "solver": {"max_iterations": 50}}"#).unwrap();

    let t = [1.0];
    let c = [1.0];
    let outcome = Bootstrapper::new()
        .with_config(config)
        .add_instrument(Instrument::new("1Y", &t, &c, (-0.04f64).exp()))
        .bootstrap()
        .unwrap();

    assert_relative_eq!(outcome.values[0], 0.04, epsilon = 1e-14);
}

proptest! {
    #[test]
    fn prop_zero_curve_round_trip(
        x1 in -0.01..0.10f64,
        x2 in -0.01..0.10f64,
        x3 in -0.01..0.10f64,
    ) {
        let forwards = [x1, x2, x3];
        let reference = PwFlat::from_slices(&KNOTS, &forwards).unwrap();
        let knots = KNOTS;
        let ones = [1.0];

        let instruments: Vec<Instrument<'_>> = knots
            .iter()
            .map(|t| Instrument::new("zero", std::slice::from_ref(t), &ones, reference.discount(*t, 0.0)))
            .collect();

        let outcome = Bootstrapper::new().add_instruments(instruments).bootstrap().unwrap();

        for (recovered, expected) in outcome.values.iter().zip(forwards) {
            prop_assert!((recovered - expected).abs() < 1e-11);
        }
    }

    #[test]
    fn prop_probing_never_moves_the_curve(t in 0.0..4.0f64, t0 in 0.0..4.0f64) {
        let curve = PwFlat::from_slices(&KNOTS, &FORWARDS).unwrap().with_extrapolation(0.06);
        let before = curve;

        let _ = curve.value(t);
        let _ = curve.integral(t, t0);
        let _ = curve.discount(t, t0);
        let _ = curve.spot(t);

        prop_assert_eq!(curve, before);
    }
}
