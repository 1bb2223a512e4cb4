use approx::assert_abs_diff_eq;

use numcalc::math::differentiation::differentiator::{d, NumericalDifferentiator};
use numcalc::math::function::function::Func;
use numcalc::math::integration::integrationerror::IntegrationError;
use numcalc::math::integration::integrator::{Integrator, QuadratureRule};
use numcalc::math::polynomial::legendrepolynomial::legendre_polynomial;

#[test]
fn trapezoidal_reciprocal_matches_ln3() {
    let f = Func::new(|x| 1.0 / (x + 2.0));
    let guess = Integrator::new(f, 1000).trapezoidal(-1.0, 1.0).unwrap();
    assert!((guess - 3f64.ln()).abs() < 1e-4);
}

#[test]
fn every_rule_approaches_sin_squared_integral() {
    let solution = 0.310_268_301_723_381_1;
    let integrator = Integrator::new(Func::new(|x: f64| (x * x).sin()), 1000);
    let rules = [
        (QuadratureRule::Rectangular, 1e-3),
        (QuadratureRule::Trapezoidal, 1e-6),
        (QuadratureRule::Simpson, 1e-10),
        (QuadratureRule::GaussLegendre(5), 1e-6),
    ];
    for (rule, tolerance) in rules {
        let guess = integrator.integrate(rule, 0.0, 1.0).unwrap();
        assert!((guess - solution).abs() < tolerance, "{}: {}", rule, guess);
    }
}

#[test]
fn odd_simpson_is_not_a_zero_integral() {
    let integrator = Integrator::new(Func::new(|x| x), 3);
    assert_eq!(
        integrator.simpson(0.0, 1.0),
        Err(IntegrationError::SimpsonNotApplicable { subdivisions: 3 })
    );
}

#[test]
fn integral_of_legendre_derivative() {
    // ∫_{-1}^{1} P_2'(x) dx = P_2(1) - P_2(-1) = 0
    let dp2 = d(legendre_polynomial(2));
    let value = Integrator::new(dp2, 100).simpson(-1.0, 1.0).unwrap();
    assert_abs_diff_eq!(value, 0.0, epsilon = 1e-9);
}

#[test]
fn differentiate_then_integrate_recovers_difference() {
    let diff = NumericalDifferentiator::new(1e-3, Func::new(f64::exp)).unwrap();
    let value = Integrator::new(diff.central_difference(), 100)
        .gauss_legendre(0.0, 1.0, 5)
        .unwrap();
    assert_abs_diff_eq!(value, 1f64.exp() - 1.0, epsilon = 1e-6);
}
