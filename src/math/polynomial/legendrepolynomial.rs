use crate::math::differentiation::differentiator::nth_derivative;
use crate::math::function::function::Func;
use crate::math::polynomial::factorial::factorial;

// ─────────────────────────────────────────────────────────────────────────────
// Rodrigues' formula
// ─────────────────────────────────────────────────────────────────────────────
//
//   P_ℓ(x) = 1 / (2^ℓ · ℓ!) · d^ℓ/dx^ℓ (x² - 1)^ℓ
//
// 以 central difference（H = 0.01）微分 ℓ 次。每一次微分都會放大截斷誤差，
// ℓ 越大結果越不準，這是此方法本身的近似，不做修正。

/// ℓ-th Legendre polynomial. Order 0 is the constant 1.
pub fn legendre_polynomial(l: u32) -> Func {
    let prefix = 1.0 / (2f64.powi(l as i32) * factorial(l));

    // (x² - 1)^ℓ 以連乘計算，避免 powf
    let generator = Func::new(move |x| {
        let mut out = 1.0;
        for _ in 0..l {
            out *= x * x - 1.0;
        }
        out
    });

    nth_derivative(generator, l).scaled(prefix)
}

/// P_0 ..= P_max_order.
pub fn legendre_polynomials(max_order: u32) -> Vec<Func> {
    (0..=max_order).map(legendre_polynomial).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn grid() -> impl Iterator<Item = f64> {
        (-10..=10).map(|k| k as f64 / 10.0)
    }

    #[test]
    fn order_zero_is_one() {
        let p0 = legendre_polynomial(0);
        for x in grid().chain([-7.5, 42.0]) {
            assert_eq!(p0.value(x), 1.0);
        }
    }

    #[test]
    fn order_one_is_identity() {
        let p1 = legendre_polynomial(1);
        for x in grid() {
            assert_abs_diff_eq!(p1.value(x), x, epsilon = 1e-12);
        }
    }

    fn p2(x: f64) -> f64 {
        (3.0 * x * x - 1.0) / 2.0
    }

    fn p3(x: f64) -> f64 {
        (5.0 * x.powi(3) - 3.0 * x) / 2.0
    }

    fn p4(x: f64) -> f64 {
        (35.0 * x.powi(4) - 30.0 * x * x + 3.0) / 8.0
    }

    fn p5(x: f64) -> f64 {
        (63.0 * x.powi(5) - 70.0 * x.powi(3) + 15.0 * x) / 8.0
    }

    #[test]
    fn low_orders_match_closed_forms() {
        // 容許誤差隨 ℓ 放大
        let cases: [(u32, fn(f64) -> f64, f64); 4] = [
            (2, p2, 1e-3),
            (3, p3, 2e-3),
            (4, p4, 1e-2),
            (5, p5, 2e-2),
        ];
        for (l, exact, tolerance) in cases {
            let p = legendre_polynomial(l);
            for x in grid() {
                assert_abs_diff_eq!(p.value(x), exact(x), epsilon = tolerance);
            }
        }
    }

    #[test]
    fn polynomials_are_listed_in_order() {
        let ps = legendre_polynomials(3);
        assert_eq!(ps.len(), 4);
        assert_eq!(ps[0].value(0.3), 1.0);
        assert_abs_diff_eq!(ps[1].value(0.3), 0.3, epsilon = 1e-12);
    }
}
