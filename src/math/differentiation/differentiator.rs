use thiserror::Error;

use crate::math::function::function::Func;

/// Step used by [`d`] and therefore by every repeated differentiation.
pub const DEFAULT_STEP: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DifferentiationError {
    #[error("differentiation step must be positive and finite, got {0}")]
    InvalidStep(f64),
}

// ─────────────────────────────────────────────────────────────────────────────
// NumericalDifferentiator
// ─────────────────────────────────────────────────────────────────────────────
//
// 三種差分 stencil：
//   forward:  (F(x+H) - F(x)) / H          O(H)
//   backward: (F(x) - F(x-H)) / H          O(H)
//   central:  (F(x+H) - F(x-H)) / (2H)     O(H²)
//
// 建構後不可變；每個方法回傳一個捕獲 (H, F) 的新 Func。

#[derive(Clone, Debug)]
pub struct NumericalDifferentiator {
    h: f64,
    f: Func,
}

impl NumericalDifferentiator {
    pub fn new(h: f64, f: Func) -> Result<NumericalDifferentiator, DifferentiationError> {
        if !(h.is_finite() && h > 0.0) {
            log::debug!("rejecting differentiation step {}", h);
            return Err(DifferentiationError::InvalidStep(h));
        }
        Ok(NumericalDifferentiator { h, f })
    }

    pub fn step(&self) -> f64 {
        self.h
    }

    pub fn function(&self) -> &Func {
        &self.f
    }

    pub fn forward_difference(&self) -> Func {
        let (h, f) = (self.h, self.f.clone());
        Func::new(move |x| (f.value(x + h) - f.value(x)) / h)
    }

    pub fn backward_difference(&self) -> Func {
        let (h, f) = (self.h, self.f.clone());
        Func::new(move |x| (f.value(x) - f.value(x - h)) / h)
    }

    pub fn central_difference(&self) -> Func {
        let (h, f) = (self.h, self.f.clone());
        Func::new(move |x| (f.value(x + h) - f.value(x - h)) / (2.0 * h))
    }
}

/// Central-difference derivative of `f` with [`DEFAULT_STEP`].
pub fn d(f: Func) -> Func {
    NumericalDifferentiator { h: DEFAULT_STEP, f }.central_difference()
}

/// Applies [`d`] `n` times. `n == 0` returns `f` unchanged.
pub fn nth_derivative(f: Func, n: u32) -> Func {
    (0..n).fold(f, |acc, _| d(acc))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn square() -> Func {
        Func::new(|x| x * x)
    }

    #[test]
    fn rejects_non_positive_step() {
        assert_eq!(
            NumericalDifferentiator::new(0.0, square()).unwrap_err(),
            DifferentiationError::InvalidStep(0.0)
        );
        assert!(NumericalDifferentiator::new(-0.1, square()).is_err());
        assert!(NumericalDifferentiator::new(f64::NAN, square()).is_err());
        assert!(NumericalDifferentiator::new(f64::INFINITY, square()).is_err());
    }

    #[test]
    fn central_difference_is_exact_for_square() {
        let diff = NumericalDifferentiator::new(0.1, square()).unwrap();
        let df = diff.central_difference();
        for &x in &[-2.0, -0.5, 0.0, 0.5, 1.0, 2.0] {
            assert_abs_diff_eq!(df.value(x), 2.0 * x, epsilon = 1e-12);
        }
    }

    #[test]
    fn one_sided_differences_are_biased_by_h() {
        // (x+h)² - x² = 2xh + h²，因此 forward 偏差 +h，backward 偏差 -h
        let h = 0.1;
        let diff = NumericalDifferentiator::new(h, square()).unwrap();
        let forward = diff.forward_difference();
        let backward = diff.backward_difference();
        for &x in &[0.5, 1.0, 2.0] {
            assert_abs_diff_eq!(forward.value(x) - 2.0 * x, h, epsilon = 1e-12);
            assert_abs_diff_eq!(backward.value(x) - 2.0 * x, -h, epsilon = 1e-12);
        }
    }

    #[test]
    fn one_sided_error_shrinks_linearly() {
        let x: f64 = 0.7;
        let exact = x.cos();
        let err = |h: f64| {
            let diff = NumericalDifferentiator::new(h, Func::new(f64::sin)).unwrap();
            (diff.forward_difference().value(x) - exact).abs()
        };
        let ratio = err(0.02) / err(0.01);
        assert!((1.8..2.2).contains(&ratio), "ratio = {}", ratio);
    }

    #[test]
    fn central_error_shrinks_quadratically() {
        let x: f64 = 0.7;
        let exact = x.cos();
        let err = |h: f64| {
            let diff = NumericalDifferentiator::new(h, Func::new(f64::sin)).unwrap();
            (diff.central_difference().value(x) - exact).abs()
        };
        let ratio = err(0.1) / err(0.05);
        assert!((3.6..4.4).contains(&ratio), "ratio = {}", ratio);
    }

    #[test]
    fn default_operator_uses_default_step() {
        let df = d(Func::new(f64::exp));
        assert_abs_diff_eq!(df.value(1.0), 1f64.exp(), epsilon = 1e-4);
    }

    #[test]
    fn nth_derivative_composes() {
        let cubic = Func::new(|x| x * x * x);
        assert_eq!(nth_derivative(cubic.clone(), 0).value(2.0), 8.0);
        assert_abs_diff_eq!(nth_derivative(cubic.clone(), 2).value(2.0), 12.0, epsilon = 1e-6);
        assert_abs_diff_eq!(nth_derivative(cubic, 3).value(2.0), 6.0, epsilon = 1e-4);
    }
}
