use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::function::function::Func;
use crate::math::integration::gausslegendretable::{self, MAX_ORDER};
use crate::math::integration::integrationerror::IntegrationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuadratureRule {
    Rectangular,
    Trapezoidal,
    Simpson,
    GaussLegendre(usize),
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadratureRule::Rectangular => write!(f, "Rectangular"),
            QuadratureRule::Trapezoidal => write!(f, "Trapezoidal"),
            QuadratureRule::Simpson => write!(f, "Simpson"),
            QuadratureRule::GaussLegendre(order) => write!(f, "Gauss-Legendre({})", order),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Integrator
// ─────────────────────────────────────────────────────────────────────────────
//
// 設定為 (F, N)，區間 [a, b] 每次呼叫時給定。所有方法都取 `&self`，
// 不修改 N，因此同一個 Integrator 可同時在多個執行緒上使用。
//
// 迴圈中的 x 以累加 h 的方式前進（x += h），保留浮點誤差累積的行為，
// 不以 a + k·h 重新計算。

#[derive(Clone, Debug)]
pub struct Integrator {
    f: Func,
    n: usize,
}

impl Integrator {
    pub fn new(f: Func, n: usize) -> Integrator {
        Integrator { f, n }
    }

    pub fn subdivisions(&self) -> usize {
        self.n
    }

    pub fn function(&self) -> &Func {
        &self.f
    }

    /// Same function, different N.
    pub fn with_subdivisions(&self, n: usize) -> Integrator {
        Integrator { f: self.f.clone(), n }
    }

    /// h = (b - a) / N
    pub fn step_size(&self, a: f64, b: f64) -> Result<f64, IntegrationError> {
        if self.n == 0 {
            log::debug!("step size requested with zero subdivisions on [{}, {}]", a, b);
            return Err(IntegrationError::ZeroSubdivisions);
        }
        Ok((b - a) / self.n as f64)
    }

    /// Left-endpoint rule with N+1 terms: Σ_{k=0}^{N} F(x_k)·h, h = (b-a)/N.
    ///
    /// The last term samples `b`, so the sum covers [a, b + h].
    pub fn rectangular(&self, a: f64, b: f64) -> Result<f64, IntegrationError> {
        let h = self.step_size(a, b)?;
        let terms = self.n + 1;
        let mut out = 0.0;
        let mut x = a;
        for _ in 0..terms {
            out += self.f.value(x) * h;
            x += h;
        }
        Ok(out)
    }

    /// Σ_{k=0}^{N-1} [F(x_k) + F(x_k + h)]·h/2, evaluating interior points twice.
    pub fn trapezoidal(&self, a: f64, b: f64) -> Result<f64, IntegrationError> {
        let h = self.step_size(a, b)?;
        let mut out = 0.0;
        let mut x = a;
        for _ in 0..self.n {
            out += self.f.value(x) + self.f.value(x + h);
            x += h;
        }
        Ok(out * h / 2.0)
    }

    /// Composite Simpson: interior weights 4 (odd k) and 2 (even k), endpoints once.
    ///
    /// Requires N even and N > 2.
    pub fn simpson(&self, a: f64, b: f64) -> Result<f64, IntegrationError> {
        if self.n % 2 == 1 || self.n <= 2 {
            log::debug!("Simpson's rule rejected for N = {}", self.n);
            return Err(IntegrationError::SimpsonNotApplicable { subdivisions: self.n });
        }
        let h = self.step_size(a, b)?;
        let mut out = 0.0;
        let mut x = a + h;
        for step in 1..self.n {
            let weight = if step % 2 == 1 { 4.0 } else { 2.0 };
            out += weight * self.f.value(x);
            x += h;
        }
        out += self.f.value(b) + self.f.value(a);
        Ok(out * h / 3.0)
    }

    /// n-point Gauss-Legendre mapped from [-1, 1] onto [a, b]:
    ///   x = (b-a)/2·ξ + (b+a)/2, each sample scaled by (b-a)/2.
    ///
    /// Independent of N. Orders outside the table are rejected.
    pub fn gauss_legendre(&self, a: f64, b: f64, order: usize) -> Result<f64, IntegrationError> {
        let rule = gausslegendretable::rule(order).ok_or_else(|| {
            log::debug!("Gauss-Legendre order {} not tabulated", order);
            IntegrationError::UnsupportedOrder { order, max_order: MAX_ORDER }
        })?;
        let prefix = (b - a) / 2.0;
        let postfix = (b + a) / 2.0;
        let out: f64 = rule
            .nodes()
            .map(|(xi, wi)| wi * prefix * self.f.value(prefix * xi + postfix))
            .sum();
        Ok(out)
    }

    pub fn integrate(&self, rule: QuadratureRule, a: f64, b: f64) -> Result<f64, IntegrationError> {
        log::trace!("{} on [{}, {}] with N = {}", rule, a, b, self.n);
        match rule {
            QuadratureRule::Rectangular => self.rectangular(a, b),
            QuadratureRule::Trapezoidal => self.trapezoidal(a, b),
            QuadratureRule::Simpson => self.simpson(a, b),
            QuadratureRule::GaussLegendre(order) => self.gauss_legendre(a, b, order),
        }
    }
}
