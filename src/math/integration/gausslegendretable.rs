// ─────────────────────────────────────────────────────────────────────────────
// Gauss-Legendre abscissas / weights on [-1, 1]
// ─────────────────────────────────────────────────────────────────────────────
//
// 常數表，不在執行期計算。各階數的閉式解：
//   n=2: ±1/√3                                  w = 1
//   n=3: 0, ±√(3/5)                             w = 8/9, 5/9
//   n=4: ±√(3/7 ∓ 2/7·√(6/5))                   w = (18 ± √30)/36
//   n=5: 0, ±1/3·√(5 ∓ 2√(10/7))                w = 128/225, (322 ± 13√70)/900
//
// 每一列 Σ w_i = 2，x_i 為 P_n 的根；n 點規則對 2n-1 次以下多項式為精確。

/// An n-point rule. `abscissas` and `weights` always have `order` entries.
#[derive(Debug)]
pub struct GaussLegendreRule {
    order: usize,
    abscissas: &'static [f64],
    weights: &'static [f64],
}

impl GaussLegendreRule {
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn abscissas(&self) -> &'static [f64] {
        self.abscissas
    }

    pub fn weights(&self) -> &'static [f64] {
        self.weights
    }

    /// (x_i, w_i) pairs.
    pub fn nodes(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.abscissas.iter().copied().zip(self.weights.iter().copied())
    }
}

pub const MAX_ORDER: usize = 5;

pub static GAUSS_LEGENDRE_RULES: [GaussLegendreRule; MAX_ORDER] = [
    GaussLegendreRule {
        order: 1,
        abscissas: &[0.0],
        weights: &[2.0],
    },
    GaussLegendreRule {
        order: 2,
        abscissas: &[0.5773502691896258, -0.5773502691896258],
        weights: &[1.0, 1.0],
    },
    GaussLegendreRule {
        order: 3,
        abscissas: &[0.0, 0.7745966692414834, -0.7745966692414834],
        weights: &[0.8888888888888888, 0.5555555555555556, 0.5555555555555556],
    },
    GaussLegendreRule {
        order: 4,
        abscissas: &[
            0.3399810435848563,
            -0.3399810435848563,
            0.8611363115940526,
            -0.8611363115940526,
        ],
        weights: &[
            0.6521451548625462,
            0.6521451548625462,
            0.34785484513745385,
            0.34785484513745385,
        ],
    },
    GaussLegendreRule {
        order: 5,
        abscissas: &[
            0.0,
            0.538469310105683,
            -0.538469310105683,
            0.906179845938664,
            -0.906179845938664,
        ],
        weights: &[
            0.5688888888888889,
            0.47862867049936647,
            0.47862867049936647,
            0.23692688505618908,
            0.23692688505618908,
        ],
    },
];

/// The tabulated rule for `order`, or `None` for order 0 and orders above [`MAX_ORDER`].
pub fn rule(order: usize) -> Option<&'static GaussLegendreRule> {
    if order == 0 {
        None
    } else {
        GAUSS_LEGENDRE_RULES.get(order - 1)
    }
}
