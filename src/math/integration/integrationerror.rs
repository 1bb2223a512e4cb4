use thiserror::Error;

/// 積分規則無法套用時的錯誤。
///
/// 0 也可能是合法的積分值，因此「不適用」一律以錯誤回傳，不以 0 表示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntegrationError {
    #[error("step size requires at least one subdivision")]
    ZeroSubdivisions,

    #[error("Simpson's rule needs an even number of subdivisions greater than 2, got {subdivisions}")]
    SimpsonNotApplicable { subdivisions: usize },

    #[error("Gauss-Legendre order {order} is not tabulated (supported: 1..={max_order})")]
    UnsupportedOrder { order: usize, max_order: usize },
}
