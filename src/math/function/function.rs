use std::fmt;
use std::sync::Arc;

/// 實數函數 ℝ → ℝ。
///
/// 所有元件之間傳遞的共同型別：微分器回傳新的 `Func`，積分器與取樣器
/// 只讀取它。內部以 `Arc` 共享 closure，`clone()` 不會複製 closure 本身。
///
/// # 多執行緒安全
/// closure 需滿足 `Send + Sync`，因此同一個 `Func` 可在多個執行緒同時求值。
#[derive(Clone)]
pub struct Func {
    inner: Arc<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl Func {
    pub fn new<F>(f: F) -> Func
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Func { inner: Arc::new(f) }
    }

    pub fn constant(c: f64) -> Func {
        Func::new(move |_| c)
    }

    #[inline]
    pub fn value(&self, x: f64) -> f64 {
        (self.inner)(x)
    }

    /// x ↦ k·F(x)
    pub fn scaled(&self, k: f64) -> Func {
        let f = self.clone();
        Func::new(move |x| k * f.value(x))
    }
}

impl<F> From<F> for Func
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    fn from(f: F) -> Func {
        Func::new(f)
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Func")
    }
}
