use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::math::function::function::Func;

// ─────────────────────────────────────────────────────────────────────────────
// CountingFunction
// ─────────────────────────────────────────────────────────────────────────────
//
// 包裝一個 Func，記錄每次求值的 x。用於比較各積分法實際需要多少個
// 不同的取樣點（例如 trapezoidal 的內部點會被算兩次）。
//
// x 以 `f64::to_bits` 作為 key，因此 0.0 與 -0.0 視為不同點。

#[derive(Clone)]
pub struct CountingFunction {
    target: Func,
    hits: Arc<Mutex<HashMap<u64, usize>>>,
}

impl CountingFunction {
    pub fn wrap(target: Func) -> CountingFunction {
        CountingFunction {
            target,
            hits: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The observed function. Its values are exactly the wrapped function's values.
    pub fn func(&self) -> Func {
        let target = self.target.clone();
        let hits = Arc::clone(&self.hits);
        Func::new(move |x| {
            Self::lock(&hits)
                .entry(x.to_bits())
                .and_modify(|count| *count += 1)
                .or_insert(1);
            target.value(x)
        })
    }

    pub fn calls(&self) -> usize {
        Self::lock(&self.hits).values().sum()
    }

    pub fn unique_points(&self) -> usize {
        Self::lock(&self.hits).len()
    }

    pub fn reset(&self) {
        Self::lock(&self.hits).clear();
    }

    // 計數器不會在持有鎖時 panic，poisoned 的情況直接沿用內部資料。
    fn lock(hits: &Mutex<HashMap<u64, usize>>) -> MutexGuard<'_, HashMap<u64, usize>> {
        hits.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
