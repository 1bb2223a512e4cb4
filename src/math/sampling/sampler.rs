use crate::math::function::function::Func;
use crate::math::sampling::point2d::Point2D;

/// (x, F(x)) for x = start, start+h, start+2h, ... while x < stop.
///
/// x 以累加方式前進，累積的捨入誤差會保留：例如 [0, 5] 以 h = 0.01 取樣，
/// 最後一點約為 4.99999999999994，共 501 點。呼叫端須保證 h > 0。
pub fn sample(f: &Func, start: f64, stop: f64, h: f64) -> Vec<Point2D> {
    let mut out = Vec::new();
    let mut x = start;
    while x < stop {
        out.push(Point2D::new(x, f.value(x)));
        x += h;
    }
    out
}
