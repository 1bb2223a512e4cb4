/// n! as `f64`, computed iteratively. `factorial(0) == factorial(1) == 1.0`.
pub fn factorial(n: u32) -> f64 {
    let mut out = 1.0;
    let mut i = n;
    while i > 1 {
        out *= i as f64;
        i -= 1;
    }
    out
}
