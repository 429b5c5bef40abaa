use statrs::distribution::{ContinuousCDF, Normal};

/// Reserve level for a Normal(mu, sigma) demand stream facing a cheaper
/// fare at `discount_ratio` times its own price:
///
/// reserve = mu + sigma * phi^-1(1 - discount_ratio)
///
/// where phi^-1 is the standard Normal quantile function. When `capacity`
/// is given, the reserve is clamped to it.
///
/// statrs maps phi^-1(0) and phi^-1(1) to signed infinities, so a ratio of 1
/// sends the reserve to -inf (nothing worth protecting) and a ratio of 0 to
/// +inf (protect everything, up to the capacity when one is given). Callers
/// clamp their final protection levels to be non-negative.
pub fn reserve(mu: f64, sigma: f64, discount_ratio: f64, capacity: Option<f64>) -> f64 {
    let std_normal = Normal::new(0.0, 1.0).expect("cannot create normal dist");
    let raw = mu + sigma * std_normal.inverse_cdf(1.0 - discount_ratio);
    match capacity {
        Some(cap) => raw.min(cap),
        None => raw,
    }
}
