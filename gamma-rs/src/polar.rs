use rand::{Rng, distr::Open01};

/// Uniform deviate on the open interval (0, 1), safe to take `ln` of.
#[inline]
pub fn uniform_open<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.sample(Open01)
}

/// Standard normal deviate by Marsaglia's polar method.
///
/// The polar method yields two independent deviates per accepted point.
/// Only the first is returned and the second is discarded, so half of the
/// generated normals go unused; in exchange no spare is cached and callers
/// such as [`Gamma`](crate::Gamma) can sample through `&self`.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let mut x1;
    let mut x2;
    let mut w;
    loop {
        x1 = 2.0 * rng.random::<f64>() - 1.0;
        x2 = 2.0 * rng.random::<f64>() - 1.0;
        w = x1 * x1 + x2 * x2;
        if w > 0.0 && w < 1.0 {
            break;
        }
    }
    x1 * ((-2.0 * w.ln()) / w).sqrt()
}
