//! # gamma-rs: Gamma Distributed Variates
//!
//! Gamma(shape, scale) sampling over any [`rand::Rng`] bit source, using
//! Marsaglia and Tsang's squeeze/rejection method ("A Simple Method for
//! Generating Gamma Variables", ACM TOMS 26(3), 2000).
//!
//! ## Method
//!
//! For shape α ≥ 1 let d = α − 1/3 and c = 1/√(9d). Draw a standard normal
//! z and set v = (1 + cz)³. The candidate d·v is accepted when a uniform u
//! passes the quartic squeeze u < 1 − 0.0331 z⁴, which happens for about
//! 98% of candidates, or else the exact test ln u < z²/2 + d(1 − v + ln v).
//!
//! For α < 1 a Gamma(α + 1) variate g is drawn and scaled by u^(1/α).
//! That factor underflows quickly for small α, so [`Gamma::ln_sample`]
//! offers the draw in log space as ln g + ln(u)/α.
//!
//! ```
//! use gamma_rs::Gamma;
//! use rand::{SeedableRng, distr::Distribution, rngs::StdRng};
//!
//! let gamma = Gamma::new(2.0, 1.0).unwrap();
//! let mut rng = StdRng::seed_from_u64(17);
//! let x = gamma.sample(&mut rng);
//! assert!(x > 0.0);
//! ```

mod constants;
mod polar;

pub use polar::{standard_normal, uniform_open};

use constants::*;
use log::trace;
use rand::{Rng, distr::Distribution};
use thiserror::Error;

/// Errors from [`Gamma`] construction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GammaError {
    #[error("gamma shape must be finite and positive, got {0}")]
    InvalidShape(f64),
    #[error("gamma scale must be finite and positive, got {0}")]
    InvalidScale(f64),
}

/// Gamma distribution with shape α and scale θ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma {
    shape: f64,
    scale: f64,
    d: f64,
    c: f64,
    // 1/α when α < 1, applied as u^(1/α) to a Gamma(α + 1) draw
    inv_shape: Option<f64>,
}

impl Gamma {
    /// Create a Gamma distribution. Both parameters must be finite and > 0.
    pub fn new(shape: f64, scale: f64) -> Result<Self, GammaError> {
        if !(shape.is_finite() && shape > 0.0) {
            return Err(GammaError::InvalidShape(shape));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(GammaError::InvalidScale(scale));
        }

        let (boosted, inv_shape) = if shape < BOOST_THRESHOLD {
            (shape + 1.0, Some(1.0 / shape))
        } else {
            (shape, None)
        };
        let d = boosted - ONE_THIRD;
        let c = 1.0 / (9.0 * d).sqrt();
        trace!("gamma shape={} scale={} d={} c={}", shape, scale, d, c);

        Ok(Self {
            shape,
            scale,
            d,
            c,
            inv_shape,
        })
    }

    #[inline]
    pub fn shape(&self) -> f64 {
        self.shape
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn mean(&self) -> f64 {
        self.shape * self.scale
    }

    pub fn variance(&self) -> f64 {
        self.shape * self.scale * self.scale
    }

    /// Unit-scale draw for shape d + 1/3 (α, or α + 1 when boosted).
    fn marsaglia_tsang<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        loop {
            let z = standard_normal(rng);
            let t = 1.0 + self.c * z;
            if t <= 0.0 {
                continue;
            }
            let v = t * t * t;
            let u = uniform_open(rng);
            let z2 = z * z;

            // Squeeze first, the log test only runs on its misses
            if u < 1.0 - SQUEEZE * z2 * z2 {
                return self.d * v;
            }
            if u.ln() < 0.5 * z2 + self.d * (1.0 - v + v.ln()) {
                return self.d * v;
            }
        }
    }

    /// Natural log of a draw.
    ///
    /// Consumes the bit source exactly as [`Distribution::sample`] does, but
    /// applies the u^(1/α) boost as `ln u / α`, so the result stays finite
    /// for small shapes where the plain draw underflows to 0. It is `-inf`
    /// only when `ln u / α` itself overflows (α below about 1e-307).
    pub fn ln_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let ln_g = self.marsaglia_tsang(rng).ln();
        let ln_g = match self.inv_shape {
            Some(inv) => ln_g + uniform_open(rng).ln() * inv,
            None => ln_g,
        };
        ln_g + self.scale.ln()
    }
}

impl Distribution<f64> for Gamma {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let g = self.marsaglia_tsang(rng);
        let g = match self.inv_shape {
            Some(inv) => g * uniform_open(rng).powf(inv),
            None => g,
        };
        g * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn moments(gamma: &Gamma, seed: u64, n: usize) -> (f64, f64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for _ in 0..n {
            let x = gamma.sample(&mut rng);
            assert!(x >= 0.0 && x.is_finite(), "bad gamma draw {}", x);
            sum += x;
            sum_sq += x * x;
        }
        let mean = sum / n as f64;
        (mean, sum_sq / n as f64 - mean * mean)
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert_eq!(Gamma::new(0.0, 1.0), Err(GammaError::InvalidShape(0.0)));
        assert_eq!(Gamma::new(-1.0, 1.0), Err(GammaError::InvalidShape(-1.0)));
        assert_eq!(Gamma::new(2.0, -0.5), Err(GammaError::InvalidScale(-0.5)));
        assert!(matches!(
            Gamma::new(f64::NAN, 1.0),
            Err(GammaError::InvalidShape(_))
        ));
        assert!(matches!(
            Gamma::new(1.0, f64::INFINITY),
            Err(GammaError::InvalidScale(_))
        ));
    }

    #[test]
    fn test_theoretical_moments() {
        let g = Gamma::new(3.0, 2.0).unwrap();
        assert_eq!(g.shape(), 3.0);
        assert_eq!(g.scale(), 2.0);
        assert!((g.mean() - 6.0).abs() < 1e-14);
        assert!((g.variance() - 12.0).abs() < 1e-14);
    }

    #[test]
    fn test_shape_above_one() {
        let g = Gamma::new(2.0, 1.0).unwrap();
        let (mean, variance) = moments(&g, 42, 20000);
        assert!((mean - 2.0).abs() < 0.1, "Mean should be close to 2, got {}", mean);
        assert!(
            (variance - 2.0).abs() < 0.2,
            "Variance should be close to 2, got {}",
            variance
        );
    }

    #[test]
    fn test_shape_below_one() {
        let g = Gamma::new(0.5, 1.0).unwrap();
        let (mean, variance) = moments(&g, 42, 20000);
        assert!((mean - 0.5).abs() < 0.05, "Mean should be close to 0.5, got {}", mean);
        assert!(
            (variance - 0.5).abs() < 0.1,
            "Variance should be close to 0.5, got {}",
            variance
        );
    }

    #[test]
    fn test_scale() {
        let g = Gamma::new(4.0, 3.0).unwrap();
        let (mean, variance) = moments(&g, 42, 20000);
        assert!((mean - 12.0).abs() < 0.3, "Mean should be close to 12, got {}", mean);
        assert!(
            (variance - 36.0).abs() < 3.0,
            "Variance should be close to 36, got {}",
            variance
        );
    }

    #[test]
    fn test_ln_sample_tracks_sample() {
        for shape in [0.5, 2.0, 7.5] {
            let g = Gamma::new(shape, 2.0).unwrap();
            let mut rng1 = StdRng::seed_from_u64(11);
            let mut rng2 = StdRng::seed_from_u64(11);
            for _ in 0..1000 {
                let x = g.sample(&mut rng1);
                let ln_x = g.ln_sample(&mut rng2);
                assert!(
                    (ln_x.exp() - x).abs() <= 1e-12 * x,
                    "shape {}: exp({}) != {}",
                    shape,
                    ln_x,
                    x
                );
            }
        }
    }

    #[test]
    fn test_ln_sample_small_shape() {
        let g = Gamma::new(1e-3, 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut underflows = 0;
        for _ in 0..1000 {
            let ln_x = g.ln_sample(&mut rng);
            assert!(ln_x.is_finite(), "ln draw {} is not finite", ln_x);
            if ln_x < f64::MIN_POSITIVE.ln() {
                underflows += 1;
            }
        }
        // The plain draw would have been 0 for these
        assert!(underflows > 0);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let g = Gamma::new(1.5, 1.0).unwrap();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert_eq!(g.sample(&mut rng1), g.sample(&mut rng2));
        }
    }
}
