use crate::SampleError;
use gamma_rs::Gamma;
use log::{debug, warn};
use rand::{Rng, SeedableRng, distr::Distribution, rngs::StdRng};

/// How the bit source of a sampling call is seeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Seed {
    /// Fresh OS entropy on every call.
    #[default]
    Entropy,
    /// Fixed state for reproducible sequences.
    Fixed(u64),
}

impl Seed {
    fn rng(self) -> StdRng {
        match self {
            Seed::Entropy => StdRng::from_os_rng(),
            Seed::Fixed(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

impl From<Option<u64>> for Seed {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(Seed::Entropy, Seed::Fixed)
    }
}

/// Beta(a, b) sampler built from two unit-scale gamma generators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaSampler {
    gamma_a: Gamma,
    gamma_b: Gamma,
}

impl BetaSampler {
    pub fn new(a: f64, b: f64) -> Result<Self, SampleError> {
        let gamma_a = Gamma::new(a, 1.0).map_err(|e| SampleError::from_gamma("a", e))?;
        let gamma_b = Gamma::new(b, 1.0).map_err(|e| SampleError::from_gamma("b", e))?;
        Ok(Self { gamma_a, gamma_b })
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.gamma_a.shape()
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.gamma_b.shape()
    }

    /// a / (a + b)
    pub fn mean(&self) -> f64 {
        self.a() / (self.a() + self.b())
    }

    /// ab / ((a + b)^2 (a + b + 1))
    pub fn variance(&self) -> f64 {
        let ab = self.a() + self.b();
        self.a() * self.b() / (ab * ab * (ab + 1.0))
    }

    /// Draw `n` samples in order from a caller-owned bit source.
    pub fn draw<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let mut betas = Vec::with_capacity(n);
        for _ in 0..n {
            betas.push(self.sample(rng));
        }
        let boundary = betas.iter().filter(|&&v| v == 0.0 || v == 1.0).count();
        if boundary > 0 {
            debug!(
                "{} of {} beta({},{}) samples rounded to 0 or 1",
                boundary,
                n,
                self.a(),
                self.b()
            );
        }
        betas
    }
}

impl Distribution<f64> for BetaSampler {
    /// x / (x + y), evaluated as 1 / (1 + exp(ln y - ln x)) so that small
    /// shapes whose gamma draws underflow still give a value in [0, 1].
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let ln_x = self.gamma_a.ln_sample(rng);
        let ln_y = self.gamma_b.ln_sample(rng);
        let diff = ln_y - ln_x;
        if diff.is_nan() {
            // Both logs are -inf (shapes below ~1e-307): the ratio is indeterminate
            warn!(
                "beta({},{}) draw overflowed in log space, returning the mean",
                self.a(),
                self.b()
            );
            return self.mean();
        }
        1.0 / (1.0 + diff.exp())
    }
}

/// Draw `n` Beta(a, b) samples from a bit source seeded with OS entropy.
pub fn draw_betas(n: usize, a: f64, b: f64) -> Result<Vec<f64>, SampleError> {
    draw_betas_with(n, a, b, Seed::Entropy)
}

/// Draw `n` Beta(a, b) samples; the same `seed` always yields the same sequence.
pub fn draw_betas_seeded(n: usize, a: f64, b: f64, seed: u64) -> Result<Vec<f64>, SampleError> {
    draw_betas_with(n, a, b, Seed::Fixed(seed))
}

pub fn draw_betas_with(n: usize, a: f64, b: f64, seed: Seed) -> Result<Vec<f64>, SampleError> {
    let sampler = BetaSampler::new(a, b)?;
    debug!("drawing {} beta({},{}) samples, seed {:?}", n, a, b, seed);
    let mut rng = seed.rng();
    Ok(sampler.draw(n, &mut rng))
}
