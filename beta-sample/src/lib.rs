//! Beta(a, b) sampling by the gamma-ratio method.
//!
//! With X ~ Gamma(a, 1) and Y ~ Gamma(b, 1) independent, X / (X + Y) is
//! Beta(a, b) distributed.

mod error;
pub mod report;
pub mod sampler;
pub mod summary;

pub use error::SampleError;
pub use report::format_sample;
pub use sampler::{BetaSampler, Seed, draw_betas, draw_betas_seeded, draw_betas_with};
pub use summary::Summary;
