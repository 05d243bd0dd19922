use anyhow::Context;
use beta_sample::{BetaSampler, Seed, Summary, draw_betas_with, format_sample};
use clap::Parser;
use log::info;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(version, about = "Draw samples from a Beta(a, b) distribution", long_about = None)]
struct Args {
    /// Number of samples to draw
    #[arg(short = 'n', long, default_value_t = 5)]
    count: usize,

    /// First shape parameter
    #[arg(short, long, default_value_t = 2.0, allow_negative_numbers = true)]
    alpha: f64,

    /// Second shape parameter
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    beta: f64,

    /// Fixed seed for a reproducible sequence
    #[arg(short, long, env = "BETA_SAMPLE_SEED")]
    seed: Option<u64>,

    /// Log sample and theoretical moments after the samples
    #[arg(long, default_value_t = false)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = if args.summary { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let betas = draw_betas_with(args.count, args.alpha, args.beta, Seed::from(args.seed))
        .context("sampling failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for &value in &betas {
        writeln!(out, "{}", format_sample(args.alpha, args.beta, value))?;
    }
    out.flush()?;

    if args.summary {
        let sampler = BetaSampler::new(args.alpha, args.beta)?;
        match Summary::from_samples(&betas) {
            Some(s) => info!(
                "n={} mean={} (expected {}) variance={} (expected {}) min={} max={}",
                s.count,
                s.mean,
                sampler.mean(),
                s.variance,
                sampler.variance(),
                s.min,
                s.max
            ),
            None => info!("no samples drawn"),
        }
    }
    Ok(())
}
