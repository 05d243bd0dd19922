/// Descriptive statistics of a sample sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population variance.
    pub variance: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Single pass with Welford's update. `None` for an empty slice.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let (&first, rest) = samples.split_first()?;
        let mut mean = first;
        let mut m2 = 0.0;
        let mut min = first;
        let mut max = first;
        let mut count = 1usize;

        for &x in rest {
            count += 1;
            let delta = x - mean;
            mean += delta / count as f64;
            m2 += delta * (x - mean);
            min = min.min(x);
            max = max.max(x);
        }

        Some(Self {
            count,
            mean,
            variance: m2 / count as f64,
            min,
            max,
        })
    }
}
