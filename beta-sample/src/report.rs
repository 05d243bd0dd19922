/// Render one sample line, `beta(a,b) sample: value`.
///
/// Floats use their shortest round-trip form, so `2.0` prints as `2`.
pub fn format_sample(a: f64, b: f64, value: f64) -> String {
    format!("beta({},{}) sample: {}", a, b, value)
}
