use gamma_rs::GammaError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SampleError {
    /// A shape parameter is not finite and positive.
    #[error("invalid argument: shape parameter {name} must be > 0, got {value}")]
    InvalidArgument { name: &'static str, value: f64 },
}

impl SampleError {
    /// Attribute a gamma construction failure to the named beta parameter.
    pub(crate) fn from_gamma(name: &'static str, err: GammaError) -> Self {
        let value = match err {
            GammaError::InvalidShape(v) | GammaError::InvalidScale(v) => v,
        };
        Self::InvalidArgument { name, value }
    }
}
