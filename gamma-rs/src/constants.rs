//! Constants for the Marsaglia-Tsang gamma method

/// Offset subtracted from the shape to get the cube-root scale `d`.
pub const ONE_THIRD: f64 = 1.0 / 3.0;

/// Coefficient of the quartic squeeze, `u < 1 - SQUEEZE * z^4`.
pub const SQUEEZE: f64 = 0.0331;

/// Shapes below this are boosted by one and corrected with `u^(1/shape)`.
pub const BOOST_THRESHOLD: f64 = 1.0;
