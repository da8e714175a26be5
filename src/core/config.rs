#[cfg(not(feature = "single-precision"))]
pub type Real = f64;
#[cfg(feature = "single-precision")]
pub type Real = f32;

/// Tolerance used by every approximate comparison in [`linalg`](crate::util::linalg).
#[cfg(not(feature = "single-precision"))]
pub const EPSILON: Real = 1e-6;
/// Tolerance used by every approximate comparison in [`linalg`](crate::util::linalg).
#[cfg(feature = "single-precision")]
pub const EPSILON: Real = 1e-4;
