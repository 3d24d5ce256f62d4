//! Three-dimensional vectors over integer, real and complex scalars.

pub mod num;

mod complex;
mod error;
mod spherical;
mod unit;
mod vec3;

pub use complex::{Complex64, I, exp_i, mul_i};
pub use error::{VectorError, VectorResult};
pub use num::{FloatScalar, Scalar};
pub use unit::Unit;
pub use vec3::Vec3;

/// Integer vector.
pub type I3 = Vec3<i32>;
/// Real vector.
pub type R3 = Vec3<f64>;
/// Complex vector.
pub type C3 = Vec3<Complex64>;
