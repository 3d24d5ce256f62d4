use core::fmt::{Debug, Display};
use core::ops::{Add, Sub, Mul, Neg};
use core::ops::{AddAssign, SubAssign, MulAssign};

use super::complex::Complex64;

pub trait ScalarOps<Rhs = Self, Output = Self>:
	Add<Rhs, Output = Output> +
	Sub<Rhs, Output = Output> +
	Mul<Rhs, Output = Output>
{}

impl<T, Rhs, Output> ScalarOps<Rhs, Output> for T where T:
	Add<Rhs, Output = Output> +
	Sub<Rhs, Output = Output> +
	Mul<Rhs, Output = Output>
{}

pub trait ScalarAssignOps<Rhs = Self>:
	AddAssign<Rhs> +
	SubAssign<Rhs> +
	MulAssign<Rhs>
{}

impl<T, Rhs> ScalarAssignOps<Rhs> for T where T:
	AddAssign<Rhs> +
	SubAssign<Rhs> +
	MulAssign<Rhs>
{}

/// The component type of a [`Vec3`](crate::Vec3): a signed integer, `f64` or [`Complex64`].
pub trait Scalar: Copy + Default + PartialEq + Debug + Display + ScalarOps + ScalarAssignOps + Neg<Output = Self> {
	const ZERO: Self;
	const ONE: Self;

	/// Complex conjugate. The identity for real and integer scalars.
	fn conj(self) -> Self;

	/// Squared modulus `|z|^2`, always real.
	fn norm_sqr(self) -> f64;

	/// Real part, widened to `f64`.
	fn re(self) -> f64;

	/// This scalar as a complex number with the same real part.
	fn to_complex(self) -> Complex64;
}

/// Scalars over a field containing the reals: `f64` and [`Complex64`].
///
/// Everything that needs to scale by a real factor (normalization, projection,
/// rotation) is gated on this trait, which keeps it off integer vectors.
pub trait FloatScalar: Scalar {
	/// Multiplies by a real factor.
	fn scale(self, factor: f64) -> Self;

	/// Divides by a real divisor.
	fn unscale(self, divisor: f64) -> Self;
}

macro_rules! integer_impl {
	($t:ident) => {
		impl Scalar for $t {
			const ZERO: Self = 0;
			const ONE: Self = 1;

			#[inline]
			fn conj(self) -> Self {
				self
			}

			#[inline]
			fn norm_sqr(self) -> f64 {
				let v = self as f64;
				v * v
			}

			#[inline]
			fn re(self) -> f64 {
				self as f64
			}

			#[inline]
			fn to_complex(self) -> Complex64 {
				Complex64::new(self as f64, 0.0)
			}
		}
	}
}

integer_impl!(i8);
integer_impl!(i16);
integer_impl!(i32);
integer_impl!(i64);
integer_impl!(isize);

impl Scalar for f64 {
	const ZERO: Self = 0.0;
	const ONE: Self = 1.0;

	#[inline]
	fn conj(self) -> Self {
		self
	}

	#[inline]
	fn norm_sqr(self) -> f64 {
		self * self
	}

	#[inline]
	fn re(self) -> f64 {
		self
	}

	#[inline]
	fn to_complex(self) -> Complex64 {
		Complex64::new(self, 0.0)
	}
}

impl Scalar for Complex64 {
	const ZERO: Self = Complex64::new(0.0, 0.0);
	const ONE: Self = Complex64::new(1.0, 0.0);

	#[inline]
	fn conj(self) -> Self {
		Complex64::conj(&self)
	}

	#[inline]
	fn norm_sqr(self) -> f64 {
		Complex64::norm_sqr(&self)
	}

	#[inline]
	fn re(self) -> f64 {
		self.re
	}

	#[inline]
	fn to_complex(self) -> Complex64 {
		self
	}
}

macro_rules! float_impl {
	($t:ty) => {
		impl FloatScalar for $t {
			#[inline]
			fn scale(self, factor: f64) -> Self {
				self * factor
			}

			#[inline]
			fn unscale(self, divisor: f64) -> Self {
				self / divisor
			}
		}
	}
}

float_impl!(f64);
float_impl!(Complex64);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn norm_sqr_is_squared_modulus() {
		assert_eq!(Scalar::norm_sqr(-3i32), 9.0);
		assert_eq!(Scalar::norm_sqr(-1.5f64), 2.25);
		assert_eq!(Scalar::norm_sqr(Complex64::new(3.0, -4.0)), 25.0);
	}

	#[test]
	fn conj_only_touches_complex() {
		assert_eq!(Scalar::conj(7i64), 7);
		assert_eq!(Scalar::conj(-2.5f64), -2.5);
		assert_eq!(Scalar::conj(Complex64::new(1.0, 2.0)), Complex64::new(1.0, -2.0));
	}

	#[test]
	fn real_part_and_promotion() {
		assert_eq!(Scalar::re(-4i16), -4.0);
		assert_eq!(Scalar::re(Complex64::new(0.5, 9.0)), 0.5);
		assert_eq!(Scalar::to_complex(2i8), Complex64::new(2.0, 0.0));
		assert_eq!(Scalar::to_complex(2.5f64), Complex64::new(2.5, 0.0));
	}

	#[test]
	fn scaling_by_reals() {
		assert_eq!(3.0f64.scale(2.0), 6.0);
		assert_eq!(Complex64::new(2.0, -4.0).unscale(2.0), Complex64::new(1.0, -2.0));
	}
}
