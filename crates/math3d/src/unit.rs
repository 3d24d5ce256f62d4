use std::fmt;
use std::ops::{Deref, Div, Mul, Neg};

/// A wrapper that ensures the underlying value has a unit norm.
///
/// Only read access is provided; mutating the inner value would break the invariant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit<T> {
	unit: T,
}

impl<T> Unit<T> {
	/// Wraps the given value, assuming it is already normalized.
	pub const fn new_unchecked(unit: T) -> Self {
		Self { unit }
	}

	/// Unwraps the normalized value.
	pub fn into_inner(self) -> T {
		self.unit
	}
}

impl<T> AsRef<T> for Unit<T> {
	fn as_ref(&self) -> &T {
		&self.unit
	}
}

impl<T> Deref for Unit<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.unit
	}
}

impl<T: fmt::Display> fmt::Display for Unit<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.unit, f)
	}
}

impl<T: Neg<Output = T>> Neg for Unit<T> {
	type Output = Unit<T>;

	fn neg(self) -> Self::Output {
		Unit::new_unchecked(-self.unit)
	}
}

impl<T: Mul<U>, U> Mul<U> for Unit<T> {
	type Output = T::Output;

	fn mul(self, rhs: U) -> Self::Output {
		self.unit * rhs
	}
}

impl<T: Div<U>, U> Div<U> for Unit<T> {
	type Output = T::Output;

	fn div(self, rhs: U) -> Self::Output {
		self.unit / rhs
	}
}
