use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::complex::Complex64;
use super::error::{VectorError, VectorResult};
use super::num::{FloatScalar, Scalar};
use super::unit::Unit;

/// A three-dimensional cartesian vector over integer, real or complex components.
///
/// Equality is exact. Use the [`approx`] traits for tolerant comparison.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vec3<T> {
	x: T,
	y: T,
	z: T,
}

impl<T> Vec3<T> {
	pub const fn new(x: T, y: T, z: T) -> Self {
		Self { x, y, z }
	}

	/// Applies `f` to each component.
	pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Vec3<U> {
		Vec3::new(f(self.x), f(self.y), f(self.z))
	}
}

impl<T: Scalar> Vec3<T> {
	/// The null vector.
	pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);

	pub const X: Unit<Self> = Unit::new_unchecked(Self::new(T::ONE, T::ZERO, T::ZERO));
	pub const Y: Unit<Self> = Unit::new_unchecked(Self::new(T::ZERO, T::ONE, T::ZERO));
	pub const Z: Unit<Self> = Unit::new_unchecked(Self::new(T::ZERO, T::ZERO, T::ONE));

	#[inline]
	pub fn x(&self) -> T {
		self.x
	}

	#[inline]
	pub fn y(&self) -> T {
		self.y
	}

	#[inline]
	pub fn z(&self) -> T {
		self.z
	}

	pub fn set_x(&mut self, value: T) {
		self.x = value;
	}

	pub fn set_y(&mut self, value: T) {
		self.y = value;
	}

	pub fn set_z(&mut self, value: T) {
		self.z = value;
	}

	/// Returns the complex conjugate vector.
	pub fn conj(&self) -> Self {
		self.map(T::conj)
	}

	/// Returns the squared magnitude.
	pub fn mag2(&self) -> f64 {
		self.x.norm_sqr() + self.y.norm_sqr() + self.z.norm_sqr()
	}

	pub fn mag(&self) -> f64 {
		self.mag2().sqrt()
	}

	/// Returns the squared distance from the z axis.
	pub fn magxy2(&self) -> f64 {
		self.x.norm_sqr() + self.y.norm_sqr()
	}

	/// Returns the distance from the z axis.
	pub fn magxy(&self) -> f64 {
		self.magxy2().sqrt()
	}

	/// Returns this vector with complex components.
	pub fn complex(&self) -> Vec3<Complex64> {
		self.map(T::to_complex)
	}

	/// Returns the real parts.
	pub fn real(&self) -> Vec3<f64> {
		self.map(T::re)
	}

	/// Returns the dot product, antilinear in `self` and linear in `rhs`.
	pub fn dot(&self, rhs: Self) -> T {
		let left = self.conj();
		left.x * rhs.x + left.y * rhs.y + left.z * rhs.z
	}

	/// Returns the cross product, linear in both arguments.
	pub fn cross(&self, rhs: Self) -> Self {
		Self::new(
			self.y * rhs.z - rhs.y * self.z,
			self.z * rhs.x - rhs.z * self.x,
			self.x * rhs.y - rhs.x * self.y,
		)
	}
}

impl<T: FloatScalar> Vec3<T> {
	/// Returns the unit vector in the direction of this one.
	///
	/// Complex vectors are divided by their real magnitude.
	pub fn unit(&self) -> VectorResult<Unit<Self>> {
		let len = self.mag();
		if len == 0.0 {
			log::debug!("refusing to normalize null vector {}", self);
			return Err(VectorError::NullVectorNormalization);
		}
		Ok(Unit::new_unchecked(self.map(|c| c.unscale(len))))
	}

	/// Projects this vector onto `v`: `(self . v) v / |v|^2`.
	///
	/// Projecting onto the null vector divides by zero.
	pub fn project(&self, v: Self) -> Self {
		let dot = self.dot(v);
		let mag2 = v.mag2();
		v.map(|c| (dot * c).unscale(mag2))
	}

	/// Rotates about the x axis by `angle` radians.
	pub fn rotated_x(&self, angle: f64) -> Self {
		let (sin, cos) = angle.sin_cos();
		Self::new(
			self.x,
			self.y.scale(cos) + self.z.scale(sin),
			self.y.scale(-sin) + self.z.scale(cos),
		)
	}

	/// Rotates about the y axis by `angle` radians.
	pub fn rotated_y(&self, angle: f64) -> Self {
		let (sin, cos) = angle.sin_cos();
		Self::new(
			self.x.scale(cos) + self.z.scale(sin),
			self.y,
			self.x.scale(-sin) + self.z.scale(cos),
		)
	}

	/// Rotates about the z axis by `angle` radians.
	pub fn rotated_z(&self, angle: f64) -> Self {
		let (sin, cos) = angle.sin_cos();
		Self::new(
			self.x.scale(cos) + self.y.scale(sin),
			self.x.scale(-sin) + self.y.scale(cos),
			self.z,
		)
	}
}

impl<T> From<[T; 3]> for Vec3<T> {
	fn from([x, y, z]: [T; 3]) -> Self {
		Self::new(x, y, z)
	}
}

impl<T> From<(T, T, T)> for Vec3<T> {
	fn from((x, y, z): (T, T, T)) -> Self {
		Self::new(x, y, z)
	}
}

impl<T> From<Vec3<T>> for [T; 3] {
	fn from(v: Vec3<T>) -> Self {
		[v.x, v.y, v.z]
	}
}

impl<T: fmt::Display> fmt::Display for Vec3<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({},{},{})", self.x, self.y, self.z)
	}
}

impl<T: Scalar> AddAssign for Vec3<T> {
	fn add_assign(&mut self, rhs: Self) {
		self.x += rhs.x;
		self.y += rhs.y;
		self.z += rhs.z;
	}
}

impl<T: Scalar> Add for Vec3<T> {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		let mut result = self;
		result += rhs;
		result
	}
}

impl<T: Scalar> SubAssign for Vec3<T> {
	fn sub_assign(&mut self, rhs: Self) {
		self.x -= rhs.x;
		self.y -= rhs.y;
		self.z -= rhs.z;
	}
}

impl<T: Scalar> Sub for Vec3<T> {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		let mut result = self;
		result -= rhs;
		result
	}
}

impl<T: Neg> Neg for Vec3<T> {
	type Output = Vec3<T::Output>;

	fn neg(self) -> Self::Output {
		Vec3::new(-self.x, -self.y, -self.z)
	}
}

impl<T: MulAssign<U>, U: Scalar> MulAssign<U> for Vec3<T> {
	fn mul_assign(&mut self, rhs: U) {
		self.x *= rhs;
		self.y *= rhs;
		self.z *= rhs;
	}
}

impl<T: Mul<U>, U: Scalar> Mul<U> for Vec3<T> {
	type Output = Vec3<T::Output>;

	fn mul(self, rhs: U) -> Self::Output {
		Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
	}
}

// Integer division by zero panics, floating division yields inf or NaN.
impl<T: DivAssign<U>, U: Scalar> DivAssign<U> for Vec3<T> {
	fn div_assign(&mut self, rhs: U) {
		self.x /= rhs;
		self.y /= rhs;
		self.z /= rhs;
	}
}

impl<T: Div<U>, U: Scalar> Div<U> for Vec3<T> {
	type Output = Vec3<T::Output>;

	fn div(self, rhs: U) -> Self::Output {
		Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
	}
}

// Scalar on the left. There is no vector by vector product, spell it `dot` or `cross`.
macro_rules! scalar_mul_impl {
	($($s:ty => $t:ty),* $(,)?) => {$(
		impl Mul<Vec3<$t>> for $s {
			type Output = Vec3<<$s as Mul<$t>>::Output>;

			fn mul(self, rhs: Vec3<$t>) -> Self::Output {
				Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z)
			}
		}
	)*};
}

scalar_mul_impl! {
	i8 => i8,
	i16 => i16,
	i32 => i32,
	i64 => i64,
	isize => isize,
	f64 => f64,
	f64 => Complex64,
	Complex64 => Complex64,
	Complex64 => f64,
}

impl<T: AbsDiffEq> AbsDiffEq for Vec3<T> where T::Epsilon: Copy {
	type Epsilon = T::Epsilon;

	fn default_epsilon() -> Self::Epsilon {
		T::default_epsilon()
	}

	fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
		self.x.abs_diff_eq(&other.x, epsilon)
			&& self.y.abs_diff_eq(&other.y, epsilon)
			&& self.z.abs_diff_eq(&other.z, epsilon)
	}
}

impl<T: RelativeEq> RelativeEq for Vec3<T> where T::Epsilon: Copy {
	fn default_max_relative() -> Self::Epsilon {
		T::default_max_relative()
	}

	fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
		self.x.relative_eq(&other.x, epsilon, max_relative)
			&& self.y.relative_eq(&other.y, epsilon, max_relative)
			&& self.z.relative_eq(&other.z, epsilon, max_relative)
	}
}

impl<T: UlpsEq> UlpsEq for Vec3<T> where T::Epsilon: Copy {
	fn default_max_ulps() -> u32 {
		T::default_max_ulps()
	}

	fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
		self.x.ulps_eq(&other.x, epsilon, max_ulps)
			&& self.y.ulps_eq(&other.y, epsilon, max_ulps)
			&& self.z.ulps_eq(&other.z, epsilon, max_ulps)
	}
}
