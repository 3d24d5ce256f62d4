/// Double precision complex scalar, the component type of [`C3`](crate::C3).
pub type Complex64 = num_complex::Complex<f64>;

/// The imaginary unit.
pub const I: Complex64 = Complex64::new(0.0, 1.0);

/// Returns the product `i * z`.
#[inline]
pub fn mul_i(z: Complex64) -> Complex64 {
	Complex64::new(-z.im, z.re)
}

/// Returns `exp(i * z)`.
///
/// Overflow follows IEEE semantics and may yield infinities or NaN.
#[inline]
pub fn exp_i(z: Complex64) -> Complex64 {
	mul_i(z).exp()
}
