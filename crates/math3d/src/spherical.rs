//! Spherical coordinates of real vectors.
//!
//! The polar angle is measured from the z axis, the azimuth in the xy plane with
//! `phi = atan2(-y, x)`. Every helper returns a fixed finite value for the null
//! vector instead of propagating NaN.

use super::R3;

impl R3 {
	/// Polar angle. Zero for the null vector.
	pub fn theta(&self) -> f64 {
		if self.x() == 0.0 && self.y() == 0.0 && self.z() == 0.0 {
			0.0
		} else {
			self.magxy().atan2(self.z())
		}
	}

	/// Azimuthal angle. Zero on the z axis.
	pub fn phi(&self) -> f64 {
		if self.x() == 0.0 && self.y() == 0.0 {
			0.0
		} else {
			(-self.y()).atan2(self.x())
		}
	}

	/// Cosine of the polar angle. One for the null vector.
	pub fn cos_theta(&self) -> f64 {
		let mag = self.mag();
		if mag == 0.0 { 1.0 } else { self.z() / mag }
	}

	/// Squared sine of the polar angle. Zero for the null vector.
	pub fn sin2_theta(&self) -> f64 {
		let mag2 = self.mag2();
		if mag2 == 0.0 { 0.0 } else { self.magxy2() / mag2 }
	}

	/// Angle between two vectors, in `[0, pi]`.
	///
	/// If either vector is null the cosine is taken as zero, giving `pi / 2`.
	pub fn angle(&self, other: R3) -> f64 {
		let mut cos: f64 = 0.0;
		let ptot = self.mag() * other.mag();
		if ptot > 0.0 {
			let ratio = self.dot(other) / ptot;
			cos = ratio.clamp(-1.0, 1.0);
			if cos != ratio {
				log::trace!("clamped angle cosine {} between {} and {}", ratio, self, other);
			}
		}
		cos.acos()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::{assert_abs_diff_eq, assert_relative_eq};
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};
	use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

	#[test]
	fn null_vector_sentinels() {
		let null = R3::ZERO;
		assert_eq!(null.theta(), 0.0);
		assert_eq!(null.phi(), 0.0);
		assert_eq!(null.cos_theta(), 1.0);
		assert_eq!(null.sin2_theta(), 0.0);
	}

	#[test]
	fn axes() {
		assert_eq!(R3::Z.theta(), 0.0);
		assert_eq!(R3::Z.phi(), 0.0);
		assert_eq!(R3::Z.cos_theta(), 1.0);
		assert_eq!(R3::Z.sin2_theta(), 0.0);

		assert_eq!((-*R3::Z).theta(), PI);
		assert_eq!((-*R3::Z).cos_theta(), -1.0);

		assert_eq!(R3::X.theta(), FRAC_PI_2);
		assert_eq!(R3::X.phi(), 0.0);
		assert_eq!(R3::X.sin2_theta(), 1.0);

		// The azimuth runs clockwise: +y sits at -pi/2.
		assert_eq!(R3::Y.phi(), -FRAC_PI_2);
		assert_eq!((-*R3::Y).phi(), FRAC_PI_2);
	}

	#[test]
	fn spherical_decomposition() {
		let v = R3::new(1.0, -1.0, 2.0f64.sqrt());
		assert_relative_eq!(v.theta(), FRAC_PI_4, epsilon = 1e-15);
		assert_relative_eq!(v.phi(), FRAC_PI_4, epsilon = 1e-15);
		assert_relative_eq!(v.cos_theta(), 0.5f64.sqrt(), epsilon = 1e-15);
		assert_relative_eq!(v.sin2_theta(), 0.5, epsilon = 1e-15);
	}

	#[test]
	fn angle_between_vectors() {
		assert_eq!(R3::X.angle(*R3::Y), FRAC_PI_2);
		assert_relative_eq!(R3::X.angle(R3::new(1.0, 1.0, 0.0)), FRAC_PI_4, epsilon = 1e-15);
		assert_eq!(R3::new(2.0, 0.0, 0.0).angle(R3::new(-3.0, 0.0, 0.0)), PI);
	}

	#[test]
	fn angle_with_null_vector_is_right_angle() {
		assert_eq!(R3::ZERO.angle(R3::new(1.0, 2.0, 3.0)), FRAC_PI_2);
		assert_eq!(R3::new(1.0, 2.0, 3.0).angle(R3::ZERO), FRAC_PI_2);
		assert_eq!(R3::ZERO.angle(R3::ZERO), FRAC_PI_2);
	}

	#[test]
	fn random_angle_properties() {
		let mut rng = StdRng::seed_from_u64(5);
		for _ in 0..200 {
			let a = R3::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
			let b = R3::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));

			// Rounding can push the cosine past one; clamping keeps acos finite.
			assert_abs_diff_eq!(a.angle(a), 0.0, epsilon = 1e-7);
			assert_relative_eq!(a.angle(-a), PI, epsilon = 1e-7);
			assert_relative_eq!(a.angle(b), b.angle(a), epsilon = 1e-15);
			assert!((0.0..=PI).contains(&a.angle(b)));

			assert_relative_eq!(a.cos_theta(), a.theta().cos(), epsilon = 1e-12);
			assert_relative_eq!(a.sin2_theta(), a.theta().sin().powi(2), epsilon = 1e-12);
		}
	}
}
