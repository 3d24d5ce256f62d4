//! Error type for the few vector operations that can fail.

use thiserror::Error;

/// Failure of a vector operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
	/// The null vector has no direction and cannot be scaled to unit length.
	#[error("cannot normalize null vector")]
	NullVectorNormalization,
}

pub type VectorResult<T> = Result<T, VectorError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message() {
		assert_eq!(VectorError::NullVectorNormalization.to_string(), "cannot normalize null vector");
	}
}
