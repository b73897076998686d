use std::fmt::{Debug, Display};

/// Number of components carried by a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
	/// `[x, y]`
	Xy,
	/// `[x, y, z]`
	Xyz,
}

impl Dimension {
	/// Returns the number of values in a position of this dimension.
	#[must_use]
	pub fn size(self) -> usize {
		match self {
			Dimension::Xy => 2,
			Dimension::Xyz => 3,
		}
	}

	/// Maps a position length to its dimension. Only 2 and 3 are valid.
	#[must_use]
	pub fn from_size(size: usize) -> Option<Self> {
		match size {
			2 => Some(Dimension::Xy),
			3 => Some(Dimension::Xyz),
			_ => None,
		}
	}
}

impl Display for Dimension {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Dimension::Xy => "2D",
			Dimension::Xyz => "3D",
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Dimension::Xy, 2)]
	#[case(Dimension::Xyz, 3)]
	fn size_round_trip(#[case] dimension: Dimension, #[case] size: usize) {
		assert_eq!(dimension.size(), size);
		assert_eq!(Dimension::from_size(size), Some(dimension));
	}

	#[rstest]
	#[case(0)]
	#[case(1)]
	#[case(4)]
	fn from_invalid_size(#[case] size: usize) {
		assert_eq!(Dimension::from_size(size), None);
	}

	#[test]
	fn display() {
		assert_eq!(Dimension::Xy.to_string(), "2D");
		assert_eq!(Dimension::Xyz.to_string(), "3D");
	}
}
