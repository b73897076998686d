use super::Dimension;
use std::fmt::Debug;

/// A single position: `x`, `y` and an optional `z`.
///
/// The presence of `z` decides the dimension. A `z` of `0.0` is still a 3D position.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
	x: f64,
	y: f64,
	z: Option<f64>,
}

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y, z: None }
	}

	#[must_use]
	pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z: Some(z) }
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.x
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.y
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	#[must_use]
	pub fn dimension(&self) -> Dimension {
		if self.z.is_some() { Dimension::Xyz } else { Dimension::Xy }
	}

	/// Drops the `z` component.
	#[must_use]
	pub fn to_2d(&self) -> Self {
		Self::new(self.x, self.y)
	}

	/// Returns the components in `x, y, [z]` order.
	#[must_use]
	pub fn to_vec(&self) -> Vec<f64> {
		match self.z {
			Some(z) => vec![self.x, self.y, z],
			None => vec![self.x, self.y],
		}
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl<'a, T> From<&'a [T; 3]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 3]) -> Self {
		Coordinates::new_3d(value[0].into(), value[1].into(), value[2].into())
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates::new(value[0], value[1])
	}
}

impl From<[f64; 3]> for Coordinates {
	fn from(value: [f64; 3]) -> Self {
		Coordinates::new_3d(value[0], value[1], value[2])
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<(f64, f64, f64)> for Coordinates {
	fn from(value: (f64, f64, f64)) -> Self {
		Coordinates::new_3d(value.0, value.1, value.2)
	}
}

impl From<&Coordinates> for Coordinates {
	fn from(value: &Coordinates) -> Self {
		*value
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates::new(value.x, value.y)
	}
}

impl From<&Coordinates> for geo::Coord {
	fn from(value: &Coordinates) -> Self {
		geo::Coord { x: value.x, y: value.y }
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.to_vec().fmt(f)
	}
}
