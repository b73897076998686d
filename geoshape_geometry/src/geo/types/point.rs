use super::{Coordinates, GeometryTrait, MultiPointGeometry, SingleGeometryTrait};
use std::fmt::Debug;

/// Represents a single geographic or geometric point.
///
/// This is the simplest geometric type and is often used as a building block for more complex geometries.
#[derive(Clone, Copy, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	/// Constructs a new `PointGeometry` from a `Coordinates` instance.
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}
	/// Returns the x component of the point.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}
	/// Returns the y component of the point.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}
	/// Returns the z component of the point, if it has one.
	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.0.z()
	}
	/// Returns a reference to the underlying `Coordinates`.
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	fn visit_coords<F: FnMut(&Coordinates)>(&self, f: &mut F) {
		f(&self.0);
	}

	fn map_coords<F: Fn(&Coordinates) -> Coordinates>(&self, f: &F) -> Self {
		PointGeometry(f(&self.0))
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	/// Wraps this single point into a `MultiPointGeometry`.
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl Debug for PointGeometry {
	/// Formats the point as `[x, y]` or `[x, y, z]`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	/// Allows creating a `PointGeometry` from any type convertible into `Coordinates`, such as arrays or tuples.
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

impl From<&PointGeometry> for geo::Point<f64> {
	fn from(point: &PointGeometry) -> Self {
		geo::Point(geo::Coord::from(&point.0))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, Dimension};

	#[test]
	fn new_and_accessors() {
		let point = PointGeometry::new(Coordinates::new(1.0, 2.0));
		assert_eq!(point.x(), 1.0);
		assert_eq!(point.y(), 2.0);
		assert_eq!(point.z(), None);
		assert_eq!(point.as_coord(), &Coordinates::new(1.0, 2.0));
	}

	#[test]
	fn eq_and_ne() {
		assert_eq!(PointGeometry::from(&[1, 2]), PointGeometry::from(&[1, 2]));
		assert_ne!(PointGeometry::from(&[1, 2]), PointGeometry::from(&[3, 4]));
		assert_ne!(PointGeometry::from(&[1, 2]), PointGeometry::from(&[1, 2, 0]));
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", PointGeometry::from(&[1, 2])), "[1.0, 2.0]");
	}

	#[test]
	fn dimension_and_count() {
		assert_eq!(PointGeometry::from([1.0, 2.0]).dimension(), Some(Dimension::Xy));
		assert_eq!(PointGeometry::from([1.0, 2.0, 3.0]).dimension(), Some(Dimension::Xyz));
		assert_eq!(PointGeometry::from([1.0, 2.0]).num_points(), 1);
	}

	#[test]
	fn compute_bounds() {
		let bounds = PointGeometry::from([3.0, 7.0]).compute_bounds().unwrap();
		assert_eq!(bounds, [3.0, 7.0, 3.0, 7.0]);
	}

	#[test]
	fn to_2d() {
		assert_eq!(PointGeometry::from([1.0, 2.0, 3.0]).to_2d(), PointGeometry::from([1.0, 2.0]));
	}

	#[test]
	fn into_multi() {
		let p = PointGeometry::from(&[1, 2]);
		let multi = p.into_multi();
		assert_eq!(multi.len(), 1);
		assert_eq!(multi.as_vec()[0], p);
	}

	#[test]
	fn into_geo_point() {
		let p = geo::Point::from(&PointGeometry::from([1.0, 2.0, 3.0]));
		assert_eq!(p, geo::Point::new(1.0, 2.0));
	}
}
