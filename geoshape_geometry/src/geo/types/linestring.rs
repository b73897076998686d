use super::{Coordinates, GeometryTrait, MultiLineStringGeometry, SingleGeometryTrait};
use std::fmt::Debug;

/// Represents a sequence of connected coordinates forming a line, typically used for polylines or paths.
///
/// No minimum length is enforced; an empty line is a valid value.
#[derive(Clone, Default, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	fn visit_coords<F: FnMut(&Coordinates)>(&self, f: &mut F) {
		self.0.iter().for_each(f);
	}

	fn map_coords<F: Fn(&Coordinates) -> Coordinates>(&self, f: &F) -> Self {
		LineStringGeometry(self.0.iter().map(f).collect())
	}
}

impl SingleGeometryTrait<MultiLineStringGeometry> for LineStringGeometry {
	/// Converts this single line into a `MultiLineStringGeometry` containing just this one line.
	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry(vec![self])
	}
}

impl Debug for LineStringGeometry {
	/// Prints the list of coordinates in a developer-friendly format.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);
crate::impl_composite!(LineStringGeometry, Coordinates);

impl From<geo::LineString<f64>> for LineStringGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		LineStringGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

impl From<&LineStringGeometry> for geo::LineString<f64> {
	fn from(line: &LineStringGeometry) -> Self {
		geo::LineString(line.0.iter().map(geo::Coord::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	#[test]
	fn keeps_order() {
		let line = LineStringGeometry::from(&[[100.0, 0.0], [101.0, 1.0]]);
		assert_eq!(line.len(), 2);
		assert_eq!(line.first().unwrap().x(), 100.0);
		assert_eq!(line.last().unwrap().x(), 101.0);
	}

	#[test]
	fn empty_line() {
		let line = LineStringGeometry::default();
		assert!(line.is_empty());
		assert_eq!(line.dimension(), None);
		assert_eq!(line.compute_bounds(), None);
	}

	#[test]
	fn is_uniform() {
		assert!(LineStringGeometry::from(&[[1, 2], [3, 4]]).is_uniform());
		let mixed = LineStringGeometry(vec![Coordinates::new(1.0, 2.0), Coordinates::new_3d(3.0, 4.0, 5.0)]);
		assert!(!mixed.is_uniform());
	}

	#[test]
	fn compute_bounds() {
		let line = LineStringGeometry::from(&[[3, -1], [0, 4], [2, 2]]);
		assert_eq!(line.compute_bounds(), Some([0.0, -1.0, 3.0, 4.0]));
	}

	#[test]
	fn debug_format() {
		let line = LineStringGeometry::from(&[[1, 2], [3, 4]]);
		assert_eq!(format!("{line:?}"), "[[1.0, 2.0], [3.0, 4.0]]");
	}

	#[test]
	fn geo_round_trip() {
		let line = LineStringGeometry::from(&[[1, 2], [3, 4]]);
		let geo_line = geo::LineString::from(&line);
		assert_eq!(LineStringGeometry::from(geo_line), line);
	}
}
