use super::{Coordinates, GeometryTrait, PointGeometry};
use std::fmt::Debug;

/// Represents a collection of points, used to store multiple discrete locations.
#[derive(Clone, Default, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn visit_coords<F: FnMut(&Coordinates)>(&self, f: &mut F) {
		for point in &self.0 {
			point.visit_coords(f);
		}
	}

	fn map_coords<F: Fn(&Coordinates) -> Coordinates>(&self, f: &F) -> Self {
		MultiPointGeometry(self.0.iter().map(|point| point.map_coords(f)).collect())
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);
crate::impl_composite!(MultiPointGeometry, PointGeometry);

impl From<geo::MultiPoint<f64>> for MultiPointGeometry {
	fn from(geometry: geo::MultiPoint<f64>) -> Self {
		MultiPointGeometry(geometry.into_iter().map(|p| PointGeometry::from(p.0)).collect())
	}
}

impl From<&MultiPointGeometry> for geo::MultiPoint<f64> {
	fn from(multi: &MultiPointGeometry) -> Self {
		geo::MultiPoint(multi.0.iter().map(geo::Point::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, Dimension};

	#[test]
	fn from_arrays() {
		let multi = MultiPointGeometry::from(&[[100.0, 0.0], [101.0, 1.0]]);
		assert_eq!(multi.len(), 2);
		assert_eq!(multi.get(1).unwrap().x(), 101.0);
		assert_eq!(multi.dimension(), Some(Dimension::Xy));
	}

	#[test]
	fn compute_bounds() {
		let multi = MultiPointGeometry::from(&[[1, 5], [-3, 2], [4, 0]]);
		assert_eq!(multi.compute_bounds(), Some([-3.0, 0.0, 4.0, 5.0]));
		assert_eq!(MultiPointGeometry::default().compute_bounds(), None);
	}

	#[test]
	fn into_first_and_rest() {
		let multi = MultiPointGeometry::from(&[[1, 1], [2, 2], [3, 3]]);
		let (first, rest) = multi.into_first_and_rest().unwrap();
		assert_eq!(first, PointGeometry::from(&[1, 1]));
		assert_eq!(rest.len(), 2);
	}

	#[test]
	fn geo_round_trip() {
		let multi = MultiPointGeometry::from(&[[1, 2], [3, 4]]);
		assert_eq!(MultiPointGeometry::from(geo::MultiPoint::from(&multi)), multi);
	}
}
