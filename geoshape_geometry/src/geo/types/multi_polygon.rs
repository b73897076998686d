use super::{Coordinates, GeometryTrait, PolygonGeometry};
use std::fmt::Debug;

/// Represents a collection of polygons, each of which may have an outer ring and optional inner holes.
/// This struct is used for complex, multi-part areas.
#[derive(Clone, Default, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn visit_coords<F: FnMut(&Coordinates)>(&self, f: &mut F) {
		for polygon in &self.0 {
			polygon.visit_coords(f);
		}
	}

	fn map_coords<F: Fn(&Coordinates) -> Coordinates>(&self, f: &F) -> Self {
		MultiPolygonGeometry(self.0.iter().map(|polygon| polygon.map_coords(f)).collect())
	}
}

/// Prints the list of polygons in a developer-friendly format.
impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);
crate::impl_composite!(MultiPolygonGeometry, PolygonGeometry);

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		MultiPolygonGeometry(geometry.into_iter().map(PolygonGeometry::from).collect())
	}
}

impl From<&MultiPolygonGeometry> for geo::MultiPolygon<f64> {
	fn from(multi: &MultiPolygonGeometry) -> Self {
		geo::MultiPolygon(multi.0.iter().map(geo::Polygon::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	fn example() -> MultiPolygonGeometry {
		MultiPolygonGeometry::from(&vec![
			vec![vec![[102.0, 2.0], [103.0, 2.0], [103.0, 3.0], [102.0, 3.0], [102.0, 2.0]]],
			vec![
				vec![[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]],
				vec![[100.2, 0.2], [100.8, 0.2], [100.8, 0.8], [100.2, 0.8], [100.2, 0.2]],
			],
		])
	}

	#[test]
	fn polygons_keep_their_ring_counts() {
		let multi = example();
		assert_eq!(multi.len(), 2);
		assert_eq!(multi.get(0).unwrap().len(), 1);
		assert_eq!(multi.get(1).unwrap().len(), 2);
		assert_eq!(multi.num_points(), 15);
	}

	#[test]
	fn compute_bounds() {
		assert_eq!(example().compute_bounds(), Some([100.0, 0.0, 103.0, 3.0]));
	}

	#[test]
	fn geo_round_trip() {
		let multi = example();
		assert_eq!(MultiPolygonGeometry::from(geo::MultiPolygon::from(&multi)), multi);
	}
}
