use super::{Coordinates, GeometryTrait, LineStringGeometry};
use std::fmt::Debug;

#[derive(Clone, Default, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn visit_coords<F: FnMut(&Coordinates)>(&self, f: &mut F) {
		for line in &self.0 {
			line.visit_coords(f);
		}
	}

	fn map_coords<F: Fn(&Coordinates) -> Coordinates>(&self, f: &F) -> Self {
		MultiLineStringGeometry(self.0.iter().map(|line| line.map_coords(f)).collect())
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);
crate::impl_composite!(MultiLineStringGeometry, LineStringGeometry);

impl From<geo::MultiLineString<f64>> for MultiLineStringGeometry {
	fn from(geometry: geo::MultiLineString<f64>) -> Self {
		MultiLineStringGeometry(geometry.into_iter().map(LineStringGeometry::from).collect())
	}
}

impl From<&MultiLineStringGeometry> for geo::MultiLineString<f64> {
	fn from(multi: &MultiLineStringGeometry) -> Self {
		geo::MultiLineString(multi.0.iter().map(geo::LineString::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	#[test]
	fn lines_keep_their_lengths() {
		let multi = MultiLineStringGeometry::from(&vec![vec![[0, 0], [1, 1]], vec![[2, 2], [3, 3], [4, 4]]]);
		assert_eq!(multi.len(), 2);
		assert_eq!(multi.get(0).unwrap().len(), 2);
		assert_eq!(multi.get(1).unwrap().len(), 3);
		assert_eq!(multi.num_points(), 5);
	}

	#[test]
	fn geo_round_trip() {
		let multi = MultiLineStringGeometry::from(&vec![vec![[0, 0], [1, 1]], vec![[2, 2], [3, 3]]]);
		assert_eq!(MultiLineStringGeometry::from(geo::MultiLineString::from(&multi)), multi);
	}
}
