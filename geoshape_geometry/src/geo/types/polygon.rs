use super::*;
use std::fmt::Debug;

/// A polygon: ring 0 is the outer boundary (shell), any further rings are holes.
///
/// A polygon without rings is degenerate but representable.
#[derive(Clone, Default, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	/// Returns the outer ring, if any.
	#[must_use]
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	/// Returns the holes.
	#[must_use]
	pub fn interiors(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or_default()
	}
}

impl GeometryTrait for PolygonGeometry {
	fn visit_coords<F: FnMut(&Coordinates)>(&self, f: &mut F) {
		for ring in &self.0 {
			ring.visit_coords(f);
		}
	}

	fn map_coords<F: Fn(&Coordinates) -> Coordinates>(&self, f: &F) -> Self {
		PolygonGeometry(self.0.iter().map(|ring| ring.map_coords(f)).collect())
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);
crate::impl_composite!(PolygonGeometry, RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		for interior in interiors {
			rings.push(RingGeometry::from(interior));
		}
		PolygonGeometry(rings)
	}
}

/// An empty polygon becomes a `geo::Polygon` with an empty exterior.
impl From<&PolygonGeometry> for geo::Polygon<f64> {
	fn from(polygon: &PolygonGeometry) -> Self {
		let exterior = polygon.exterior().map(geo::LineString::from).unwrap_or_else(|| geo::LineString(vec![]));
		let interiors = polygon.interiors().iter().map(geo::LineString::from).collect();
		geo::Polygon::new(exterior, interiors)
	}
}
