use super::{Coordinates, GeometryTrait};
use std::fmt::Debug;

/// Represents a ring: a series of coordinates that is meant to form a closed loop.
/// Rings are the building blocks of polygons.
///
/// Closure (first == last) is a semantic expectation only; it is neither checked nor enforced.
#[derive(Clone, Default, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Returns `true` if the ring has at least one position and its first and last positions are equal.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		!self.0.is_empty() && self.0.first() == self.0.last()
	}
}

impl GeometryTrait for RingGeometry {
	fn visit_coords<F: FnMut(&Coordinates)>(&self, f: &mut F) {
		self.0.iter().for_each(f);
	}

	fn map_coords<F: Fn(&Coordinates) -> Coordinates>(&self, f: &F) -> Self {
		RingGeometry(self.0.iter().map(f).collect())
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);
crate::impl_composite!(RingGeometry, Coordinates);

/// Converts a `geo::LineString<f64>` into a `RingGeometry`, preserving the order of coordinates.
impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

impl From<&RingGeometry> for geo::LineString<f64> {
	fn from(ring: &RingGeometry) -> Self {
		geo::LineString(ring.0.iter().map(geo::Coord::from).collect())
	}
}
