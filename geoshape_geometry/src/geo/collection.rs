use super::{Coordinates, Geometry, GeometryTrait};
use std::fmt::Debug;

/// An ordered list of geometries of any type, including nested collections.
#[derive(Clone, Default, PartialEq)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl GeometryTrait for GeometryCollection {
	fn visit_coords<F: FnMut(&Coordinates)>(&self, f: &mut F) {
		for geometry in &self.0 {
			geometry.visit_coords(f);
		}
	}

	fn map_coords<F: Fn(&Coordinates) -> Coordinates>(&self, f: &F) -> Self {
		GeometryCollection(self.0.iter().map(|geometry| geometry.map_coords(f)).collect())
	}
}

impl GeometryCollection {
	/// Returns how many collections are stacked here, counting this one.
	#[must_use]
	pub fn nesting_depth(&self) -> usize {
		1 + self
			.0
			.iter()
			.map(|geometry| match geometry {
				Geometry::GeometryCollection(inner) => inner.nesting_depth(),
				_ => 0,
			})
			.max()
			.unwrap_or(0)
	}
}

impl Debug for GeometryCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(GeometryCollection, Geometry);

impl From<Vec<Geometry>> for GeometryCollection {
	fn from(geometries: Vec<Geometry>) -> Self {
		Self(geometries)
	}
}

impl FromIterator<Geometry> for GeometryCollection {
	fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl From<geo::GeometryCollection<f64>> for GeometryCollection {
	fn from(collection: geo::GeometryCollection<f64>) -> Self {
		collection.into_iter().map(Geometry::from).collect()
	}
}

impl From<&GeometryCollection> for geo::GeometryCollection<f64> {
	fn from(collection: &GeometryCollection) -> Self {
		geo::GeometryCollection(collection.0.iter().map(geo::Geometry::from).collect())
	}
}
