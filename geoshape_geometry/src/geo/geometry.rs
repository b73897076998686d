use super::*;
use std::fmt::Debug;

/// Any geometry value. The variant is the GeoJSON `type` tag.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}
	pub fn new_collection(geometries: Vec<Geometry>) -> Self {
		Self::GeometryCollection(GeometryCollection(geometries))
	}

	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		GeometryType::from(self)
	}

	/// Returns the GeoJSON `type` tag of this geometry.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		self.geometry_type().as_str()
	}

	/// Wraps single geometries into their multi counterpart. Multi geometries and collections are returned unchanged.
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiPoint(_) => self,
			Geometry::MultiLineString(_) => self,
			Geometry::MultiPolygon(_) => self,
			Geometry::GeometryCollection(_) => self,
		}
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::new_multi_polygon(&vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

impl GeometryTrait for Geometry {
	fn visit_coords<F: FnMut(&Coordinates)>(&self, f: &mut F) {
		match self {
			Geometry::Point(g) => g.visit_coords(f),
			Geometry::LineString(g) => g.visit_coords(f),
			Geometry::Polygon(g) => g.visit_coords(f),
			Geometry::MultiPoint(g) => g.visit_coords(f),
			Geometry::MultiLineString(g) => g.visit_coords(f),
			Geometry::MultiPolygon(g) => g.visit_coords(f),
			Geometry::GeometryCollection(g) => g.visit_coords(f),
		}
	}

	fn map_coords<F: Fn(&Coordinates) -> Coordinates>(&self, f: &F) -> Self {
		match self {
			Geometry::Point(g) => Geometry::Point(g.map_coords(f)),
			Geometry::LineString(g) => Geometry::LineString(g.map_coords(f)),
			Geometry::Polygon(g) => Geometry::Polygon(g.map_coords(f)),
			Geometry::MultiPoint(g) => Geometry::MultiPoint(g.map_coords(f)),
			Geometry::MultiLineString(g) => Geometry::MultiLineString(g.map_coords(f)),
			Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.map_coords(f)),
			Geometry::GeometryCollection(g) => Geometry::GeometryCollection(g.map_coords(f)),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

macro_rules! impl_into_geometry {
	($($variant:ident($t:ty)),*) => {$(
		impl From<$t> for Geometry {
			fn from(value: $t) -> Self {
				Geometry::$variant(value)
			}
		}
	)*}
}

impl_into_geometry!(
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection)
);

/// `Line`, `Rect` and `Triangle` have no GeoJSON counterpart and become a `LineString` or `Polygon`.
impl From<geo::Geometry<f64>> for Geometry {
	fn from(geometry: geo::Geometry<f64>) -> Self {
		match geometry {
			geo::Geometry::Point(p) => Geometry::Point(PointGeometry::from(p.0)),
			geo::Geometry::Line(l) => Geometry::LineString(LineStringGeometry::from(geo::LineString::from(l))),
			geo::Geometry::LineString(l) => Geometry::LineString(LineStringGeometry::from(l)),
			geo::Geometry::Polygon(p) => Geometry::Polygon(PolygonGeometry::from(p)),
			geo::Geometry::MultiPoint(m) => Geometry::MultiPoint(MultiPointGeometry::from(m)),
			geo::Geometry::MultiLineString(m) => Geometry::MultiLineString(MultiLineStringGeometry::from(m)),
			geo::Geometry::MultiPolygon(m) => Geometry::MultiPolygon(MultiPolygonGeometry::from(m)),
			geo::Geometry::GeometryCollection(c) => Geometry::GeometryCollection(GeometryCollection::from(c)),
			geo::Geometry::Rect(r) => Geometry::Polygon(PolygonGeometry::from(r.to_polygon())),
			geo::Geometry::Triangle(t) => Geometry::Polygon(PolygonGeometry::from(t.to_polygon())),
		}
	}
}

/// The `z` component is dropped, `geo` geometries are planar.
impl From<&Geometry> for geo::Geometry<f64> {
	fn from(geometry: &Geometry) -> Self {
		match geometry {
			Geometry::Point(g) => geo::Geometry::Point(g.into()),
			Geometry::LineString(g) => geo::Geometry::LineString(g.into()),
			Geometry::Polygon(g) => geo::Geometry::Polygon(g.into()),
			Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(g.into()),
			Geometry::MultiLineString(g) => geo::Geometry::MultiLineString(g.into()),
			Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(g.into()),
			Geometry::GeometryCollection(g) => geo::Geometry::GeometryCollection(g.into()),
		}
	}
}
