use super::Geometry;
use std::fmt::Display;

/// The closed set of GeoJSON geometry type tags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Point,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
	GeometryCollection,
}

impl GeometryType {
	pub const ALL: [GeometryType; 7] = [
		GeometryType::Point,
		GeometryType::LineString,
		GeometryType::Polygon,
		GeometryType::MultiPoint,
		GeometryType::MultiLineString,
		GeometryType::MultiPolygon,
		GeometryType::GeometryCollection,
	];

	/// Returns the tag as written in the `type` member.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			GeometryType::Point => "Point",
			GeometryType::LineString => "LineString",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiPoint => "MultiPoint",
			GeometryType::MultiLineString => "MultiLineString",
			GeometryType::MultiPolygon => "MultiPolygon",
			GeometryType::GeometryCollection => "GeometryCollection",
		}
	}

	/// Looks up a tag. Matching is case sensitive.
	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|t| t.as_str() == name)
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<&Geometry> for GeometryType {
	fn from(geometry: &Geometry) -> Self {
		match geometry {
			Geometry::Point(_) => GeometryType::Point,
			Geometry::LineString(_) => GeometryType::LineString,
			Geometry::Polygon(_) => GeometryType::Polygon,
			Geometry::MultiPoint(_) => GeometryType::MultiPoint,
			Geometry::MultiLineString(_) => GeometryType::MultiLineString,
			Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
			Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
		}
	}
}
