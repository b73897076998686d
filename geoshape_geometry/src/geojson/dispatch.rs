//! Type dispatcher: reads the `type` member and routes to the matching codec.

use super::{
	DecodeOptions, GeoJsonError, GeoJsonResult,
	decoder::{CoordinateDecoder, decode_elements},
	encode_line_string, encode_multi_line_string, encode_multi_point, encode_multi_polygon, encode_point,
	encode_polygon,
	error::kind_of,
};
use crate::{Geometry, GeometryCollection, GeometryType};
use log::{debug, trace};
use serde_json::{Map, Value};

/// Decodes a GeoJSON geometry object.
///
/// Members other than `type`, `coordinates` and `geometries` (for example `bbox`) are ignored.
pub fn decode_geometry(value: &Value, options: &DecodeOptions) -> GeoJsonResult<Geometry> {
	decode_nested(value, options, 0)
}

/// `depth` is the number of collections enclosing `value`.
fn decode_nested(value: &Value, options: &DecodeOptions, depth: usize) -> GeoJsonResult<Geometry> {
	let object = value.as_object().ok_or_else(|| GeoJsonError::WrongFieldKind {
		field: "geometry",
		expected: "an object",
		found: kind_of(value),
	})?;

	let geometry_type = match object.get("type") {
		None => return Err(GeoJsonError::MissingField("type")),
		Some(Value::String(name)) => {
			GeometryType::from_name(name).ok_or_else(|| GeoJsonError::UnknownType(format!("{name:?}")))?
		}
		Some(other) => {
			return Err(GeoJsonError::WrongFieldKind {
				field: "type",
				expected: "a string",
				found: kind_of(other),
			});
		}
	};
	trace!("decoding {geometry_type} at collection depth {depth}");

	if geometry_type == GeometryType::GeometryCollection {
		return decode_collection(object, options, depth + 1).map(Geometry::GeometryCollection);
	}

	let coordinates = object.get("coordinates").ok_or(GeoJsonError::MissingField("coordinates"))?;
	if !coordinates.is_array() {
		return Err(GeoJsonError::WrongFieldKind {
			field: "coordinates",
			expected: "an array",
			found: kind_of(coordinates),
		});
	}

	let mut decoder = CoordinateDecoder::new(options);
	Ok(match geometry_type {
		GeometryType::Point => Geometry::Point(decoder.point(coordinates)?),
		GeometryType::LineString => Geometry::LineString(decoder.line_string(coordinates)?),
		GeometryType::Polygon => Geometry::Polygon(decoder.polygon(coordinates)?),
		GeometryType::MultiPoint => Geometry::MultiPoint(decoder.multi_point(coordinates)?),
		GeometryType::MultiLineString => Geometry::MultiLineString(decoder.multi_line_string(coordinates)?),
		GeometryType::MultiPolygon => Geometry::MultiPolygon(decoder.multi_polygon(coordinates)?),
		GeometryType::GeometryCollection => unreachable!("handled above"),
	})
}

/// `level` counts this collection, so the outermost collection is level 1.
fn decode_collection(object: &Map<String, Value>, options: &DecodeOptions, level: usize) -> GeoJsonResult<GeometryCollection> {
	if level > options.max_depth {
		return Err(GeoJsonError::DepthLimitExceeded(options.max_depth));
	}

	let geometries = object.get("geometries").ok_or(GeoJsonError::MissingField("geometries"))?;
	if !geometries.is_array() {
		return Err(GeoJsonError::WrongFieldKind {
			field: "geometries",
			expected: "an array",
			found: kind_of(geometries),
		});
	}

	let members = decode_elements(geometries, |member| decode_nested(member, options, level))?;
	debug!("decoded geometry collection with {} members at level {level}", members.len());
	Ok(GeometryCollection(members))
}

/// Encodes a geometry as a GeoJSON geometry object.
pub fn encode_geometry(geometry: &Geometry) -> Value {
	let mut object = Map::new();
	object.insert("type".to_string(), Value::from(geometry.type_name()));

	let (key, value) = match geometry {
		Geometry::Point(g) => ("coordinates", encode_point(g)),
		Geometry::LineString(g) => ("coordinates", encode_line_string(g)),
		Geometry::Polygon(g) => ("coordinates", encode_polygon(g)),
		Geometry::MultiPoint(g) => ("coordinates", encode_multi_point(g)),
		Geometry::MultiLineString(g) => ("coordinates", encode_multi_line_string(g)),
		Geometry::MultiPolygon(g) => ("coordinates", encode_multi_polygon(g)),
		Geometry::GeometryCollection(g) => ("geometries", Value::Array(g.0.iter().map(encode_geometry).collect())),
	};
	object.insert(key.to_string(), value);

	Value::Object(object)
}

impl Geometry {
	pub fn from_geojson(value: &Value, options: &DecodeOptions) -> GeoJsonResult<Self> {
		decode_geometry(value, options)
	}

	pub fn from_geojson_str(json: &str, options: &DecodeOptions) -> GeoJsonResult<Self> {
		super::parse_geojson_geometry(json, options)
	}

	#[must_use]
	pub fn to_geojson(&self) -> Value {
		encode_geometry(self)
	}

	#[must_use]
	pub fn to_geojson_string(&self, pretty: bool) -> String {
		super::to_geojson_string(self, pretty)
	}
}

/// Decodes with [`DecodeOptions::default`].
impl TryFrom<&Value> for Geometry {
	type Error = GeoJsonError;

	fn try_from(value: &Value) -> GeoJsonResult<Self> {
		decode_geometry(value, &DecodeOptions::default())
	}
}
