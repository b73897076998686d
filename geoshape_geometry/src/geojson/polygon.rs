//! Polygon codec: an array of rings, shell first.

use super::{
	DecodeOptions, GeoJsonResult,
	decoder::{CoordinateDecoder, decode_elements},
	encode_ring,
};
use crate::PolygonGeometry;
use serde_json::Value;

/// Decodes the `coordinates` of a `Polygon`. Zero rings give a degenerate, empty polygon.
pub fn decode_polygon(value: &Value, options: &DecodeOptions) -> GeoJsonResult<PolygonGeometry> {
	CoordinateDecoder::new(options).polygon(value)
}

pub fn encode_polygon(polygon: &PolygonGeometry) -> Value {
	Value::Array(polygon.0.iter().map(encode_ring).collect())
}

impl CoordinateDecoder {
	pub fn polygon(&mut self, value: &Value) -> GeoJsonResult<PolygonGeometry> {
		decode_elements(value, |item| self.ring(item)).map(PolygonGeometry)
	}
}
