//! Multi-geometry codecs. Each wraps the point, line or polygon codec one array level deeper.

use super::{
	DecodeOptions, GeoJsonResult,
	decoder::{CoordinateDecoder, decode_elements},
	encode_line_string, encode_point, encode_polygon,
};
use crate::{MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry};
use serde_json::Value;

/// Decodes the `coordinates` of a `MultiPoint`: an array of positions.
pub fn decode_multi_point(value: &Value, options: &DecodeOptions) -> GeoJsonResult<MultiPointGeometry> {
	CoordinateDecoder::new(options).multi_point(value)
}

pub fn encode_multi_point(multi: &MultiPointGeometry) -> Value {
	Value::Array(multi.0.iter().map(encode_point).collect())
}

/// Decodes the `coordinates` of a `MultiLineString`: an array of position arrays.
pub fn decode_multi_line_string(value: &Value, options: &DecodeOptions) -> GeoJsonResult<MultiLineStringGeometry> {
	CoordinateDecoder::new(options).multi_line_string(value)
}

pub fn encode_multi_line_string(multi: &MultiLineStringGeometry) -> Value {
	Value::Array(multi.0.iter().map(encode_line_string).collect())
}

/// Decodes the `coordinates` of a `MultiPolygon`: an array of polygon coordinate arrays.
pub fn decode_multi_polygon(value: &Value, options: &DecodeOptions) -> GeoJsonResult<MultiPolygonGeometry> {
	CoordinateDecoder::new(options).multi_polygon(value)
}

pub fn encode_multi_polygon(multi: &MultiPolygonGeometry) -> Value {
	Value::Array(multi.0.iter().map(encode_polygon).collect())
}

impl CoordinateDecoder {
	pub fn multi_point(&mut self, value: &Value) -> GeoJsonResult<MultiPointGeometry> {
		decode_elements(value, |item| self.point(item)).map(MultiPointGeometry)
	}

	pub fn multi_line_string(&mut self, value: &Value) -> GeoJsonResult<MultiLineStringGeometry> {
		decode_elements(value, |item| self.line_string(item)).map(MultiLineStringGeometry)
	}

	pub fn multi_polygon(&mut self, value: &Value) -> GeoJsonResult<MultiPolygonGeometry> {
		decode_elements(value, |item| self.polygon(item)).map(MultiPolygonGeometry)
	}
}
