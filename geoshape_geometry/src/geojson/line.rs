//! Ring/line codec: an array of positions.

use super::{
	DecodeOptions, GeoJsonResult,
	decoder::{CoordinateDecoder, decode_elements},
	encode_position,
};
use crate::{Coordinates, LineStringGeometry, RingGeometry};
use serde_json::Value;

/// Decodes the `coordinates` of a `LineString`. An empty array is an empty line.
pub fn decode_line_string(value: &Value, options: &DecodeOptions) -> GeoJsonResult<LineStringGeometry> {
	CoordinateDecoder::new(options).line_string(value)
}

/// Encodes a line as an array of positions, in order.
pub fn encode_line_string(line: &LineStringGeometry) -> Value {
	encode_positions(&line.0)
}

/// Decodes one ring. Closure is not checked.
pub fn decode_ring(value: &Value, options: &DecodeOptions) -> GeoJsonResult<RingGeometry> {
	CoordinateDecoder::new(options).ring(value)
}

pub fn encode_ring(ring: &RingGeometry) -> Value {
	encode_positions(&ring.0)
}

fn encode_positions(positions: &[Coordinates]) -> Value {
	Value::Array(positions.iter().map(encode_position).collect())
}

impl CoordinateDecoder {
	pub fn positions(&mut self, value: &Value) -> GeoJsonResult<Vec<Coordinates>> {
		decode_elements(value, |item| self.position(item))
	}

	pub fn line_string(&mut self, value: &Value) -> GeoJsonResult<LineStringGeometry> {
		self.positions(value).map(LineStringGeometry)
	}

	pub fn ring(&mut self, value: &Value) -> GeoJsonResult<RingGeometry> {
		self.positions(value).map(RingGeometry)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, Dimension, GeoJsonError, GeometryTrait};
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn decode_keeps_order() {
		let line = decode_line_string(&json!([[100.0, 0.0], [101.0, 1.0]]), &DecodeOptions::default()).unwrap();
		assert_eq!(line.len(), 2);
		assert_eq!(line.0[0], Coordinates::new(100.0, 0.0));
		assert_eq!(line.0[1], Coordinates::new(101.0, 1.0));
	}

	#[test]
	fn decode_empty() {
		let line = decode_line_string(&json!([]), &DecodeOptions::default()).unwrap();
		assert!(line.is_empty());
	}

	#[test]
	fn decode_unclosed_ring() {
		let ring = decode_ring(&json!([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]), &DecodeOptions::default()).unwrap();
		assert_eq!(ring.len(), 3);
		assert!(!ring.is_closed());
	}

	#[test]
	fn bad_position_reports_index() {
		let error = decode_line_string(&json!([[0.0, 0.0], [1.0, 0.0], [1.0]]), &DecodeOptions::default()).unwrap_err();
		assert_eq!(error.path(), vec![2]);
		assert!(matches!(error.root_cause(), GeoJsonError::MalformedPosition(_)));
	}

	#[test]
	fn flat_array_is_shape_mismatch() {
		let error = decode_line_string(&json!([100.0, 0.0]), &DecodeOptions::default()).unwrap_err();
		assert_eq!(error.path(), vec![0]);
		assert!(matches!(error.root_cause(), GeoJsonError::ShapeMismatch { .. }));
	}

	#[test]
	fn mixed_dimensions() {
		let value = json!([[0.0, 0.0, 1.0], [1.0, 0.0]]);

		let error = decode_line_string(&value, &DecodeOptions::default()).unwrap_err();
		assert_eq!(error.path(), vec![1]);
		assert!(matches!(error.root_cause(), GeoJsonError::DimensionMismatch { .. }));

		let line = decode_line_string(&value, &DecodeOptions::permissive()).unwrap();
		assert_eq!(line.dimension(), Some(Dimension::Xyz));
		assert_eq!(line.0[1].dimension(), Dimension::Xy);
	}

	#[test]
	fn encode() {
		let line = LineStringGeometry::from(&[[100.0, 0.0, 0.0], [101.0, 1.0, 0.0]]);
		assert_eq!(encode_line_string(&line), json!([[100.0, 0.0, 0.0], [101.0, 1.0, 0.0]]));
		assert_eq!(encode_ring(&RingGeometry::default()), json!([]));
	}
}
