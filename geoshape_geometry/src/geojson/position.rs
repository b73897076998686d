//! Coordinate codec: one position `[x, y]` or `[x, y, z]`.

use super::{DecodeOptions, GeoJsonError, GeoJsonResult, decoder::CoordinateDecoder, error::kind_of};
use crate::{Coordinates, PointGeometry};
use serde_json::Value;

/// Decodes a single position.
///
/// The node must be an array of 2 or 3 numbers. An array in place of a number means the
/// coordinates are nested one level too deep and is reported as a shape mismatch.
pub fn decode_position(value: &Value) -> GeoJsonResult<Coordinates> {
	let items = match value {
		Value::Array(items) => items,
		Value::Number(_) => {
			return Err(GeoJsonError::ShapeMismatch {
				expected: "a position",
				found: "a number",
			});
		}
		other => {
			return Err(GeoJsonError::MalformedPosition(format!(
				"expected an array, found {}",
				kind_of(other)
			)));
		}
	};

	let mut numbers = Vec::with_capacity(items.len());
	for item in items {
		match item {
			Value::Number(n) => numbers.push(
				n.as_f64()
					.ok_or_else(|| GeoJsonError::MalformedPosition(format!("{n} is not a finite number")))?,
			),
			Value::Array(_) => {
				return Err(GeoJsonError::ShapeMismatch {
					expected: "a number",
					found: "an array",
				});
			}
			other => {
				return Err(GeoJsonError::MalformedPosition(format!(
					"expected a number, found {}",
					kind_of(other)
				)));
			}
		}
	}

	match numbers[..] {
		[x, y] => Ok(Coordinates::new(x, y)),
		[x, y, z] => Ok(Coordinates::new_3d(x, y, z)),
		_ => Err(GeoJsonError::MalformedPosition(format!(
			"expected 2 or 3 values, found {}",
			numbers.len()
		))),
	}
}

/// Encodes a position as an array of 2 or 3 numbers, depending on whether `z` is present.
///
/// Non-finite values are not checked; `serde_json` turns them into `null`.
pub fn encode_position(coordinates: &Coordinates) -> Value {
	Value::Array(coordinates.to_vec().into_iter().map(Value::from).collect())
}

/// Decodes the `coordinates` of a `Point`.
pub fn decode_point(value: &Value, options: &DecodeOptions) -> GeoJsonResult<PointGeometry> {
	CoordinateDecoder::new(options).point(value)
}

/// Encodes the `coordinates` of a `Point`.
pub fn encode_point(point: &PointGeometry) -> Value {
	encode_position(point.as_coord())
}

impl CoordinateDecoder {
	pub fn position(&mut self, value: &Value) -> GeoJsonResult<Coordinates> {
		let coordinates = decode_position(value)?;
		self.check(&coordinates)?;
		Ok(coordinates)
	}

	pub fn point(&mut self, value: &Value) -> GeoJsonResult<PointGeometry> {
		self.position(value).map(PointGeometry)
	}
}
