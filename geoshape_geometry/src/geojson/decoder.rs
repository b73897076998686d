use super::{DecodeOptions, DimensionPolicy, GeoJsonError, GeoJsonResult, error::kind_of};
use crate::{Coordinates, Dimension};
use serde_json::Value;

/// Walks the `coordinates` tree of one geometry.
///
/// Lives for exactly one geometry: under [`DimensionPolicy::Strict`] the first position it sees
/// fixes the dimension every later position is checked against. Collection members each get
/// their own decoder.
pub(crate) struct CoordinateDecoder {
	policy: DimensionPolicy,
	dimension: Option<Dimension>,
}

impl CoordinateDecoder {
	pub fn new(options: &DecodeOptions) -> Self {
		Self {
			policy: options.dimensions,
			dimension: None,
		}
	}

	/// Checks a freshly decoded position against the dimension of this geometry.
	pub fn check(&mut self, coordinates: &Coordinates) -> GeoJsonResult<()> {
		if self.policy == DimensionPolicy::Permissive {
			return Ok(());
		}
		let found = coordinates.dimension();
		match self.dimension {
			None => self.dimension = Some(found),
			Some(expected) if expected != found => return Err(GeoJsonError::DimensionMismatch { expected, found }),
			Some(_) => {}
		}
		Ok(())
	}
}

pub(crate) fn expect_array(value: &Value) -> GeoJsonResult<&Vec<Value>> {
	match value {
		Value::Array(items) => Ok(items),
		other => Err(GeoJsonError::ShapeMismatch {
			expected: "an array",
			found: kind_of(other),
		}),
	}
}

/// Decodes every element of an array with `f`, in order.
/// A failing element aborts the whole array and is reported with its index.
pub(crate) fn decode_elements<T>(
	value: &Value,
	mut f: impl FnMut(&Value) -> GeoJsonResult<T>,
) -> GeoJsonResult<Vec<T>> {
	expect_array(value)?
		.iter()
		.enumerate()
		.map(|(index, item)| f(item).map_err(|e| e.at_index(index)))
		.collect()
}
