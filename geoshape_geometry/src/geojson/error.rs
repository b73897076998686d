//! Defines [`GeoJsonError`], representing all errors returned by the GeoJSON codec.

use crate::Dimension;
use serde_json::Value;
use thiserror::Error;

/// Enum with all errors of the GeoJSON codec.
///
/// Decoding never produces partial results: the first error anywhere in the tree is returned,
/// wrapped in one [`GeoJsonError::Nested`] layer per array level it was found under.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoJsonError {
	/// A required member (`type`, `coordinates`, `geometries`) is absent.
	#[error("missing field '{0}'")]
	MissingField(&'static str),

	/// A member is present but holds the wrong kind of node.
	#[error("field '{field}' must be {expected}, found {found}")]
	WrongFieldKind {
		field: &'static str,
		expected: &'static str,
		found: &'static str,
	},

	/// The `type` member names no known geometry type.
	#[error("unknown geometry type {0}")]
	UnknownType(String),

	/// A position with other than 2 or 3 elements, or with non-numeric elements.
	#[error("malformed position: {0}")]
	MalformedPosition(String),

	/// The nesting under `coordinates` does not match the declared type.
	#[error("coordinates nested incorrectly: expected {expected}, found {found}")]
	ShapeMismatch {
		expected: &'static str,
		found: &'static str,
	},

	/// A position whose dimension differs from the first position of the same geometry.
	#[error("position is {found}, but the geometry is {expected}")]
	DimensionMismatch { expected: Dimension, found: Dimension },

	/// Geometry collections are nested deeper than allowed.
	#[error("geometry collections nested deeper than {0} levels")]
	DepthLimitExceeded(usize),

	/// An error inside an array element.
	#[error("at index {index}: {source}")]
	Nested {
		index: usize,
		source: Box<GeoJsonError>,
	},

	/// An error in one line of newline-delimited input. Lines are counted from 1.
	#[error("line {line}: {source}")]
	Line {
		line: usize,
		source: Box<GeoJsonError>,
	},

	/// The input is not valid JSON.
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// [std::io::Error]
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type GeoJsonResult<T> = std::result::Result<T, GeoJsonError>;

impl GeoJsonError {
	/// Wraps `self` as the error of array element `index`.
	#[must_use]
	pub fn at_index(self, index: usize) -> Self {
		GeoJsonError::Nested {
			index,
			source: Box::new(self),
		}
	}

	/// Returns the array indices leading to the failing node, outermost first.
	#[must_use]
	pub fn path(&self) -> Vec<usize> {
		let mut path = Vec::new();
		let mut error = self;
		loop {
			match error {
				GeoJsonError::Nested { index, source } => {
					path.push(*index);
					error = source.as_ref();
				}
				GeoJsonError::Line { source, .. } => error = source.as_ref(),
				_ => return path,
			}
		}
	}

	/// Returns the innermost error, skipping all `Nested` and `Line` layers.
	#[must_use]
	pub fn root_cause(&self) -> &GeoJsonError {
		match self {
			GeoJsonError::Nested { source, .. } | GeoJsonError::Line { source, .. } => source.root_cause(),
			_ => self,
		}
	}
}

/// Returns the kind of a JSON node as used in error messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Array(_) => "an array",
		Value::Bool(_) => "a boolean",
		Value::Null => "null",
		Value::Number(_) => "a number",
		Value::Object(_) => "an object",
		Value::String(_) => "a string",
	}
}
