use serde::Deserialize;

/// How positions of different lengths inside one geometry are treated.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DimensionPolicy {
	/// The first position fixes the dimension of the whole geometry; any other length is an error.
	#[default]
	Strict,
	/// Every position keeps its own length.
	Permissive,
}

/// Settings for decoding. Encoding has none.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeOptions {
	/// Maximum number of nested `GeometryCollection` levels, counting the outermost one.
	pub max_depth: usize,

	/// Whether mixed 2D/3D positions within one geometry are rejected.
	pub dimensions: DimensionPolicy,
}

impl DecodeOptions {
	pub const DEFAULT_MAX_DEPTH: usize = 32;

	#[must_use]
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	#[must_use]
	pub fn with_dimensions(mut self, dimensions: DimensionPolicy) -> Self {
		self.dimensions = dimensions;
		self
	}

	#[must_use]
	pub fn permissive() -> Self {
		Self::default().with_dimensions(DimensionPolicy::Permissive)
	}
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: Self::DEFAULT_MAX_DEPTH,
			dimensions: DimensionPolicy::default(),
		}
	}
}
