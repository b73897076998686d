use anyhow::{Context, Result};
use geoshape_geometry::DecodeOptions;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Settings for the `geoshape` command line tool, usually loaded from a YAML file.
///
/// ```yaml
/// decode:
///   max_depth: 8
///   dimensions: permissive
/// output:
///   pretty: true
/// ```
#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// How GeoJSON input is decoded
	#[serde(default)]
	pub decode: DecodeOptions,

	/// How GeoJSON output is written
	#[serde(default)]
	pub output: OutputConfig,
}

#[derive(Default, Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
	/// Indent the written JSON
	#[serde(default)]
	pub pretty: bool,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("failed to parse config file {path:?}"))
	}

	/// Loads the file at `path`, or returns the defaults when there is none.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		match path {
			Some(path) => Config::from_path(path),
			None => Ok(Config::default()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geoshape_geometry::DimensionPolicy;
	use pretty_assertions::assert_eq;

	#[test]
	fn parse_example_config() {
		let cfg = Config::from_path(Path::new("../testdata/config.yml")).unwrap();
		assert_eq!(
			cfg,
			Config {
				decode: DecodeOptions::default()
					.with_max_depth(8)
					.with_dimensions(DimensionPolicy::Permissive),
				output: OutputConfig { pretty: true }
			}
		);
	}

	#[test]
	fn parse_empty_config() {
		assert_eq!(Config::from_string("").unwrap(), Config::default());
	}

	#[test]
	fn parse_partial_config() {
		let cfg = Config::from_string("decode:\n  max_depth: 3\n").unwrap();
		assert_eq!(cfg.decode.max_depth, 3);
		assert_eq!(cfg.decode.dimensions, DimensionPolicy::Strict);
		assert!(!cfg.output.pretty);
	}

	#[test]
	fn parse_invalid_config() {
		assert!(Config::from_string("decode:\n  depth: 3\n").is_err());
		assert!(Config::from_string("output:\n  indent: 2\n").is_err());
		assert!(Config::from_string("decode:\n  dimensions: loose\n").is_err());
	}

	#[test]
	fn load_without_path() {
		assert_eq!(Config::load(None).unwrap(), Config::default());
	}

	#[test]
	fn missing_file() {
		let error = Config::from_path(Path::new("../testdata/does_not_exist.yml")).unwrap_err();
		assert!(error.to_string().starts_with("failed to open config file"));
	}
}
