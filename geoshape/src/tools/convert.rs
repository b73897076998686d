use super::{open_input, open_output};
use anyhow::{Context, Result};
use geoshape::{
	config::Config,
	geometry::{DimensionPolicy, Geometry, GeometryTrait, read_geojson_geometry, read_geojson_lines, write_geojson_geometry},
};
use std::{io::Write, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON geometry to read, use "-" for stdin
	#[arg()]
	input_file: String,

	/// where to write the result, defaults to stdout
	#[arg()]
	output_file: Option<String>,

	/// read newline-delimited geometries, one per line
	#[arg(long, short, display_order = 1)]
	lines: bool,

	/// YAML file with decode and output settings
	#[arg(long, short, value_name = "FILE", display_order = 1)]
	config: Option<PathBuf>,

	/// allow 2D and 3D positions within one geometry
	#[arg(long, display_order = 2)]
	permissive: bool,

	/// maximum nesting of geometry collections
	#[arg(long, value_name = "int", display_order = 2)]
	max_depth: Option<usize>,

	/// indent the written JSON
	#[arg(long, short, display_order = 3)]
	pretty: bool,

	/// drop the z value of every position
	#[arg(long, display_order = 3)]
	force_2d: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::info!("convert from {:?}", arguments.input_file);

	let config = get_config(arguments)?;
	let reader = open_input(&arguments.input_file)?;
	let mut writer = open_output(arguments.output_file.as_deref())?;

	if arguments.lines {
		if config.output.pretty {
			log::warn!("ignoring pretty output for newline-delimited geometries");
		}
		let mut count = 0;
		for geometry in read_geojson_lines(reader, config.decode.clone()) {
			let geometry = geometry.with_context(|| format!("failed to decode {:?}", arguments.input_file))?;
			write_geometry(&mut writer, &transform(geometry, arguments), false)?;
			count += 1;
		}
		log::debug!("converted {count} geometries");
	} else {
		let geometry = read_geojson_geometry(reader, &config.decode)
			.with_context(|| format!("failed to decode {:?}", arguments.input_file))?;
		write_geometry(&mut writer, &transform(geometry, arguments), config.output.pretty)?;
	}

	writer.flush()?;
	log::info!("finished converting");
	Ok(())
}

/// Loads the config file, if any, and applies the command line flags on top.
fn get_config(arguments: &Subcommand) -> Result<Config> {
	let mut config = Config::load(arguments.config.as_deref())?;
	if arguments.permissive {
		config.decode.dimensions = DimensionPolicy::Permissive;
	}
	if let Some(max_depth) = arguments.max_depth {
		config.decode.max_depth = max_depth;
	}
	if arguments.pretty {
		config.output.pretty = true;
	}
	log::trace!("using {config:?}");
	Ok(config)
}

fn transform(geometry: Geometry, arguments: &Subcommand) -> Geometry {
	if arguments.force_2d { geometry.to_2d() } else { geometry }
}

fn write_geometry(writer: &mut dyn Write, geometry: &Geometry, pretty: bool) -> Result<()> {
	write_geojson_geometry(&mut *writer, geometry, pretty).context("failed to write geometry")?;
	writeln!(writer)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use anyhow::Result;
	use std::fs;
	use tempfile::tempdir;

	#[test]
	fn test_local() -> Result<()> {
		let dir = tempdir()?;
		let output = dir.path().join("polygon.json");

		run_command(vec![
			"geoshape",
			"convert",
			"-q",
			"../testdata/polygon.geojson",
			output.to_str().unwrap(),
		])?;

		let text = fs::read_to_string(&output)?;
		assert!(text.starts_with(r#"{"coordinates":[[[100.0,0.0],"#));
		assert!(text.ends_with("\"type\":\"Polygon\"}\n"));
		Ok(())
	}

	#[test]
	fn test_flags() -> Result<()> {
		let dir = tempdir()?;
		let output = dir.path().join("collection.json");

		run_command(vec![
			"geoshape",
			"convert",
			"-q",
			"--pretty",
			"--force-2d",
			"--max-depth=2",
			"../testdata/collection.geojson",
			output.to_str().unwrap(),
		])?;

		let text = fs::read_to_string(&output)?;
		assert!(text.contains("\n  \"geometries\": ["));
		assert!(!text.contains("23.6"));
		Ok(())
	}

	#[test]
	fn test_lines() -> Result<()> {
		let dir = tempdir()?;
		let output = dir.path().join("lines.jsonl");

		run_command(vec![
			"geoshape",
			"convert",
			"-q",
			"--lines",
			"../testdata/geometries.geojsonl",
			output.to_str().unwrap(),
		])?;

		assert_eq!(fs::read_to_string(&output)?.lines().count(), 3);
		Ok(())
	}

	#[test]
	fn test_max_depth() {
		let error = run_command(vec![
			"geoshape",
			"convert",
			"-q",
			"--max-depth=1",
			"../testdata/collection.geojson",
		])
		.unwrap_err();
		assert_eq!(error.to_string(), "failed to decode \"../testdata/collection.geojson\"");
		assert_eq!(
			error.root_cause().to_string(),
			"geometry collections nested deeper than 1 levels"
		);
	}

	#[test]
	fn test_missing_file() {
		let error = run_command(vec!["geoshape", "convert", "-q", "../testdata/does_not_exist.geojson"]).unwrap_err();
		assert!(error.to_string().starts_with("failed to open input file"));
	}
}
