use super::open_input;
use anyhow::{Context, Result};
use geoshape::geometry::{
	CompositeGeometryTrait, DecodeOptions, DimensionPolicy, Geometry, GeometryTrait, read_geojson_geometry,
};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON geometry to inspect, use "-" for stdin
	#[arg(required = true)]
	input_file: String,

	/// allow 2D and 3D positions within one geometry
	#[arg(long)]
	permissive: bool,

	/// maximum nesting of geometry collections
	#[arg(long, value_name = "int")]
	max_depth: Option<usize>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::info!("probe {:?}", arguments.input_file);

	let mut options = DecodeOptions::default();
	if arguments.permissive {
		options = options.with_dimensions(DimensionPolicy::Permissive);
	}
	if let Some(max_depth) = arguments.max_depth {
		options = options.with_max_depth(max_depth);
	}

	let reader = open_input(&arguments.input_file)?;
	let geometry = read_geojson_geometry(reader, &options)
		.with_context(|| format!("failed to decode {:?}", arguments.input_file))?;

	print!("{}", describe(&geometry));
	Ok(())
}

/// Renders the summary printed by `probe`.
fn describe(geometry: &Geometry) -> String {
	let mut lines = vec![
		format!("type:      {}", geometry.type_name()),
		format!("dimension: {}", format_dimension(geometry)),
		format!("points:    {}", geometry.num_points()),
		format!("bounds:    {}", format_bounds(geometry)),
	];

	if let Geometry::GeometryCollection(collection) = geometry {
		lines.push(format!("members:   {}", collection.len()));
		for (index, member) in collection.as_vec().iter().enumerate() {
			lines.push(format!(
				"  {index}: {} {} with {} points",
				member.type_name(),
				format_dimension(member),
				member.num_points()
			));
		}
	}

	lines.iter().map(|line| format!("{line}\n")).collect()
}

fn format_dimension(geometry: &Geometry) -> String {
	match geometry.dimension() {
		Some(dimension) if geometry.is_uniform() => dimension.to_string(),
		Some(_) => String::from("mixed"),
		None => String::from("empty"),
	}
}

fn format_bounds(geometry: &Geometry) -> String {
	match geometry.compute_bounds() {
		Some([x_min, y_min, x_max, y_max]) => format!("[{x_min}, {y_min}, {x_max}, {y_max}]"),
		None => String::from("none"),
	}
}
