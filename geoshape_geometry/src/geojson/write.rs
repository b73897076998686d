use super::{GeoJsonResult, encode_geometry};
use crate::Geometry;
use std::io::Write;

/// Renders a geometry as GeoJSON text, compact or indented.
#[must_use]
pub fn to_geojson_string(geometry: &Geometry, pretty: bool) -> String {
	let value = encode_geometry(geometry);
	if pretty { format!("{value:#}") } else { value.to_string() }
}

/// Writes a geometry as GeoJSON text to `writer`.
pub fn write_geojson_geometry(writer: impl Write, geometry: &Geometry, pretty: bool) -> GeoJsonResult<()> {
	let value = encode_geometry(geometry);
	if pretty {
		serde_json::to_writer_pretty(writer, &value)?;
	} else {
		serde_json::to_writer(writer, &value)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn compact() {
		let geometry = Geometry::new_line_string(&[[100.0, 0.0], [101.0, 1.0]]);
		assert_eq!(
			to_geojson_string(&geometry, false),
			r#"{"coordinates":[[100.0,0.0],[101.0,1.0]],"type":"LineString"}"#
		);
	}

	#[test]
	fn pretty() {
		let text = to_geojson_string(&Geometry::new_point(&[1.5, 2.5]), true);
		assert_eq!(
			text,
			"{\n  \"coordinates\": [\n    1.5,\n    2.5\n  ],\n  \"type\": \"Point\"\n}"
		);
	}

	#[test]
	fn writer_matches_string() {
		let geometry = Geometry::new_example();
		let mut buffer = Vec::new();
		write_geojson_geometry(&mut buffer, &geometry, false).unwrap();
		assert_eq!(String::from_utf8(buffer).unwrap(), to_geojson_string(&geometry, false));
	}
}
