use super::{DecodeOptions, GeoJsonError, GeoJsonResult, decode_geometry};
use crate::Geometry;
use serde_json::Value;
use std::io::{BufRead, Read};

/// Parses GeoJSON text holding one geometry object.
pub fn parse_geojson_geometry(json: &str, options: &DecodeOptions) -> GeoJsonResult<Geometry> {
	let value: Value = serde_json::from_str(json)?;
	decode_geometry(&value, options)
}

/// Reads one geometry object from `reader`.
pub fn read_geojson_geometry(reader: impl Read, options: &DecodeOptions) -> GeoJsonResult<Geometry> {
	let value: Value = serde_json::from_reader(reader)?;
	decode_geometry(&value, options)
}

fn process_line(line: std::io::Result<String>, index: usize, options: &DecodeOptions) -> Option<GeoJsonResult<Geometry>> {
	let result = match line {
		Ok(line) if line.trim().is_empty() => return None,
		Ok(line) => parse_geojson_geometry(&line, options),
		Err(e) => Err(GeoJsonError::from(e)),
	};
	Some(result.map_err(|e| GeoJsonError::Line {
		line: index + 1,
		source: Box::new(e),
	}))
}

/// Iterates over newline-delimited geometry objects. Blank lines are skipped.
///
/// Errors carry the 1-based number of the line they came from; iteration continues after them.
pub fn read_geojson_lines(reader: impl BufRead, options: DecodeOptions) -> impl Iterator<Item = GeoJsonResult<Geometry>> {
	reader
		.lines()
		.enumerate()
		.filter_map(move |(index, line)| process_line(line, index, &options))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeometryTrait;
	use std::io::{BufReader, Cursor};

	#[test]
	fn parse_point() {
		let geometry = parse_geojson_geometry(r#"{"type":"Point","coordinates":[1,2]}"#, &DecodeOptions::default()).unwrap();
		assert_eq!(geometry, Geometry::new_point(&[1.0, 2.0]));
	}

	#[test]
	fn parse_invalid_json() {
		let error = parse_geojson_geometry(r#"{"type":"Point","#, &DecodeOptions::default()).unwrap_err();
		assert!(matches!(error, GeoJsonError::Json(_)));
	}

	#[test]
	fn read_from_reader() {
		let json = r#"{"type":"MultiPoint","coordinates":[[1,2],[3,4]]}"#;
		let geometry = read_geojson_geometry(Cursor::new(json), &DecodeOptions::default()).unwrap();
		assert_eq!(geometry.type_name(), "MultiPoint");
		assert_eq!(geometry.num_points(), 2);
	}

	#[test]
	fn lines_skip_blanks() {
		let json = r#"{"type":"Point","coordinates":[1,1]}"#;
		let input = format!("{json}\n\n   \n{json}\n");
		let results: Vec<_> = read_geojson_lines(BufReader::new(Cursor::new(input)), DecodeOptions::default()).collect();
		assert_eq!(results.len(), 2);
		for result in results {
			assert_eq!(result.unwrap().type_name(), "Point");
		}
	}

	#[test]
	fn lines_report_line_number() {
		let input = "{\"type\":\"Point\",\"coordinates\":[1,1]}\n\n{\"type\":\"Point\"}\n{\"type\":\"Point\",\"coordinates\":[2,2]}";
		let results: Vec<_> = read_geojson_lines(Cursor::new(input), DecodeOptions::default()).collect();
		assert_eq!(results.len(), 3);
		assert!(results[0].is_ok());
		assert_eq!(
			results[1].as_ref().unwrap_err().to_string(),
			"line 3: missing field 'coordinates'"
		);
		assert!(results[2].is_ok());
	}
}
