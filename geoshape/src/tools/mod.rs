pub mod convert;
pub mod probe;

use anyhow::{Context, Result};
use std::{
	fs::File,
	io::{BufRead, BufReader, BufWriter, Write, stdin, stdout},
};

/// Opens `filename` for reading. `-` reads from stdin.
fn open_input(filename: &str) -> Result<Box<dyn BufRead>> {
	if filename == "-" {
		log::debug!("reading from stdin");
		return Ok(Box::new(stdin().lock()));
	}
	let file = File::open(filename).with_context(|| format!("failed to open input file {filename:?}"))?;
	Ok(Box::new(BufReader::new(file)))
}

/// Opens `filename` for writing, or stdout if there is none.
fn open_output(filename: Option<&str>) -> Result<Box<dyn Write>> {
	match filename {
		Some(filename) => {
			let file = File::create(filename).with_context(|| format!("failed to create output file {filename:?}"))?;
			Ok(Box::new(BufWriter::new(file)))
		}
		None => Ok(Box::new(stdout().lock())),
	}
}
