//! # geoshape
//!
//! Command line front end for the [`geoshape_geometry`] GeoJSON geometry codec.
//!
//! The binary offers two subcommands:
//! - `convert`: decode a geometry (or newline-delimited geometries) and write it back out,
//!   optionally indented or reduced to 2D.
//! - `probe`: print type, dimension, point count and bounds of a geometry.
//!
//! This library part holds the pieces shared by the binary and its tests.

pub mod config;

pub use geoshape_geometry as geometry;
