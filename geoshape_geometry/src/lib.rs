//! Typed geometry values and their GeoJSON geometry encoding.
//!
//! - the value model, from [`Coordinates`] up to [`GeometryCollection`].
//! - [`geojson`]: converts between that model and `serde_json::Value` trees holding GeoJSON
//!   geometry objects, plus text helpers on top.

mod geo;
pub mod geojson;

pub use geo::*;
pub use geojson::*;
