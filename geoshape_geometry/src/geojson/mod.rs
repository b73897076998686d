//! GeoJSON geometry codec.
//!
//! Decoding turns a `serde_json::Value` holding a GeoJSON geometry object into a [`crate::Geometry`],
//! encoding goes the other way. The codec is layered: [`decode_geometry`] reads the `type` tag
//! and hands `coordinates` to the polygon, line and position codecs, which recurse one array
//! level each. `read` and `write` add text and I/O helpers on top.

mod decoder;
mod dispatch;
mod error;
mod line;
mod multi;
mod options;
mod polygon;
mod position;
mod read;
mod write;

pub use dispatch::*;
pub use error::{GeoJsonError, GeoJsonResult};
pub use line::*;
pub use multi::*;
pub use options::*;
pub use polygon::*;
pub use position::*;
pub use read::*;
pub use write::*;
