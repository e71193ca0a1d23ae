#![forbid(unsafe_code)]

//! Headless model of an interactive SVG time-series graph.
//!
//! The graph renderer emits plain SVG with a handful of data attributes. This crate reads that
//! markup into an owned [`GraphDocument`] and answers the two questions pointer handling needs:
//! - which value each series shows at a pixel column ([`GraphDocument::find_values`])
//! - which problems span a pixel column ([`GraphDocument::find_problems`])

pub mod document;
pub mod error;
pub mod geom;
pub mod lookup;
pub mod path;
pub mod problem;
pub mod time;
pub mod utils;

pub use document::{DataSet, GraphDocument, Marker, ProblemMarker, SeriesGeometry, SeriesKind};
pub use error::{Error, Result};
pub use lookup::DataPoint;
pub use problem::Problem;

#[cfg(test)]
mod tests;
