//! Owned model of the interactive parts of a rendered graph.
//!
//! The renderer tags everything the pointer logic needs with attributes: series groups carry
//! `data-set`, `data-metric` and `data-color`; point series hold `<circle>` markers with a
//! `label`; line series hold `path.svg-graph-line` elements whose `data-label` lists the values;
//! problem rectangles carry a JSON `data-info` payload. Missing or malformed attributes are
//! tolerated: the affected piece simply never matches a lookup.

use crate::geom::{Point, parse_number, point};
use crate::path::command_points;
use crate::problem::Problem;
use crate::{Error, Result};

pub const POINT_HIGHLIGHT_CLASS: &str = "svg-point-highlight";
pub const GRAPH_LINE_CLASS: &str = "svg-graph-line";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Points,
    Line,
    Staircase,
    /// A `data-set` value this crate does not know how to query.
    Other,
}

impl SeriesKind {
    pub fn from_attr(raw: &str) -> Self {
        match raw.trim() {
            "points" => Self::Points,
            "line" => Self::Line,
            "staircase" => Self::Staircase,
            _ => Self::Other,
        }
    }

    /// Maps a command index of the concatenated path data to an index into the value labels.
    ///
    /// Staircase paths draw every logical value with two commands.
    pub fn label_index(self, command_index: usize) -> usize {
        match self {
            Self::Staircase => command_index.div_ceil(2),
            _ => command_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub center: Point,
    pub radius: f64,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeriesGeometry {
    Markers(Vec<Marker>),
    Path {
        points: Vec<Point>,
        labels: Vec<String>,
        stroke_width: Option<f64>,
    },
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    pub kind: SeriesKind,
    pub metric: String,
    pub color: String,
    pub geometry: SeriesGeometry,
}

impl DataSet {
    /// Pixel tolerance around a matched point used to decide whether the pointer is exactly over
    /// it.
    pub fn tolerance(&self) -> f64 {
        match &self.geometry {
            SeriesGeometry::Markers(markers) => markers.first().map_or(0.0, |m| m.radius),
            SeriesGeometry::Path { stroke_width, .. } => stroke_width.unwrap_or(1.0),
            SeriesGeometry::Empty => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProblemMarker {
    pub x: f64,
    pub width: f64,
    /// `None` when the payload is missing or is not valid JSON.
    pub info: Option<Problem>,
}

impl ProblemMarker {
    /// Strict containment: a column on either edge does not overlap the marker.
    pub fn spans(&self, x: f64) -> bool {
        x > self.x && self.x + self.width > x
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphDocument {
    pub data_sets: Vec<DataSet>,
    pub problems: Vec<ProblemMarker>,
}

impl GraphDocument {
    pub fn parse(svg: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(svg).map_err(Error::from)?;
        Ok(Self::from_node(doc.root()))
    }

    /// Reads every series group and problem marker below `root`, in document order.
    pub fn from_node(root: roxmltree::Node<'_, '_>) -> Self {
        let mut out = Self::default();
        for node in root.descendants().filter(|n| n.is_element()) {
            if let Some(kind) = node.attribute("data-set") {
                out.data_sets.push(read_data_set(node, SeriesKind::from_attr(kind)));
            }
            if let Some(info) = node.attribute("data-info") {
                out.problems.push(read_problem_marker(node, info));
            }
        }
        tracing::debug!(
            data_sets = out.data_sets.len(),
            problems = out.problems.len(),
            "read graph document"
        );
        out
    }
}

pub(crate) fn has_class(node: roxmltree::Node<'_, '_>, class: &str) -> bool {
    node.attribute("class")
        .is_some_and(|c| c.split_ascii_whitespace().any(|c| c == class))
}

fn read_data_set(node: roxmltree::Node<'_, '_>, kind: SeriesKind) -> DataSet {
    let geometry = match kind {
        SeriesKind::Points => SeriesGeometry::Markers(read_markers(node)),
        SeriesKind::Line | SeriesKind::Staircase => read_path_geometry(node),
        SeriesKind::Other => SeriesGeometry::Empty,
    };
    DataSet {
        kind,
        metric: node.attribute("data-metric").unwrap_or_default().to_string(),
        color: node.attribute("data-color").unwrap_or_default().to_string(),
        geometry,
    }
}

fn read_markers(group: roxmltree::Node<'_, '_>) -> Vec<Marker> {
    group
        .descendants()
        .filter(|n| n.has_tag_name("circle") && !has_class(*n, POINT_HIGHLIGHT_CLASS))
        .filter_map(|n| {
            let cx = n.attribute("cx").and_then(parse_number)?;
            let cy = n.attribute("cy").and_then(parse_number).unwrap_or(0.0);
            Some(Marker {
                center: point(cx, cy),
                radius: n.attribute("r").and_then(parse_number).unwrap_or(0.0),
                label: n.attribute("label").map(str::to_string),
            })
        })
        .collect()
}

fn read_path_geometry(group: roxmltree::Node<'_, '_>) -> SeriesGeometry {
    let mut points = Vec::new();
    let mut labels: Vec<&str> = Vec::new();
    let mut stroke_width = None;

    for path in group
        .descendants()
        .filter(|n| n.is_element() && has_class(*n, GRAPH_LINE_CLASS))
    {
        if stroke_width.is_none() {
            stroke_width = read_stroke_width(path).or_else(|| read_stroke_width(group));
        }
        points.extend(command_points(path.attribute("d").unwrap_or_default()));
        labels.push(path.attribute("data-label").unwrap_or_default());
    }

    SeriesGeometry::Path {
        points,
        labels: labels.join(",").split(',').map(str::to_string).collect(),
        stroke_width,
    }
}

fn read_stroke_width(node: roxmltree::Node<'_, '_>) -> Option<f64> {
    if let Some(w) = node.attribute("stroke-width").and_then(parse_length) {
        return Some(w);
    }
    node.attribute("style")?
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .find(|(name, _)| name.trim() == "stroke-width")
        .and_then(|(_, value)| parse_length(value))
}

fn parse_length(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<svgtypes::Length>()
        .ok()
        .map(|l| l.number)
        .filter(|n| n.is_finite())
}

fn read_problem_marker(node: roxmltree::Node<'_, '_>, info: &str) -> ProblemMarker {
    let info = match Problem::from_json(info) {
        Ok(p) => Some(p),
        Err(err) => {
            tracing::warn!(%err, "ignoring problem marker with malformed payload");
            None
        }
    };
    ProblemMarker {
        x: node.attribute("x").and_then(parse_number).unwrap_or(0.0),
        width: node.attribute("width").and_then(parse_number).unwrap_or(0.0),
        info,
    }
}
