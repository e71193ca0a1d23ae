//! Visual state the host mirrors onto the graph's own SVG nodes: the helper line
//! (`.svg-helper`), highlighted markers (`.svg-point-highlight`) and the selection box
//! (`.svg-graph-selection`, `.svg-graph-selection-text`).

use svggraph_core::geom::{HIDDEN_COORD, Point, Rect, hidden_point};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelperLine {
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionBox {
    pub rect: Rect,
    pub label: String,
    pub label_anchor: Point,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Overlay {
    pub helper: Option<HelperLine>,
    /// One highlight position per series; hidden highlights sit at the off-canvas point.
    pub highlights: Vec<Point>,
    pub selection: Option<SelectionBox>,
}

impl Overlay {
    pub fn new(series: usize) -> Self {
        Self {
            helper: None,
            highlights: vec![hidden_point(); series],
            selection: None,
        }
    }

    pub fn hide_helper(&mut self) {
        self.helper = None;
        self.highlights.fill(hidden_point());
    }

    /// `x1`/`x2` of the helper line as written to the SVG.
    pub fn helper_x(&self) -> f64 {
        self.helper.map_or(HIDDEN_COORD, |h| h.x)
    }

    pub fn visible_highlights(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.highlights
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, p)| *p != hidden_point())
    }
}
