#![forbid(unsafe_code)]

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;

/// Off-canvas coordinate used for markers and guides that are currently not shown.
pub const HIDDEN_COORD: f64 = -10.0;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn size(w: f64, h: f64) -> Size {
    euclid::size2(w, h)
}

pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
    euclid::rect(x, y, w, h)
}

pub fn hidden_point() -> Point {
    point(HIDDEN_COORD, HIDDEN_COORD)
}

/// Inclusive containment on all four edges.
///
/// `euclid::Rect::contains` excludes the right and bottom edges, while pointer hit regions of the
/// graph canvas include them.
pub fn contains_inclusive(r: &Rect, p: Point) -> bool {
    r.min_x() <= p.x && p.x <= r.max_x() && r.min_y() <= p.y && p.y <= r.max_y()
}

pub fn parse_number(raw: &str) -> Option<f64> {
    let v = raw.trim().trim_end_matches("px").parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}
