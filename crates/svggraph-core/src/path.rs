//! SVG path-data normalization.
//!
//! Line and staircase series store their geometry as `d` attributes. Renderers (and some
//! browsers, when reading the attribute back) disagree on formatting: `M1,2 L3,4` vs
//! `M 1 2 L 3 4`, absolute vs relative commands. All of that is folded here into one sequence of
//! absolute command end points, one per command, so index arithmetic over the sequence stays
//! stable.

use crate::geom::{Point, point};
use svgtypes::{PathParser, PathSegment};

/// Returns the absolute end point of every command in `d`, in order.
///
/// `Z` yields the start of the closed subpath. Parsing stops at the first malformed command; the
/// points read so far are kept.
pub fn command_points(d: &str) -> Vec<Point> {
    let mut out = Vec::new();
    let mut cur = point(0.0, 0.0);
    let mut subpath_start = cur;

    for seg in PathParser::from(d) {
        let seg = match seg {
            Ok(seg) => seg,
            Err(err) => {
                tracing::debug!(%err, d, "stopping at malformed path data");
                break;
            }
        };

        let next = match seg {
            PathSegment::MoveTo { abs, x, y } => {
                let p = resolve(cur, abs, x, y);
                subpath_start = p;
                p
            }
            PathSegment::LineTo { abs, x, y }
            | PathSegment::SmoothQuadratic { abs, x, y }
            | PathSegment::CurveTo { abs, x, y, .. }
            | PathSegment::SmoothCurveTo { abs, x, y, .. }
            | PathSegment::Quadratic { abs, x, y, .. }
            | PathSegment::EllipticalArc { abs, x, y, .. } => resolve(cur, abs, x, y),
            PathSegment::HorizontalLineTo { abs, x } => {
                if abs {
                    point(x, cur.y)
                } else {
                    point(cur.x + x, cur.y)
                }
            }
            PathSegment::VerticalLineTo { abs, y } => {
                if abs {
                    point(cur.x, y)
                } else {
                    point(cur.x, cur.y + y)
                }
            }
            PathSegment::ClosePath { .. } => subpath_start,
        };

        out.push(next);
        cur = next;
    }

    out
}

fn resolve(cur: Point, abs: bool, x: f64, y: f64) -> Point {
    if abs {
        point(x, y)
    } else {
        point(cur.x + x, cur.y + y)
    }
}
