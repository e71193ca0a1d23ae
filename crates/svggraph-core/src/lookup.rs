//! Pixel-column queries: nearest past value per series and problems spanning a column.

use crate::document::{DataSet, GraphDocument, SeriesGeometry};
use crate::geom::{Point, hidden_point};
use crate::problem::Problem;

/// The value a series had at (or most recently before) a queried pixel column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint<'a> {
    /// Index of the series in [`GraphDocument::data_sets`].
    pub series: usize,
    pub data_set: &'a DataSet,
    /// Position of the matched marker; [`hidden_point`] when there is no value.
    pub position: Point,
    pub value: Option<&'a str>,
}

impl DataPoint<'_> {
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Whether `pointer` lies strictly inside the tolerance box around the matched point.
    pub fn is_hovered(&self, pointer: Point) -> bool {
        if !self.has_value() {
            return false;
        }
        let t = self.data_set.tolerance();
        self.position.x + t > pointer.x
            && pointer.x > self.position.x - t
            && self.position.y + t > pointer.y
            && pointer.y > self.position.y - t
    }
}

impl GraphDocument {
    /// Returns one entry per series, in document order.
    pub fn find_values(&self, x: f64) -> Vec<DataPoint<'_>> {
        self.data_sets
            .iter()
            .enumerate()
            .map(|(series, data_set)| {
                let (position, value) =
                    nearest_past(data_set, x).unwrap_or((hidden_point(), None));
                DataPoint {
                    series,
                    data_set,
                    position,
                    value,
                }
            })
            .collect()
    }

    /// Returns the payload of every problem marker strictly spanning `x`, in document order.
    pub fn find_problems(&self, x: f64) -> Vec<&Problem> {
        self.problems
            .iter()
            .filter(|m| m.spans(x))
            .filter_map(|m| m.info.as_ref())
            .collect()
    }
}

fn nearest_past(data_set: &DataSet, x: f64) -> Option<(Point, Option<&str>)> {
    match &data_set.geometry {
        SeriesGeometry::Markers(markers) => {
            let marker = markers.iter().rev().find(|m| m.center.x.trunc() <= x)?;
            Some((marker.center, marker.label.as_deref()))
        }
        SeriesGeometry::Path { points, labels, .. } => {
            let (index, p) = points
                .iter()
                .enumerate()
                .rev()
                .find(|(_, p)| p.x.trunc() <= x)?;
            let label = labels
                .get(data_set.kind.label_index(index))
                .map(String::as_str);
            Some((*p, label))
        }
        SeriesGeometry::Empty => None,
    }
}
