//! Range selection ("sbox") arithmetic.
//!
//! Offsets are pixels measured from the left edge of the drawing area.

use crate::bus::RangeOffset;
use svggraph_core::time::format_duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub start: f64,
    /// `None` until the pointer has moved since the press.
    pub end: Option<f64>,
}

impl Selection {
    pub fn new(start: f64) -> Self {
        Self { start, end: None }
    }

    pub fn left(&self) -> f64 {
        self.end.map_or(self.start, |end| self.start.min(end))
    }

    pub fn right(&self) -> f64 {
        self.end.map_or(self.start, |end| self.start.max(end))
    }

    pub fn width(&self) -> f64 {
        self.right() - self.left()
    }

    pub fn elapsed_seconds(&self, spp: f64) -> u64 {
        (self.width() * spp).round() as u64
    }

    /// The range event a release would publish, if the selection is long enough and actually
    /// trims the displayed period.
    pub fn range_offset(&self, area_width: f64, spp: f64, min_period: u64) -> Option<RangeOffset> {
        let seconds = self.elapsed_seconds(spp);
        let from = self.left().floor() * spp;
        let to = (area_width - self.right()).floor() * spp;

        if seconds > min_period && (from > 0.0 || to > 0.0) {
            Some(RangeOffset {
                from_offset: from.max(0.0).ceil() as u64,
                to_offset: to.max(0.0).ceil() as u64,
            })
        } else {
            None
        }
    }
}

/// Text drawn inside the selection box.
pub fn selection_label(seconds: u64, min_period: u64) -> String {
    let mut label = format_duration(seconds);
    if seconds < min_period {
        label.push_str(&format!(" [min {}]", format_duration(min_period)));
    }
    label
}
