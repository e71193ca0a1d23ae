use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use svggraph_core::geom::{Rect, rect};

/// Drawing area of the graph canvas, in pixels relative to the graph element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dims {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Per-graph options as handed over by the page that embeds the graph.
///
/// Unknown keys are ignored; missing keys take the defaults below (`dims` has no useful default
/// and is rejected by [`GraphOptions::validate`] when absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Enables drag selection of a time range.
    pub sbox: bool,
    pub show_problems: bool,
    pub hint_max_rows: usize,
    /// Minimum selectable period in seconds.
    pub min_period: u64,
    pub dims: Dims,
    /// Seconds per pixel of the time axis.
    pub spp: Option<f64>,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            sbox: false,
            show_problems: true,
            hint_max_rows: 20,
            min_period: 60,
            dims: Dims::default(),
            spp: None,
        }
    }
}

impl GraphOptions {
    pub fn from_value(value: Value) -> Result<Self> {
        let options: Self = serde_json::from_value(value)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(raw)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dims == Dims::default() {
            return Err(Error::InvalidDimensions {
                reason: "`dims` is missing or empty".to_string(),
            });
        }
        let Dims { x, y, w, h } = self.dims;
        if ![x, y, w, h].iter().all(|v| v.is_finite()) {
            return Err(Error::InvalidDimensions {
                reason: "coordinates must be finite".to_string(),
            });
        }
        if w <= 0.0 || h <= 0.0 {
            return Err(Error::InvalidDimensions {
                reason: format!("width and height must be positive (got {w}x{h})"),
            });
        }
        if let Some(spp) = self.spp {
            if !spp.is_finite() || spp < 0.0 {
                return Err(Error::InvalidOptionValue {
                    key: "spp",
                    reason: format!("must be a non-negative number (got {spp})"),
                });
            }
        }
        Ok(())
    }

    pub fn drawing_area(&self) -> Rect {
        rect(self.dims.x, self.dims.y, self.dims.w, self.dims.h)
    }
}
