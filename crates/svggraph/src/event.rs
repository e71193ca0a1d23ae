use svggraph_core::geom::{Point, point};

/// Pointer position as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// Position relative to the graph element.
    pub offset: Point,
    /// Position on the screen; only used to keep tooltips on screen.
    pub screen: Point,
}

impl Pointer {
    pub fn new(offset: Point, screen: Point) -> Self {
        Self { offset, screen }
    }

    /// A pointer whose screen position equals its element offset.
    pub fn at(x: f64, y: f64) -> Self {
        let p = point(x, y);
        Self { offset: p, screen: p }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Everything a bound graph reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphEvent {
    PointerMove(Pointer),
    PointerDown(Pointer),
    PointerUp(Pointer),
    PointerLeave,
    KeyDown(Key),
    /// The tooltip widget's close action fired on a pinned tooltip.
    HintClosed,
}
