use crate::config::GraphOptions;
use crate::sbox::Selection;
use svggraph_core::geom::Rect;

/// Presentation state of one bound graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    ShowingValueHint,
    ShowingProblemHint,
    /// A tooltip is pinned open; pointer moves no longer change it.
    FrozenHint,
    /// A range selection with non-zero width is being dragged.
    Boxing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphState {
    pub area: Rect,
    /// Seconds per pixel; zero when the page did not provide it.
    pub spp: f64,
    pub min_period: u64,
    pub hint_max_rows: usize,
    pub show_problems: bool,
    pub sbox_enabled: bool,
    pub mode: InteractionState,
    /// Pressed (and possibly dragged) range selection.
    pub selection: Option<Selection>,
}

impl GraphState {
    pub fn new(options: &GraphOptions) -> Self {
        Self {
            area: options.drawing_area(),
            spp: options.spp.unwrap_or(0.0),
            min_period: options.min_period,
            hint_max_rows: options.hint_max_rows,
            show_problems: options.show_problems,
            sbox_enabled: options.sbox,
            mode: InteractionState::Idle,
            selection: None,
        }
    }

    pub fn boxing(&self) -> bool {
        self.mode == InteractionState::Boxing
    }

    pub fn hint_frozen(&self) -> bool {
        self.mode == InteractionState::FrozenHint
    }
}
