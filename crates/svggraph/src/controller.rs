//! Pointer and keyboard handling for one bound graph.

use crate::bus::{EventBus, RANGE_OFFSET_TOPIC};
use crate::config::GraphOptions;
use crate::event::{GraphEvent, Key, Pointer};
use crate::hint::{
    HintContent, HintKind, PROBLEM_BAND_HEIGHT, place_hint, problems_hint, values_hint,
};
use crate::overlay::{HelperLine, Overlay, SelectionBox};
use crate::sbox::{Selection, selection_label};
use crate::state::{GraphState, InteractionState};
use crate::widget::{HintBoxId, HintBoxWidget};
use crate::Result;
use std::rc::Rc;
use svggraph_core::GraphDocument;
use svggraph_core::geom::{Size, contains_inclusive, hidden_point, point, rect, size};

/// Label offset inside the selection box.
const SELECTION_LABEL_DX: f64 = 5.0;
const SELECTION_LABEL_DY: f64 = 15.0;

#[derive(Debug, Clone, PartialEq)]
struct ActiveHint {
    id: HintBoxId,
    content: HintContent,
    pinned: bool,
}

pub struct GraphController {
    document: GraphDocument,
    state: GraphState,
    overlay: Overlay,
    hint: Option<ActiveHint>,
    viewport: Size,
    widget: Box<dyn HintBoxWidget>,
    bus: Rc<dyn EventBus>,
}

impl std::fmt::Debug for GraphController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphController")
            .field("state", &self.state)
            .field("overlay", &self.overlay)
            .field("hint", &self.hint)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl GraphController {
    pub fn new(
        document: GraphDocument,
        options: &GraphOptions,
        widget: Box<dyn HintBoxWidget>,
        bus: Rc<dyn EventBus>,
    ) -> Result<Self> {
        options.validate()?;
        if options.sbox && options.spp.is_none() {
            tracing::warn!(
                "range selection enabled without seconds per pixel; selections will never publish"
            );
        }
        let overlay = Overlay::new(document.data_sets.len());
        Ok(Self {
            document,
            state: GraphState::new(options),
            overlay,
            hint: None,
            viewport: size(f64::INFINITY, f64::INFINITY),
            widget,
            bus,
        })
    }

    pub fn document(&self) -> &GraphDocument {
        &self.document
    }

    pub fn state(&self) -> &GraphState {
        &self.state
    }

    pub fn interaction(&self) -> InteractionState {
        self.state.mode
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Content of the live tooltip, if any.
    pub fn hint(&self) -> Option<&HintContent> {
        self.hint.as_ref().map(|h| &h.content)
    }

    pub fn hint_id(&self) -> Option<HintBoxId> {
        self.hint.as_ref().map(|h| h.id)
    }

    /// Area tooltips must stay inside (page width, screen height).
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Swaps in freshly rendered markup. Transient presentation state is dropped.
    pub fn replace_document(&mut self, document: GraphDocument) {
        self.reset();
        self.overlay = Overlay::new(document.data_sets.len());
        self.document = document;
    }

    /// Turns range selection off, cancelling a selection in progress.
    pub fn disable_sbox(&mut self) {
        self.cancel_selection();
        self.state.sbox_enabled = false;
    }

    /// Single entry point for everything the host forwards to this graph.
    pub fn dispatch(&mut self, event: GraphEvent) {
        let before = self.state.mode;
        match event {
            GraphEvent::PointerMove(p) => self.on_pointer_move(p),
            GraphEvent::PointerDown(p) => self.on_pointer_down(p),
            GraphEvent::PointerUp(p) => self.on_pointer_up(p),
            GraphEvent::PointerLeave => self.reset(),
            GraphEvent::KeyDown(Key::Escape) => self.cancel_selection(),
            GraphEvent::KeyDown(Key::Other) => {}
            GraphEvent::HintClosed => self.on_hint_closed(),
        }
        if before != self.state.mode {
            tracing::debug!(from = ?before, to = ?self.state.mode, "graph interaction changed");
        }
    }

    fn on_pointer_move(&mut self, p: Pointer) {
        if self.state.selection.is_some() && self.drag_selection(p) {
            return;
        }
        if self.state.boxing() {
            self.overlay.hide_helper();
            return;
        }
        self.show_hint(p);
    }

    /// Updates a pressed selection. Returns `true` when the move was consumed by the drag.
    fn drag_selection(&mut self, p: Pointer) -> bool {
        let area = self.state.area;
        let rel = p.offset.x - area.min_x();
        if !(rel > 0.0 && p.offset.x <= area.max_x()) {
            return self.state.boxing();
        }

        let Some(selection) = self.state.selection.as_mut() else {
            return false;
        };
        let end = rel.min(area.width());
        if end == selection.start {
            self.cancel_selection();
            return false;
        }
        selection.end = Some(end);
        let selection = *selection;

        if !self.state.boxing() {
            self.remove_hint();
            self.overlay.hide_helper();
            self.state.mode = InteractionState::Boxing;
        }

        let seconds = selection.elapsed_seconds(self.state.spp);
        let left = selection.left() + area.min_x();
        self.overlay.selection = Some(SelectionBox {
            rect: rect(left, area.min_y(), selection.width(), area.height()),
            label: selection_label(seconds, self.state.min_period),
            label_anchor: point(left + SELECTION_LABEL_DX, area.min_y() + SELECTION_LABEL_DY),
        });
        true
    }

    fn on_pointer_down(&mut self, p: Pointer) {
        if !self.state.sbox_enabled || !contains_inclusive(&self.state.area, p.offset) {
            return;
        }
        let start = (p.offset.x - self.state.area.min_x()).max(0.0);
        tracing::trace!(start, "range selection pressed");
        self.state.selection = Some(Selection::new(start));
    }

    fn on_pointer_up(&mut self, p: Pointer) {
        match self.state.mode {
            InteractionState::Boxing => self.commit_selection(p),
            InteractionState::FrozenHint => {
                self.state.selection = None;
                self.relocate_pinned_hint(p);
            }
            InteractionState::ShowingValueHint | InteractionState::ShowingProblemHint => {
                self.state.selection = None;
                self.freeze_hint(p);
            }
            InteractionState::Idle => self.state.selection = None,
        }
    }

    fn on_hint_closed(&mut self) {
        if !self.state.hint_frozen() {
            return;
        }
        self.remove_hint();
        self.state.mode = InteractionState::Idle;
    }

    /// Pointer left the graph: drop tooltip (pinned or not), selection and helper line.
    fn reset(&mut self) {
        self.remove_hint();
        self.state.selection = None;
        self.overlay.selection = None;
        self.overlay.hide_helper();
        self.state.mode = InteractionState::Idle;
    }

    fn cancel_selection(&mut self) {
        if self.state.selection.take().is_none() {
            return;
        }
        self.overlay.selection = None;
        if self.state.boxing() {
            self.state.mode = InteractionState::Idle;
        }
        tracing::trace!("range selection cancelled");
    }

    fn commit_selection(&mut self, p: Pointer) {
        let area = self.state.area;
        self.overlay.selection = None;
        self.state.mode = InteractionState::Idle;
        let Some(mut selection) = self.state.selection.take() else {
            return;
        };
        selection.end = Some((p.offset.x - area.min_x()).clamp(0.0, area.width()));

        let Some(offset) =
            selection.range_offset(area.width(), self.state.spp, self.state.min_period)
        else {
            tracing::debug!(
                seconds = selection.elapsed_seconds(self.state.spp),
                min_period = self.state.min_period,
                "range selection discarded"
            );
            return;
        };

        tracing::debug!(
            from_offset = offset.from_offset,
            to_offset = offset.to_offset,
            "range selected"
        );
        match serde_json::to_value(offset) {
            Ok(payload) => self.bus.publish(RANGE_OFFSET_TOPIC, &payload),
            Err(err) => tracing::warn!(%err, "failed to encode range selection"),
        }
    }

    fn show_hint(&mut self, p: Pointer) {
        let area = self.state.area;
        let (x, y) = (p.offset.x, p.offset.y);
        let frozen = self.state.hint_frozen();
        let in_columns = area.min_x() <= x && x <= area.max_x();

        let content = if self.state.show_problems
            && !frozen
            && in_columns
            && area.max_y() <= y
            && y <= area.max_y() + PROBLEM_BAND_HEIGHT
        {
            self.overlay.hide_helper();
            problems_hint(&self.document.find_problems(x), self.state.hint_max_rows)
        } else if in_columns && area.min_y() <= y && y <= area.max_y() {
            self.overlay.helper = Some(HelperLine {
                x,
                y1: area.min_y(),
                y2: area.max_y(),
            });

            let points = self.document.find_values(x);
            let focus = if frozen {
                None
            } else {
                points.iter().position(|dp| dp.is_hovered(p.offset))
            };
            for (i, dp) in points.iter().enumerate() {
                let shown = focus.is_none_or(|f| f == i);
                if let Some(slot) = self.overlay.highlights.get_mut(i) {
                    *slot = if shown { dp.position } else { hidden_point() };
                }
            }

            if frozen {
                None
            } else {
                values_hint(&points, focus, self.state.hint_max_rows)
            }
        } else {
            self.overlay.hide_helper();
            None
        };

        match content {
            Some(content) => {
                let kind = content.kind();
                self.present_hint(content, p);
                if !frozen {
                    self.state.mode = match kind {
                        HintKind::Values => InteractionState::ShowingValueHint,
                        HintKind::Problems => InteractionState::ShowingProblemHint,
                    };
                }
            }
            None if !frozen => {
                self.remove_hint();
                self.state.mode = InteractionState::Idle;
            }
            None => {}
        }
    }

    fn present_hint(&mut self, content: HintContent, p: Pointer) {
        match self.hint.as_mut() {
            Some(hint) => {
                self.widget.update(hint.id, &content);
                hint.content = content;
            }
            None => {
                let id = self.widget.create(&content, false);
                self.hint = Some(ActiveHint {
                    id,
                    content,
                    pinned: false,
                });
            }
        }
        self.reposition_hint(p);
    }

    /// Pins the current tooltip at `p`, rebuilding it with a close affordance.
    fn freeze_hint(&mut self, p: Pointer) {
        let Some(hint) = self.hint.take() else {
            return;
        };
        let hint = if hint.pinned {
            hint
        } else {
            self.widget.remove(hint.id);
            let id = self.widget.create(&hint.content, true);
            ActiveHint {
                id,
                content: hint.content,
                pinned: true,
            }
        };
        self.hint = Some(hint);
        self.state.mode = InteractionState::FrozenHint;
        self.reposition_hint(p);
    }

    /// A click while pinned: recompute the tooltip for the click position and pin it there.
    fn relocate_pinned_hint(&mut self, p: Pointer) {
        self.state.mode = InteractionState::Idle;
        self.show_hint(p);
        if self.hint.is_some() {
            self.freeze_hint(p);
        }
    }

    fn reposition_hint(&mut self, p: Pointer) {
        let Some(hint) = self.hint.as_ref() else {
            return;
        };
        let box_size = self.widget.size(hint.id);
        let position = place_hint(p.offset, p.screen, box_size, self.viewport);
        self.widget.move_to(hint.id, position);
    }

    fn remove_hint(&mut self) {
        if let Some(hint) = self.hint.take() {
            self.widget.remove(hint.id);
        }
    }
}
