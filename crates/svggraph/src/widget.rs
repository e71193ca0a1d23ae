use crate::hint::HintContent;
use svggraph_core::geom::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HintBoxId(pub u64);

/// The page's floating tooltip widget.
///
/// A pinned box shows a close affordance; when it is used the host reports
/// [`crate::GraphEvent::HintClosed`] to the owning graph, which then removes the box.
pub trait HintBoxWidget {
    fn create(&mut self, content: &HintContent, pinned: bool) -> HintBoxId;
    fn update(&mut self, id: HintBoxId, content: &HintContent);
    /// Rendered size of the box, used to keep it inside the viewport.
    fn size(&self, id: HintBoxId) -> Size;
    /// Moves the box so its top-left corner sits at `position` (graph element coordinates).
    fn move_to(&mut self, id: HintBoxId, position: Point);
    fn remove(&mut self, id: HintBoxId);
}
