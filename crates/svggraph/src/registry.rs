use crate::bus::EventBus;
use crate::config::GraphOptions;
use crate::controller::GraphController;
use crate::event::GraphEvent;
use crate::widget::HintBoxWidget;
use crate::{Error, Result};
use indexmap::IndexMap;
use std::rc::Rc;
use svggraph_core::GraphDocument;

/// Bound graphs of a page, keyed by element id.
#[derive(Debug, Default)]
pub struct GraphRegistry {
    graphs: IndexMap<String, GraphController>,
}

impl GraphRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `controller` to `id`. A graph already bound to the element is reset and returned.
    pub fn bind(
        &mut self,
        id: impl Into<String>,
        controller: GraphController,
    ) -> Option<GraphController> {
        let id = id.into();
        tracing::debug!(id, "binding graph");
        let mut previous = self.graphs.insert(id, controller)?;
        previous.dispatch(GraphEvent::PointerLeave);
        Some(previous)
    }

    /// Parses `svg` and `options` and binds a new controller to `id`.
    pub fn bind_svg(
        &mut self,
        id: impl Into<String>,
        svg: &str,
        options: serde_json::Value,
        widget: Box<dyn HintBoxWidget>,
        bus: Rc<dyn EventBus>,
    ) -> Result<()> {
        let document = GraphDocument::parse(svg)?;
        let options = GraphOptions::from_value(options)?;
        let controller = GraphController::new(document, &options, widget, bus)?;
        self.bind(id, controller);
        Ok(())
    }

    pub fn dispatch(&mut self, id: &str, event: GraphEvent) -> Result<()> {
        self.get_mut(id)?.dispatch(event);
        Ok(())
    }

    pub fn disable_sbox(&mut self, id: &str) -> Result<()> {
        self.get_mut(id)?.disable_sbox();
        Ok(())
    }

    /// Unbinds the graph, clearing whatever it still shows.
    pub fn detach(&mut self, id: &str) -> Option<GraphController> {
        let mut controller = self.graphs.shift_remove(id)?;
        controller.dispatch(GraphEvent::PointerLeave);
        tracing::debug!(id, "detached graph");
        Some(controller)
    }

    pub fn get(&self, id: &str) -> Option<&GraphController> {
        self.graphs.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut GraphController> {
        self.graphs.get_mut(id).ok_or_else(|| Error::UnknownGraph { id: id.to_string() })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.graphs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}
