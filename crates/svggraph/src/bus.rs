//! Outbound page events.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Topic the dashboard time selector listens on.
pub const RANGE_OFFSET_TOPIC: &str = "timeselector.rangeoffset";

/// Seconds to trim from the left and right edge of the displayed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeOffset {
    pub from_offset: u64,
    pub to_offset: u64,
}

pub trait EventBus {
    fn publish(&self, topic: &str, payload: &Value);
}

type Handler = Rc<dyn Fn(&Value)>;

/// In-memory publish/subscribe bus shared by every graph on a page.
#[derive(Default)]
pub struct PageBus {
    subscribers: RefCell<IndexMap<String, Vec<Handler>>>,
}

impl std::fmt::Debug for PageBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let subscribers = self.subscribers.borrow();
        f.debug_struct("PageBus")
            .field(
                "topics",
                &subscribers
                    .iter()
                    .map(|(topic, handlers)| (topic.as_str(), handlers.len()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl PageBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, topic: impl Into<String>, handler: impl Fn(&Value) + 'static) {
        self.subscribers
            .borrow_mut()
            .entry(topic.into())
            .or_default()
            .push(Rc::new(handler));
    }

    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.subscribers.borrow().get(topic).map_or(0, Vec::len)
    }
}

impl EventBus for PageBus {
    fn publish(&self, topic: &str, payload: &Value) {
        // Handlers may subscribe while being notified; do not hold the borrow across calls.
        let handlers: Vec<Handler> = self
            .subscribers
            .borrow()
            .get(topic)
            .cloned()
            .unwrap_or_default();
        tracing::trace!(topic, handlers = handlers.len(), "publish");
        for handler in handlers {
            handler(payload);
        }
    }
}
