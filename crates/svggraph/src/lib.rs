#![forbid(unsafe_code)]

//! Interactivity for SVG time-series graphs on monitoring dashboards (headless).
//!
//! A [`GraphController`] is bound per graph element. The host forwards pointer and keyboard
//! events through [`GraphController::dispatch`]; the controller
//! - drives the page's tooltip widget ([`HintBoxWidget`]) with value and problem hints
//! - exposes helper line, highlighted markers and the selection box as an [`Overlay`]
//! - publishes selected time ranges on the page [`EventBus`]
//!
//! Everything runs on the host's single UI thread; nothing here is `Send`.

pub mod bus;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod hint;
pub mod overlay;
pub mod registry;
pub mod sbox;
pub mod state;
pub mod widget;

pub use bus::{EventBus, PageBus, RANGE_OFFSET_TOPIC, RangeOffset};
pub use config::{Dims, GraphOptions};
pub use controller::GraphController;
pub use error::{Error, Result};
pub use event::{GraphEvent, Key, Pointer};
pub use hint::{HintBody, HintContent, HintKind, Paging, ValueRow};
pub use overlay::{HelperLine, Overlay, SelectionBox};
pub use registry::GraphRegistry;
pub use state::{GraphState, InteractionState};
pub use widget::{HintBoxId, HintBoxWidget};

#[cfg(test)]
mod tests;
