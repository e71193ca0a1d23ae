use super::{FakeWidget, GRAPH, RecordingBus, WidgetLog};
use crate::*;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use svggraph_core::geom::size;

fn widget(log: &Rc<RefCell<WidgetLog>>) -> Box<dyn HintBoxWidget> {
    Box::new(FakeWidget {
        log: log.clone(),
        size: size(100.0, 40.0),
    })
}

fn options() -> serde_json::Value {
    json!({ "sbox": true, "spp": 60, "dims": { "x": 50, "y": 20, "w": 400, "h": 200 } })
}

#[test]
fn dispatches_by_element_id() {
    let log = Rc::new(RefCell::new(WidgetLog::default()));
    let bus = Rc::new(RecordingBus::default());
    let mut reg = GraphRegistry::new();
    reg.bind_svg("graph_1", GRAPH, options(), widget(&log), bus.clone())
        .unwrap();
    reg.bind_svg("graph_2", GRAPH, options(), widget(&log), bus.clone())
        .unwrap();
    assert_eq!(reg.ids().collect::<Vec<_>>(), vec!["graph_1", "graph_2"]);

    reg.dispatch("graph_2", GraphEvent::PointerMove(Pointer::at(210.0, 150.0)))
        .unwrap();
    assert_eq!(
        reg.get("graph_2").unwrap().interaction(),
        InteractionState::ShowingValueHint
    );
    assert_eq!(
        reg.get("graph_1").unwrap().interaction(),
        InteractionState::Idle
    );

    let err = reg
        .dispatch("graph_3", GraphEvent::PointerLeave)
        .unwrap_err();
    assert!(matches!(err, Error::UnknownGraph { ref id } if id == "graph_3"));
    assert_eq!(err.to_string(), "No graph bound to element: graph_3");
}

#[test]
fn rebinding_replaces_and_resets_the_previous_instance() {
    let log = Rc::new(RefCell::new(WidgetLog::default()));
    let bus = Rc::new(RecordingBus::default());
    let mut reg = GraphRegistry::new();
    reg.bind_svg("g", GRAPH, options(), widget(&log), bus.clone())
        .unwrap();
    reg.dispatch("g", GraphEvent::PointerMove(Pointer::at(210.0, 150.0)))
        .unwrap();
    assert_eq!(log.borrow().live.len(), 1);

    reg.bind_svg("g", GRAPH, options(), widget(&log), bus.clone())
        .unwrap();
    assert_eq!(reg.len(), 1);
    assert_eq!(log.borrow().live.len(), 0);
}

#[test]
fn detach_clears_what_the_graph_shows() {
    let log = Rc::new(RefCell::new(WidgetLog::default()));
    let bus = Rc::new(RecordingBus::default());
    let mut reg = GraphRegistry::new();
    reg.bind_svg("g", GRAPH, options(), widget(&log), bus)
        .unwrap();
    reg.dispatch("g", GraphEvent::PointerMove(Pointer::at(210.0, 150.0)))
        .unwrap();
    reg.dispatch("g", GraphEvent::PointerUp(Pointer::at(210.0, 150.0)))
        .unwrap();

    let detached = reg.detach("g").unwrap();
    assert_eq!(detached.interaction(), InteractionState::Idle);
    assert!(reg.is_empty());
    assert_eq!(log.borrow().live.len(), 0);
    assert!(reg.detach("g").is_none());
}

#[test]
fn disable_sbox_through_the_registry() {
    let log = Rc::new(RefCell::new(WidgetLog::default()));
    let bus = Rc::new(RecordingBus::default());
    let mut reg = GraphRegistry::new();
    reg.bind_svg("g", GRAPH, options(), widget(&log), bus.clone())
        .unwrap();
    reg.disable_sbox("g").unwrap();
    assert!(!reg.get("g").unwrap().state().sbox_enabled);
    assert!(reg.disable_sbox("nope").is_err());
}

#[test]
fn bind_reports_bad_markup_and_options() {
    let log = Rc::new(RefCell::new(WidgetLog::default()));
    let bus = Rc::new(RecordingBus::default());
    let mut reg = GraphRegistry::new();

    let err = reg
        .bind_svg("g", "<svg>", options(), widget(&log), bus.clone())
        .unwrap_err();
    assert!(matches!(err, Error::Core(_)));

    let err = reg
        .bind_svg("g", GRAPH, json!({ "sbox": "yes" }), widget(&log), bus.clone())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidOptions(_)));

    let err = reg
        .bind_svg("g", GRAPH, json!({}), widget(&log), bus)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidDimensions { .. }));
    assert!(reg.is_empty());
}
