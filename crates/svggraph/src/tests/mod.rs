mod registry;

use crate::*;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::rc::Rc;
use svggraph_core::GraphDocument;
use svggraph_core::geom::{Point, Size, size};

/// Drawing area 50..450 x 20..220, problem band 220..235.
pub(crate) const GRAPH: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="500" height="260">
  <g data-set="line" data-metric="Zabbix server: CPU idle time" data-color="#00AA00">
    <path class="svg-graph-line" d="M50,200 L150,180 L250,160 L350,140" data-label="a,b,c,d" stroke-width="2"/>
    <circle class="svg-point-highlight" cx="-10" cy="-10" r="3"/>
  </g>
  <g data-set="points" data-metric="Zabbix server: Load average" data-color="#0000AA">
    <circle class="svg-point-highlight" cx="-10" cy="-10" r="5"/>
    <circle cx="100" cy="120" r="4" label="1"/>
    <circle cx="200" cy="100" r="4" label="2"/>
    <circle cx="300" cy="80" r="4" label="3"/>
  </g>
  <line class="svg-helper" x1="-10" x2="-10" y1="20" y2="220"/>
  <rect x="120" y="222" width="100" height="15" data-info='{"clock":"10:00","r_clock":"10:30","r_eventid":"11","url":"tr_events.php?eventid=10","status":"RESOLVED","status_color":"green","severity":"high-bg","name":"P1"}'/>
  <rect x="180" y="222" width="200" height="15" data-info='{"clock":"10:20","r_clock":"","r_eventid":0,"url":"tr_events.php?eventid=12","status":"PROBLEM","status_color":"red","severity":"average-bg","name":"P2"}'/>
</svg>"##;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LiveBox {
    pub id: HintBoxId,
    pub content: HintContent,
    pub pinned: bool,
    pub position: Option<Point>,
}

#[derive(Debug, Default)]
pub(crate) struct WidgetLog {
    pub next_id: u64,
    pub created: usize,
    pub live: Vec<LiveBox>,
}

impl WidgetLog {
    pub fn only(&self) -> &LiveBox {
        assert_eq!(self.live.len(), 1, "expected exactly one live tooltip");
        &self.live[0]
    }
}

pub(crate) struct FakeWidget {
    pub log: Rc<RefCell<WidgetLog>>,
    pub size: Size,
}

impl HintBoxWidget for FakeWidget {
    fn create(&mut self, content: &HintContent, pinned: bool) -> HintBoxId {
        let mut log = self.log.borrow_mut();
        log.next_id += 1;
        log.created += 1;
        let id = HintBoxId(log.next_id);
        log.live.push(LiveBox {
            id,
            content: content.clone(),
            pinned,
            position: None,
        });
        id
    }

    fn update(&mut self, id: HintBoxId, content: &HintContent) {
        let mut log = self.log.borrow_mut();
        let b = log.live.iter_mut().find(|b| b.id == id).expect("update of a live box");
        b.content = content.clone();
    }

    fn size(&self, _id: HintBoxId) -> Size {
        self.size
    }

    fn move_to(&mut self, id: HintBoxId, position: Point) {
        let mut log = self.log.borrow_mut();
        let b = log.live.iter_mut().find(|b| b.id == id).expect("move of a live box");
        b.position = Some(position);
    }

    fn remove(&mut self, id: HintBoxId) {
        let mut log = self.log.borrow_mut();
        let before = log.live.len();
        log.live.retain(|b| b.id != id);
        assert_eq!(before, log.live.len() + 1, "remove of a box that is not live");
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingBus {
    pub published: RefCell<Vec<(String, Value)>>,
}

impl EventBus for RecordingBus {
    fn publish(&self, topic: &str, payload: &Value) {
        self.published
            .borrow_mut()
            .push((topic.to_string(), payload.clone()));
    }
}

pub(crate) struct Harness {
    pub graph: GraphController,
    pub widget: Rc<RefCell<WidgetLog>>,
    pub bus: Rc<RecordingBus>,
}

impl Harness {
    pub fn new(options: Value) -> Self {
        let mut merged = json!({ "dims": { "x": 50, "y": 20, "w": 400, "h": 200 } });
        if let (Some(base), Some(extra)) = (merged.as_object_mut(), options.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        let options = GraphOptions::from_value(merged).unwrap();
        let widget = Rc::new(RefCell::new(WidgetLog::default()));
        let bus = Rc::new(RecordingBus::default());
        let graph = GraphController::new(
            GraphDocument::parse(GRAPH).unwrap(),
            &options,
            Box::new(FakeWidget {
                log: widget.clone(),
                size: size(120.0, 80.0),
            }),
            bus.clone(),
        )
        .unwrap();
        Self { graph, widget, bus }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.graph.dispatch(GraphEvent::PointerMove(Pointer::at(x, y)));
    }

    pub fn down(&mut self, x: f64, y: f64) {
        self.graph.dispatch(GraphEvent::PointerDown(Pointer::at(x, y)));
    }

    pub fn up(&mut self, x: f64, y: f64) {
        self.graph.dispatch(GraphEvent::PointerUp(Pointer::at(x, y)));
    }

    pub fn drag(&mut self, from: f64, to: f64) {
        self.down(from, 100.0);
        self.move_to(to, 100.0);
        self.up(to, 100.0);
    }

    pub fn published(&self) -> Vec<(String, Value)> {
        self.bus.published.borrow().clone()
    }

    pub fn live_boxes(&self) -> usize {
        self.widget.borrow().live.len()
    }
}
