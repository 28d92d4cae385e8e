//! Shared test helpers.
#![allow(dead_code)]

use skin_ui_core::event::{HookArgs, HookKind};
use skin_ui_core::geom::{Point, Rect};
use skin_ui_core::input::{PointerButton, PointerInput};
use skin_ui_core::surface::{AlphaSampler, Surface};
use skin_ui_core::widget::{Behavior, ControlNode, NodeId, Reactions, UiTree};
use skin_ui_core::RootView;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared event log test widgets and subscribers append to.
pub type EventLog = Rc<RefCell<Vec<String>>>;

pub fn new_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn entries(log: &EventLog) -> Vec<String> {
    log.borrow().clone()
}

pub fn count_of(log: &EventLog, needle: &str) -> usize {
    log.borrow().iter().filter(|e| e.as_str() == needle).count()
}

/// Surface handed out by [`ProbeSampler`]: carries the probe point in, the
/// sampled alpha out.
pub struct ProbeSurface {
    pub point: Point,
    pub alpha: u8,
}

impl Surface for ProbeSurface {
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _dx: f32, _dy: f32) {}
    fn intersect_clip(&mut self, _rect: Rect) {}
    fn as_any(&mut self) -> &mut dyn Any {
        self
    }
}

/// Sampler that runs the node's draw routine against a [`ProbeSurface`].
pub struct ProbeSampler;

impl AlphaSampler for ProbeSampler {
    fn sample_alpha(&mut self, at: Point, draw: &mut dyn FnMut(&mut dyn Surface)) -> u8 {
        let mut probe = ProbeSurface {
            point: at,
            alpha: 0,
        };
        draw(&mut probe);
        probe.alpha
    }
}

/// Surface that records paint traversal for order assertions.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<String>,
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.ops.push("save".into());
    }
    fn restore(&mut self) {
        self.ops.push("restore".into());
    }
    fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(format!("translate {dx} {dy}"));
    }
    fn intersect_clip(&mut self, rect: Rect) {
        self.ops
            .push(format!("clip {} {} {} {}", rect.x, rect.y, rect.width, rect.height));
    }
    fn as_any(&mut self) -> &mut dyn Any {
        self
    }
}

/// Test widget: labeled, optional alpha map for hit-test probes, records its
/// behavior hooks into the shared log.
pub struct TestWidget {
    pub label: String,
    pub log: Option<EventLog>,
    pub alpha: Option<Box<dyn Fn(Point) -> u8>>,
}

impl TestWidget {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            log: None,
            alpha: None,
        }
    }

    pub fn logged(label: &str, log: &EventLog) -> Self {
        Self {
            log: Some(Rc::clone(log)),
            ..Self::new(label)
        }
    }

    pub fn with_alpha(mut self, alpha: impl Fn(Point) -> u8 + 'static) -> Self {
        self.alpha = Some(Box::new(alpha));
        self
    }

    fn record(&self, what: &str) {
        if let Some(log) = &self.log {
            log.borrow_mut().push(format!("{} {}", self.label, what));
        }
    }
}

impl Behavior for TestWidget {
    fn kind(&self) -> &'static str {
        "TestWidget"
    }

    fn draw(&mut self, _node: &ControlNode, surface: &mut dyn Surface) {
        if let Some(probe) = surface.as_any().downcast_mut::<ProbeSurface>() {
            probe.alpha = match &self.alpha {
                Some(f) => f(probe.point),
                None => 255,
            };
            return;
        }
        if let Some(rec) = surface.as_any().downcast_mut::<RecordingSurface>() {
            rec.ops.push(format!("draw {}", self.label));
        }
    }

    fn draw_focus(&mut self, _node: &ControlNode, surface: &mut dyn Surface) {
        if let Some(rec) = surface.as_any().downcast_mut::<RecordingSurface>() {
            rec.ops.push(format!("focus {}", self.label));
        }
    }

    fn on_press(&mut self, _node: &ControlNode, _ev: &PointerInput, _out: &mut Reactions) {
        self.record("on_press");
    }

    fn on_click(&mut self, _node: &ControlNode, _ev: &PointerInput, _out: &mut Reactions) {
        self.record("on_click");
    }

    fn on_enter(&mut self, _node: &ControlNode, _out: &mut Reactions) {
        self.record("on_enter");
    }

    fn on_leave(&mut self, _node: &ControlNode, _out: &mut Reactions) {
        self.record("on_leave");
    }
}

/// A fully opaque leaf at `bounds`.
pub fn leaf(tree: &mut UiTree, label: &str, bounds: Rect) -> NodeId {
    let id = tree.insert(ControlNode::new(Box::new(TestWidget::new(label))));
    tree.set_bounds(id, bounds);
    id
}

/// A container node at `bounds`.
pub fn container(tree: &mut UiTree, bounds: Rect) -> NodeId {
    let id = tree.insert(ControlNode::container());
    tree.set_bounds(id, bounds);
    id
}

/// Subscribe a log entry `"<label> <kind>"` for a hook.
pub fn watch(tree: &mut UiTree, id: NodeId, kind: HookKind, label: &str, log: &EventLog) {
    let log = Rc::clone(log);
    let entry = format!("{} {}", label, kind.as_str());
    tree.hooks_mut().subscribe(
        id,
        kind,
        Box::new(move |_: NodeId, _: &HookArgs| {
            log.borrow_mut().push(entry.clone());
        }),
    );
}

/// Root view over `tree` with the probe sampler installed.
pub fn root_view(tree: UiTree, root: NodeId) -> RootView {
    RootView::new(tree, root, Some(Box::new(ProbeSampler))).expect("create root view")
}

pub fn press_at(x: f32, y: f32, time_ms: u64) -> PointerInput {
    PointerInput::press(PointerButton::Primary, Point::new(x, y), time_ms)
}

pub fn release_at(x: f32, y: f32, time_ms: u64) -> PointerInput {
    PointerInput::release(PointerButton::Primary, Point::new(x, y), time_ms)
}

pub fn move_to(x: f32, y: f32, time_ms: u64) -> PointerInput {
    PointerInput::motion(Point::new(x, y), time_ms)
}
