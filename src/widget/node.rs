//! Base widget state and the behavior extension point.
//!
//! Every node in the tree is a [`ControlNode`]: common geometry, anchor, and
//! focus state plus a boxed [`Behavior`] supplying the concrete widget's
//! drawing and input reactions. Skinned widgets (buttons, track bars, list
//! views) live outside this crate and plug in through `Behavior`.

use super::{Anchors, ChildList, NodeId};
use crate::geom::{Point, Rect, Size};
use crate::input::{KeyInput, PointerInput};
use crate::role::SemanticRole;
use crate::surface::Surface;

/// Kind tag of the built-in composite container.
pub const CONTAINER_KIND: &str = "Container";

/// Concrete widget behavior plugged into a [`ControlNode`].
///
/// Input hooks receive the node's current state read-only and record any
/// mutations they want as deferred [`Reactions`]; the tree applies them after
/// the hook returns, so handlers never mutate the tree mid-dispatch.
pub trait Behavior {
    /// Kind tag checked against a role's required kind at assignment time.
    fn kind(&self) -> &'static str;

    /// Draw the node's content. The surface is already translated to the
    /// node's origin and clipped to its bounds.
    fn draw(&mut self, node: &ControlNode, surface: &mut dyn Surface) {
        let _ = (node, surface);
    }

    /// Draw the focus ring. Called after `draw` when this node is its
    /// container's focused child and focus indication is requested.
    fn draw_focus(&mut self, node: &ControlNode, surface: &mut dyn Surface) {
        let _ = (node, surface);
    }

    /// Whether hit-testing samples the rendered pixel. Defaults to true so
    /// irregular skin art gets pixel-accurate clickable regions; containers
    /// return false and route by bounds, letting transparent body regions
    /// still reach their children.
    fn alpha_hit_test(&self) -> bool {
        true
    }

    fn on_press(&mut self, node: &ControlNode, ev: &PointerInput, out: &mut Reactions) {
        let _ = (node, ev, out);
    }

    fn on_release(&mut self, node: &ControlNode, ev: &PointerInput, out: &mut Reactions) {
        let _ = (node, ev, out);
    }

    fn on_pointer_move(&mut self, node: &ControlNode, ev: &PointerInput, out: &mut Reactions) {
        let _ = (node, ev, out);
    }

    fn on_wheel(&mut self, node: &ControlNode, ev: &PointerInput, out: &mut Reactions) {
        let _ = (node, ev, out);
    }

    fn on_enter(&mut self, node: &ControlNode, out: &mut Reactions) {
        let _ = (node, out);
    }

    fn on_leave(&mut self, node: &ControlNode, out: &mut Reactions) {
        let _ = (node, out);
    }

    fn on_click(&mut self, node: &ControlNode, ev: &PointerInput, out: &mut Reactions) {
        let _ = (node, ev, out);
    }

    fn on_double_click(&mut self, node: &ControlNode, ev: &PointerInput, out: &mut Reactions) {
        let _ = (node, ev, out);
    }

    fn on_key_down(&mut self, node: &ControlNode, ev: &KeyInput, out: &mut Reactions) {
        let _ = (node, ev, out);
    }

    fn on_moved(&mut self, node: &ControlNode, from: Point, out: &mut Reactions) {
        let _ = (node, from, out);
    }

    fn on_resized(&mut self, node: &ControlNode, from: Size, out: &mut Reactions) {
        let _ = (node, from, out);
    }

    fn on_added(&mut self, node: &ControlNode, out: &mut Reactions) {
        let _ = (node, out);
    }

    fn on_removed(&mut self, node: &ControlNode, out: &mut Reactions) {
        let _ = (node, out);
    }
}

/// Deferred mutations recorded by behavior hooks and applied by the tree
/// once dispatch finishes.
#[derive(Default)]
pub struct Reactions {
    pub(crate) ops: Vec<Reaction>,
}

pub(crate) enum Reaction {
    SetBounds(Rect),
    Invalidate(Option<Rect>),
    StateChanged,
}

impl Reactions {
    /// Request new bounds for the handling node (re-enters the container's
    /// anchor/resize logic).
    pub fn set_bounds(&mut self, rect: Rect) {
        self.ops.push(Reaction::SetBounds(rect));
    }

    /// Request repaint of the whole node.
    pub fn invalidate(&mut self) {
        self.ops.push(Reaction::Invalidate(None));
    }

    /// Request repaint of a node-local rectangle.
    pub fn invalidate_rect(&mut self, rect: Rect) {
        self.ops.push(Reaction::Invalidate(Some(rect)));
    }

    /// Raise a `StateChanged` notification to subscribers.
    pub fn state_changed(&mut self) {
        self.ops.push(Reaction::StateChanged);
    }
}

/// Transient double-click tracking: the previous press in a container.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PressRecord {
    pub time_ms: u64,
    pub position: Point,
    pub target: Option<NodeId>,
}

/// Composite bookkeeping carried by container nodes.
#[derive(Debug, Default)]
pub(crate) struct ContainerState {
    pub children: ChildList,
    /// Currently focused child, validated against membership on use.
    pub focused: Option<NodeId>,
    /// Last child the pointer hovered, for enter/leave pairing.
    pub hovered: Option<NodeId>,
    /// Previous press, for double-click pairing. Reset on every press.
    pub last_press: Option<PressRecord>,
    /// One-shot: the next synthesized click is swallowed because a
    /// double-click already fired for this press pair.
    pub suppress_click: bool,
}

/// Base widget: geometry, anchors, role tag, tree back-references, focus and
/// capture state, plus the concrete behavior.
pub struct ControlNode {
    pub(crate) id: NodeId,
    pub(crate) role: Option<SemanticRole>,
    pub(crate) bounds: Rect,
    pub(crate) anchors: Anchors,
    /// Owning container; None while detached or when this is the root.
    pub(crate) parent: Option<NodeId>,
    pub(crate) name: Option<String>,
    pub(crate) visible: bool,
    pub(crate) enabled: bool,
    pub(crate) tab_index: i32,
    pub(crate) tab_stop: bool,
    /// Exclusive recipient of move/release events after a press.
    pub(crate) captured: bool,
    /// Whether a focus ring is drawn while this node is the focused child.
    pub(crate) focus_indicator: bool,
    pub(crate) behavior: Box<dyn Behavior>,
    pub(crate) container: Option<ContainerState>,
}

impl ControlNode {
    /// A leaf node with the given behavior.
    pub fn new(behavior: Box<dyn Behavior>) -> Self {
        Self {
            id: NodeId::next(),
            role: None,
            bounds: Rect::default(),
            anchors: Anchors::default(),
            parent: None,
            name: None,
            visible: true,
            enabled: true,
            tab_index: 0,
            tab_stop: false,
            captured: false,
            focus_indicator: false,
            behavior,
            container: None,
        }
    }

    /// A composite container node.
    pub fn container() -> Self {
        let mut node = Self::new(Box::new(ContainerBehavior));
        node.container = Some(ContainerState::default());
        node
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> &'static str {
        self.behavior.kind()
    }

    pub fn role(&self) -> Option<SemanticRole> {
        self.role
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn position(&self) -> Point {
        self.bounds.origin()
    }

    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    pub fn anchors(&self) -> Anchors {
        self.anchors
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn tab_index(&self) -> i32 {
        self.tab_index
    }

    pub fn is_tab_stop(&self) -> bool {
        self.tab_stop
    }

    pub fn has_capture(&self) -> bool {
        self.captured
    }

    pub fn is_container(&self) -> bool {
        self.container.is_some()
    }

    /// Children in z-order (index 0 frontmost); empty for leaves.
    pub fn children(&self) -> Option<&ChildList> {
        self.container.as_ref().map(|c| &c.children)
    }

    /// Local point containment against this node's extent.
    pub(crate) fn local_bounds_contain(&self, local: Point) -> bool {
        Rect::new(0.0, 0.0, self.bounds.width, self.bounds.height).contains(local)
    }
}

impl std::fmt::Debug for ControlNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlNode")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("role", &self.role)
            .field("name", &self.name)
            .field("bounds", &self.bounds)
            .field("visible", &self.visible)
            .field("container", &self.container.is_some())
            .finish()
    }
}

/// Behavior of the built-in composite container. Drawing is left to the skin
/// (a Background-role child usually covers the body); hit-testing is by
/// bounds so pointer events reach children over transparent regions.
pub struct ContainerBehavior;

impl Behavior for ContainerBehavior {
    fn kind(&self) -> &'static str {
        CONTAINER_KIND
    }

    fn alpha_hit_test(&self) -> bool {
        false
    }
}

/// Placeholder behavior swapped in while a node's real behavior is borrowed
/// out for dispatch.
pub(crate) struct NullBehavior;

impl Behavior for NullBehavior {
    fn kind(&self) -> &'static str {
        "Null"
    }
}
