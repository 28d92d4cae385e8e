//! Pointer routing: capture, hover tracking, click synthesis, double-click
//! detection, and alpha-tested hit-testing.
//!
//! Containers resolve events front-to-back in z-order so the topmost visible
//! node wins; a captured child receives every move/release unconditionally
//! until the press is released. Event coordinates are translated into the
//! receiving node's local space as routing descends.

use super::node::{NullBehavior, PressRecord};
use super::tree::UiTree;
use super::NodeId;
use crate::event::{HookArgs, HookKind};
use crate::geom::Point;
use crate::input::{KeyInput, PointerButton, PointerInput};
use tracing::trace;

impl UiTree {
    /// Full hit test for a node at a node-local point: visibility, bounds
    /// containment, and (outside design mode) a rendered-pixel alpha test so
    /// irregular skin art is clickable only where it is visible.
    pub fn hit_test(&mut self, id: NodeId, local: Point) -> bool {
        let Some(node) = self.get(id) else {
            return false;
        };
        if !node.is_visible() || !node.local_bounds_contain(local) {
            return false;
        }
        if self.config.design_mode || !node.behavior.alpha_hit_test() {
            return true;
        }
        // No sampler means no surface to render the probe pixel on: not hit.
        let Some(mut sampler) = self.sampler.take() else {
            return false;
        };
        let mut behavior = {
            let node = self.get_mut(id).expect("checked above");
            std::mem::replace(&mut node.behavior, Box::new(NullBehavior))
        };
        let alpha = {
            let node = self.get(id).expect("checked above");
            sampler.sample_alpha(local, &mut |surface| behavior.draw(node, surface))
        };
        if let Some(node) = self.get_mut(id) {
            node.behavior = behavior;
        }
        self.sampler = Some(sampler);
        alpha != 0
    }

    /// Frontmost child of `container` hit at a container-local point.
    pub fn hit_child(&mut self, container: NodeId, position: Point) -> Option<NodeId> {
        let children: Vec<NodeId> = self.state(container)?.children.iter().collect();
        for child in children {
            let Some(node) = self.get(child) else {
                continue;
            };
            let origin = node.bounds().origin();
            let local = Point::new(position.x - origin.x, position.y - origin.y);
            if self.hit_test(child, local) {
                return Some(child);
            }
        }
        None
    }

    fn captured_child(&self, container: NodeId) -> Option<NodeId> {
        self.state(container)?
            .children
            .iter()
            .find(|&c| self.get(c).is_some_and(|n| n.has_capture()))
    }

    fn child_local(&self, child: NodeId, ev: PointerInput) -> PointerInput {
        let origin = self
            .get(child)
            .map(|n| n.bounds().origin())
            .unwrap_or_default();
        ev.into_local(origin)
    }

    /// Route a press: resolve the target front-to-back, grant it capture,
    /// and run double-click pairing against the container's previous press.
    pub fn route_pointer_press(&mut self, container: NodeId, ev: PointerInput) {
        if self.state(container).is_none() {
            return;
        }
        let target = self.hit_child(container, ev.position);

        let radius = self.config.double_click_radius;
        let window = self.config.double_click_ms;
        let prev = self.state(container).expect("checked above").last_press;
        let is_double = ev.button == Some(PointerButton::Primary)
            && prev.is_some_and(|p| {
                p.target == target
                    && ev.time_ms.saturating_sub(p.time_ms) <= window
                    && p.position.distance_sq(ev.position) <= radius * radius
            });
        // The pairing timer resets on every press, including the one that
        // just fired a double-click.
        self.state_mut(container).expect("checked above").last_press = Some(PressRecord {
            time_ms: ev.time_ms,
            position: ev.position,
            target,
        });

        match target {
            Some(child) => {
                if !self.get(child).is_some_and(|n| n.is_enabled()) {
                    trace!(?child, "press swallowed by disabled node");
                    return;
                }
                if let Some(node) = self.get_mut(child) {
                    node.captured = true;
                }
                let child_ev = self.child_local(child, ev);
                if self.get(child).is_some_and(|n| n.is_container()) {
                    // Nested containers run their own pairing and routing.
                    self.route_pointer_press(child, child_ev);
                } else {
                    trace!(?child, "press");
                    self.fire_node(child, HookKind::Press, &HookArgs::Pointer(child_ev));
                    if is_double {
                        self.state_mut(container).expect("checked above").suppress_click = true;
                        self.fire_node(child, HookKind::DoubleClick, &HookArgs::Pointer(child_ev));
                    }
                }
            }
            None => {
                // The press landed on the container body itself.
                if let Some(node) = self.get_mut(container) {
                    node.captured = true;
                }
                self.fire_node(container, HookKind::Press, &HookArgs::Pointer(ev));
                if is_double {
                    self.state_mut(container).expect("checked above").suppress_click = true;
                    self.fire_node(container, HookKind::DoubleClick, &HookArgs::Pointer(ev));
                }
            }
        }
    }

    /// Route pointer motion: a captured child receives it unconditionally,
    /// otherwise the hover target is re-resolved and enter/leave fire on the
    /// change.
    pub fn route_pointer_move(&mut self, container: NodeId, ev: PointerInput) {
        if self.state(container).is_none() {
            return;
        }
        if let Some(captured) = self.captured_child(container) {
            let child_ev = self.child_local(captured, ev);
            if self.get(captured).is_some_and(|n| n.is_container()) {
                self.route_pointer_move(captured, child_ev);
            } else {
                self.fire_node(captured, HookKind::PointerMove, &HookArgs::Pointer(child_ev));
            }
            return;
        }

        let target = self.hit_child(container, ev.position);
        let previous = self.state(container).expect("checked above").hovered;
        if target != previous {
            self.state_mut(container).expect("checked above").hovered = target;
            if let Some(old) = previous {
                if self
                    .state(container)
                    .is_some_and(|s| s.children.contains(old))
                {
                    trace!(?old, "hover leave");
                    self.fire_node(old, HookKind::Leave, &HookArgs::None);
                }
            }
            if let Some(new) = target {
                trace!(?new, "hover enter");
                self.fire_node(new, HookKind::Enter, &HookArgs::None);
            }
        }

        match target {
            Some(child) => {
                let child_ev = self.child_local(child, ev);
                if self.get(child).is_some_and(|n| n.is_container()) {
                    self.route_pointer_move(child, child_ev);
                } else {
                    self.fire_node(child, HookKind::PointerMove, &HookArgs::Pointer(child_ev));
                }
            }
            None => {
                self.fire_node(container, HookKind::PointerMove, &HookArgs::Pointer(ev));
            }
        }
    }

    /// Route a release: the captured node receives it and loses capture; a
    /// click is synthesized when the press/release pair qualifies.
    pub fn route_pointer_release(&mut self, container: NodeId, ev: PointerInput) {
        if self.state(container).is_none() {
            return;
        }
        // One-shot: consume the suppression armed by a double-click.
        let suppress = {
            let state = self.state_mut(container).expect("checked above");
            std::mem::take(&mut state.suppress_click)
        };

        if let Some(captured) = self.captured_child(container) {
            if let Some(node) = self.get_mut(captured) {
                node.captured = false;
            }
            let child_ev = self.child_local(captured, ev);
            if self.get(captured).is_some_and(|n| n.is_container()) {
                self.route_pointer_release(captured, child_ev);
            } else {
                self.fire_node(captured, HookKind::Release, &HookArgs::Pointer(child_ev));
                let inside = self.hit_test(captured, child_ev.position);
                if ev.button == Some(PointerButton::Primary) && inside && !suppress {
                    trace!(?captured, "click");
                    self.fire_node(captured, HookKind::Click, &HookArgs::Pointer(child_ev));
                }
            }
            return;
        }

        // No captured child: the press, if any, landed on the container body.
        if self.get(container).is_some_and(|n| n.has_capture()) {
            if let Some(node) = self.get_mut(container) {
                node.captured = false;
            }
            self.fire_node(container, HookKind::Release, &HookArgs::Pointer(ev));
            let inside = self
                .get(container)
                .is_some_and(|n| n.local_bounds_contain(ev.position));
            if ev.button == Some(PointerButton::Primary) && inside && !suppress {
                self.fire_node(container, HookKind::Click, &HookArgs::Pointer(ev));
            }
        }
    }

    /// Route a wheel event to the node under the pointer.
    pub fn route_wheel(&mut self, container: NodeId, ev: PointerInput) {
        if self.state(container).is_none() {
            return;
        }
        match self.hit_child(container, ev.position) {
            Some(child) => {
                let child_ev = self.child_local(child, ev);
                if self.get(child).is_some_and(|n| n.is_container()) {
                    self.route_wheel(child, child_ev);
                } else {
                    self.fire_node(child, HookKind::Wheel, &HookArgs::Pointer(child_ev));
                }
            }
            None => {
                self.fire_node(container, HookKind::Wheel, &HookArgs::Pointer(ev));
            }
        }
    }

    /// Deliver a key to the deepest node on the focused-child chain, falling
    /// back to the container itself.
    pub fn route_key_down(&mut self, container: NodeId, ev: KeyInput) {
        let mut target = container;
        while let Some(focused) = self.state(target).and_then(|s| s.focused) {
            if !self.contains(focused) {
                break;
            }
            target = focused;
        }
        self.fire_node(target, HookKind::KeyDown, &HookArgs::Key(ev));
    }
}
