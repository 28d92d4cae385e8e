//! The arena owning every node in a widget tree.
//!
//! Containers reference their children by id; the tree holds the storage.
//! Parent back-references are mutated only by the tree's own add/remove
//! operations, so list membership and back-reference always agree.

use super::node::{ContainerState, ControlNode, NullBehavior, Reaction, Reactions};
use super::NodeId;
use crate::config::SkinConfig;
use crate::dirty::DirtyRegion;
use crate::error::{Error, Result};
use crate::event::{HookArgs, HookKind, HookRegistry};
use crate::geom::{Point, Rect, Size};
use crate::role::{RoleCatalog, SemanticRole};
use crate::surface::AlphaSampler;
use std::collections::HashMap;
use tracing::{debug, trace};

pub struct UiTree {
    nodes: HashMap<NodeId, ControlNode>,
    names: HashMap<String, NodeId>,
    pub(crate) hooks: HookRegistry,
    pub(crate) dirty: DirtyRegion,
    pub(crate) config: SkinConfig,
    /// Pixel probe installed when a root view adopts the tree. Without it
    /// there is no surface to sample, and alpha-tested hit-tests miss.
    pub(crate) sampler: Option<Box<dyn AlphaSampler>>,
}

impl UiTree {
    pub fn new() -> Self {
        Self::with_config(SkinConfig::default())
    }

    pub fn with_config(config: SkinConfig) -> Self {
        Self {
            nodes: HashMap::new(),
            names: HashMap::new(),
            hooks: HookRegistry::new(),
            dirty: DirtyRegion::new(),
            config,
            sampler: None,
        }
    }

    pub fn config(&self) -> &SkinConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SkinConfig {
        &mut self.config
    }

    pub fn hooks_mut(&mut self) -> &mut HookRegistry {
        &mut self.hooks
    }

    pub(crate) fn set_sampler(&mut self, sampler: Option<Box<dyn AlphaSampler>>) {
        self.sampler = sampler;
    }

    pub(crate) fn take_sampler(&mut self) -> Option<Box<dyn AlphaSampler>> {
        self.sampler.take()
    }

    // ── Node storage ─────────────────────────────────────────────────

    /// Register a node with the tree. The node starts detached.
    pub fn insert(&mut self, node: ControlNode) -> NodeId {
        let id = node.id;
        if let Some(name) = &node.name {
            self.names.insert(name.clone(), id);
        }
        debug!(?id, kind = node.kind(), "insert node");
        self.nodes.insert(id, node);
        id
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&ControlNode> {
        self.nodes.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut ControlNode> {
        self.nodes.get_mut(&id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    pub fn set_name(&mut self, id: NodeId, name: Option<String>) {
        let Some(node) = self.nodes.get_mut(&id) else {
            return;
        };
        if let Some(old) = node.name.take() {
            self.names.remove(&old);
        }
        if let Some(new) = name {
            self.names.insert(new.clone(), id);
            if let Some(node) = self.nodes.get_mut(&id) {
                node.name = Some(new);
            }
        }
    }

    // ── Structure ────────────────────────────────────────────────────

    /// Attach `child` as the new frontmost child of `parent`, detaching it
    /// from any previous parent first. Adding a node where it already lives
    /// is a no-op.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.contains(child) {
            return Err(Error::NodeNotFound(child));
        }
        let parent_node = self.get(parent).ok_or(Error::NodeNotFound(parent))?;
        if !parent_node.is_container() {
            return Err(Error::NotAContainer(parent));
        }

        let current = self.nodes[&child].parent;
        if current == Some(parent) {
            trace!(?child, ?parent, "add_child: already attached");
            return Ok(());
        }
        // Reject attaching a node under its own descendant (or itself).
        let mut cursor = Some(parent);
        while let Some(cur) = cursor {
            if cur == child {
                return Err(Error::CycleDetected { parent, child });
            }
            cursor = self.get(cur).and_then(|n| n.parent());
        }
        if let Some(old_parent) = current {
            self.remove_child(old_parent, child)?;
        }

        self.state_mut(parent)
            .expect("parent is a container")
            .children
            .push_front(child);
        self.nodes.get_mut(&child).expect("child present").parent = Some(parent);
        debug!(?child, ?parent, "attached");
        self.invalidate(child);
        self.fire_node(child, HookKind::Added, &HookArgs::None);
        Ok(())
    }

    /// Detach `child` from `parent`. Removing a node that is not actually a
    /// child is a no-op.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let state = self.state(parent).ok_or(Error::NotAContainer(parent))?;
        if !state.children.contains(child) {
            trace!(?child, ?parent, "remove_child: not a member");
            return Ok(());
        }

        // Record the vacated area while the chain is still intact.
        self.invalidate(child);

        let state = self.state_mut(parent).expect("checked above");
        state.children.remove(child);
        if state.focused == Some(child) {
            state.focused = None;
        }
        if state.hovered == Some(child) {
            state.hovered = None;
        }
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = None;
            node.captured = false;
        }
        debug!(?child, ?parent, "detached");
        self.fire_node(child, HookKind::Removed, &HookArgs::None);
        Ok(())
    }

    /// Make `child` the frontmost sibling; relative order of the rest is
    /// preserved.
    pub fn move_to_front(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let moved = self
            .state_mut(parent)
            .ok_or(Error::NotAContainer(parent))?
            .children
            .move_to_front(child);
        if moved {
            self.invalidate(child);
        }
        Ok(())
    }

    /// Push `child` behind every sibling.
    pub fn move_to_back(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let moved = self
            .state_mut(parent)
            .ok_or(Error::NotAContainer(parent))?
            .children
            .move_to_back(child);
        if moved {
            self.invalidate(child);
        }
        Ok(())
    }

    /// Every node below `id`, depth-first, front-to-back. Used by external
    /// property-editing tools.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(id, &mut out);
        out
    }

    fn collect_descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
        let Some(children) = self.get(id).and_then(|n| n.children()) else {
            return;
        };
        for child in children.iter() {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }

    pub(crate) fn state(&self, id: NodeId) -> Option<&ContainerState> {
        self.get(id).and_then(|n| n.container.as_ref())
    }

    pub(crate) fn state_mut(&mut self, id: NodeId) -> Option<&mut ContainerState> {
        self.nodes.get_mut(&id).and_then(|n| n.container.as_mut())
    }

    // ── Roles ────────────────────────────────────────────────────────

    /// Assign a semantic role, rejecting it unless the catalog's required
    /// kind matches the node's concrete kind exactly.
    pub fn set_role(
        &mut self,
        id: NodeId,
        role: SemanticRole,
        catalog: &RoleCatalog,
    ) -> Result<()> {
        let node = self.get(id).ok_or(Error::NodeNotFound(id))?;
        catalog.check(role, node.kind())?;
        self.nodes.get_mut(&id).expect("checked above").role = Some(role);
        Ok(())
    }

    // ── Geometry ─────────────────────────────────────────────────────

    /// Local offsets summed along the parent chain to the root.
    pub fn absolute_location(&self, id: NodeId) -> Point {
        let mut acc = Point::default();
        let mut current = Some(id);
        while let Some(node) = current.and_then(|c| self.get(c)) {
            let origin = node.bounds.origin();
            acc = acc.offset(origin.x, origin.y);
            current = node.parent;
        }
        acc
    }

    /// Bounds of `id` in root-absolute coordinates.
    pub fn absolute_bounds(&self, id: NodeId) -> Option<Rect> {
        let size = self.get(id)?.size();
        Some(Rect::from_origin_size(self.absolute_location(id), size))
    }

    pub fn set_position(&mut self, id: NodeId, position: Point) {
        if let Some(node) = self.get(id) {
            let size = node.size();
            self.set_bounds(id, Rect::from_origin_size(position, size));
        }
    }

    pub fn set_size(&mut self, id: NodeId, size: Size) {
        if let Some(node) = self.get(id) {
            let origin = node.position();
            self.set_bounds(id, Rect::from_origin_size(origin, size));
        }
    }

    /// Move/resize a node: invalidates both the vacated and the newly
    /// occupied area, raises Moved/Resized, and re-runs anchor layout for a
    /// resized container's children.
    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) {
        let Some(node) = self.get(id) else {
            trace!(?id, "set_bounds on missing node");
            return;
        };
        let old = node.bounds;
        if old == bounds {
            return;
        }

        self.invalidate(id);
        self.nodes.get_mut(&id).expect("checked above").bounds = bounds;
        self.invalidate(id);

        let moved = old.origin() != bounds.origin();
        let resized = old.size() != bounds.size();
        if moved {
            self.fire_node(
                id,
                HookKind::Moved,
                &HookArgs::Moved {
                    from: old.origin(),
                    to: bounds.origin(),
                },
            );
        }
        if resized {
            self.fire_node(
                id,
                HookKind::Resized,
                &HookArgs::Resized {
                    from: old.size(),
                    to: bounds.size(),
                },
            );
            if self.get(id).is_some_and(ControlNode::is_container) {
                self.propagate_resize(id, old.size(), bounds.size());
            }
        }
    }

    pub fn set_anchors(&mut self, id: NodeId, anchors: super::Anchors) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.anchors = anchors;
        }
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        let Some(node) = self.nodes.get_mut(&id) else {
            return;
        };
        if node.visible != visible {
            node.visible = visible;
            self.invalidate(id);
        }
    }

    pub fn set_enabled(&mut self, id: NodeId, enabled: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.enabled = enabled;
        }
    }

    pub fn set_tab_index(&mut self, id: NodeId, tab_index: i32) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.tab_index = tab_index;
        }
    }

    pub fn set_tab_stop(&mut self, id: NodeId, tab_stop: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.tab_stop = tab_stop;
        }
    }

    // ── Invalidation ─────────────────────────────────────────────────

    /// Record a node's absolute bounds as needing repaint on the next paint
    /// pass.
    pub fn invalidate(&mut self, id: NodeId) {
        if let Some(rect) = self.absolute_bounds(id) {
            self.dirty.add(rect);
        }
    }

    pub fn dirty(&self) -> &DirtyRegion {
        &self.dirty
    }

    pub(crate) fn take_dirty(&mut self) -> Vec<Rect> {
        self.dirty.take()
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Run a node's behavior hook for `kind`, then notify subscribers, then
    /// apply whatever deferred reactions the behavior recorded.
    pub(crate) fn fire_node(&mut self, id: NodeId, kind: HookKind, args: &HookArgs) {
        let Some(node) = self.nodes.get_mut(&id) else {
            return;
        };
        let mut behavior = std::mem::replace(&mut node.behavior, Box::new(NullBehavior));
        let mut out = Reactions::default();
        {
            let node = self.nodes.get(&id).expect("node present");
            match (kind, args) {
                (HookKind::Press, HookArgs::Pointer(ev)) => behavior.on_press(node, ev, &mut out),
                (HookKind::Release, HookArgs::Pointer(ev)) => {
                    behavior.on_release(node, ev, &mut out)
                }
                (HookKind::PointerMove, HookArgs::Pointer(ev)) => {
                    behavior.on_pointer_move(node, ev, &mut out)
                }
                (HookKind::Wheel, HookArgs::Pointer(ev)) => behavior.on_wheel(node, ev, &mut out),
                (HookKind::Click, HookArgs::Pointer(ev)) => behavior.on_click(node, ev, &mut out),
                (HookKind::DoubleClick, HookArgs::Pointer(ev)) => {
                    behavior.on_double_click(node, ev, &mut out)
                }
                (HookKind::Enter, _) => behavior.on_enter(node, &mut out),
                (HookKind::Leave, _) => behavior.on_leave(node, &mut out),
                (HookKind::KeyDown, HookArgs::Key(ev)) => behavior.on_key_down(node, ev, &mut out),
                (HookKind::Moved, HookArgs::Moved { from, .. }) => {
                    behavior.on_moved(node, *from, &mut out)
                }
                (HookKind::Resized, HookArgs::Resized { from, .. }) => {
                    behavior.on_resized(node, *from, &mut out)
                }
                (HookKind::Added, _) => behavior.on_added(node, &mut out),
                (HookKind::Removed, _) => behavior.on_removed(node, &mut out),
                _ => {}
            }
        }
        if let Some(node) = self.nodes.get_mut(&id) {
            node.behavior = behavior;
        }
        self.hooks.fire(id, kind, args);
        self.apply_reactions(id, out);
    }

    fn apply_reactions(&mut self, id: NodeId, out: Reactions) {
        for op in out.ops {
            match op {
                Reaction::SetBounds(rect) => self.set_bounds(id, rect),
                Reaction::Invalidate(None) => self.invalidate(id),
                Reaction::Invalidate(Some(local)) => {
                    let origin = self.absolute_location(id);
                    self.dirty.add(local.translate(origin.x, origin.y));
                }
                Reaction::StateChanged => {
                    self.hooks.fire(id, HookKind::StateChanged, &HookArgs::None);
                }
            }
        }
    }
}

impl Default for UiTree {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UiTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiTree")
            .field("nodes", &self.nodes.len())
            .field("dirty", &self.dirty)
            .field("sampler", &self.sampler.is_some())
            .finish()
    }
}
