//! Root adapter bridging host input into the widget tree.
//!
//! The root view owns exactly one root container at a time. Host pointer and
//! keyboard records arrive here untranslated; positions are shifted into
//! root-container-local space before routing. A single switch disables all
//! forwarding while an external authoring surface manipulates the tree.

use crate::error::{Error, Result};
use crate::geom::Rect;
use crate::input::{Key, KeyInput, PointerInput};
use crate::surface::{AlphaSampler, Surface};
use crate::widget::{NodeId, UiTree};
use tracing::debug;

pub struct RootView {
    tree: UiTree,
    root: NodeId,
    input_blocked: bool,
}

impl RootView {
    /// Adopt a tree whose `root` must be a container. The sampler, when
    /// present, backs alpha-tested hit-testing; without one, alpha-tested
    /// nodes are simply never hit.
    pub fn new(
        mut tree: UiTree,
        root: NodeId,
        sampler: Option<Box<dyn AlphaSampler>>,
    ) -> Result<Self> {
        let node = tree.get(root).ok_or(Error::NodeNotFound(root))?;
        if !node.is_container() {
            return Err(Error::NotAContainer(root));
        }
        tree.set_sampler(sampler);
        Ok(Self {
            tree,
            root,
            input_blocked: false,
        })
    }

    pub fn tree(&self) -> &UiTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut UiTree {
        &mut self.tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Swap in a freshly built tree (a newly loaded skin). The previous tree
    /// is discarded outright; handles retained into it fail lookups from now
    /// on. The installed sampler carries over.
    pub fn replace_tree(&mut self, mut tree: UiTree, root: NodeId) -> Result<()> {
        let node = tree.get(root).ok_or(Error::NodeNotFound(root))?;
        if !node.is_container() {
            return Err(Error::NotAContainer(root));
        }
        tree.set_sampler(self.tree.take_sampler());
        debug!(old_nodes = self.tree.len(), new_nodes = tree.len(), "replace tree");
        self.tree = tree;
        self.root = root;
        self.tree.invalidate(root);
        Ok(())
    }

    /// Disable or re-enable all input forwarding (used while an authoring
    /// surface owns the tree and it must not react as a live player).
    pub fn set_input_blocked(&mut self, blocked: bool) {
        self.input_blocked = blocked;
    }

    pub fn input_blocked(&self) -> bool {
        self.input_blocked
    }

    fn to_root_local(&self, ev: PointerInput) -> PointerInput {
        let origin = self
            .tree
            .get(self.root)
            .map(|n| n.position())
            .unwrap_or_default();
        ev.into_local(origin)
    }

    pub fn pointer_pressed(&mut self, ev: PointerInput) {
        if self.input_blocked {
            return;
        }
        let ev = self.to_root_local(ev);
        self.tree.route_pointer_press(self.root, ev);
    }

    pub fn pointer_moved(&mut self, ev: PointerInput) {
        if self.input_blocked {
            return;
        }
        let ev = self.to_root_local(ev);
        self.tree.route_pointer_move(self.root, ev);
    }

    pub fn pointer_released(&mut self, ev: PointerInput) {
        if self.input_blocked {
            return;
        }
        let ev = self.to_root_local(ev);
        self.tree.route_pointer_release(self.root, ev);
    }

    pub fn wheel(&mut self, ev: PointerInput) {
        if self.input_blocked {
            return;
        }
        let ev = self.to_root_local(ev);
        self.tree.route_wheel(self.root, ev);
    }

    /// Tab advances the focus chain; when the chain reports exhaustion, one
    /// retry from the start makes focus land somewhere rather than nowhere.
    /// Every other key goes to the deepest focused node.
    pub fn key_down(&mut self, ev: KeyInput) {
        if self.input_blocked {
            return;
        }
        if ev.key == Key::Tab {
            let forward = !ev.modifiers.shift;
            if !self.tree.do_tab(self.root, forward, true) {
                self.tree.do_tab(self.root, forward, true);
            }
            return;
        }
        self.tree.route_key_down(self.root, ev);
    }

    /// Paint the whole tree, draining the accumulated dirty region.
    pub fn paint(&mut self, surface: &mut dyn Surface) -> Vec<Rect> {
        self.tree.paint(self.root, surface)
    }
}

impl std::fmt::Debug for RootView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootView")
            .field("root", &self.root)
            .field("input_blocked", &self.input_blocked)
            .field("tree", &self.tree)
            .finish()
    }
}
