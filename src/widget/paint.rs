//! Paint pass.
//!
//! Children paint back-to-front so index 0 ends up visually on top. Each
//! node saves transform state, translates to its origin, clips to its bounds
//! (inflated by half a pixel to avoid seam artifacts at fractional
//! boundaries), draws, then restores.

use super::node::NullBehavior;
use super::tree::UiTree;
use super::NodeId;
use crate::geom::Rect;
use crate::surface::Surface;

impl UiTree {
    /// Paint the subtree rooted at `root`, honoring and draining the dirty
    /// region accumulated since the previous pass. Returns the drained
    /// rectangles so the host can limit its blit.
    pub fn paint(&mut self, root: NodeId, surface: &mut dyn Surface) -> Vec<Rect> {
        let dirty = self.take_dirty();
        self.paint_node(root, surface, false);
        dirty
    }

    fn paint_node(&mut self, id: NodeId, surface: &mut dyn Surface, focused: bool) {
        let Some(node) = self.get(id) else {
            return;
        };
        if !node.is_visible() {
            return;
        }
        let bounds = node.bounds();

        surface.save();
        surface.translate(bounds.x, bounds.y);
        surface.intersect_clip(Rect::new(0.0, 0.0, bounds.width, bounds.height).inflate(0.5));

        let mut behavior = {
            let node = self.get_mut(id).expect("checked above");
            std::mem::replace(&mut node.behavior, Box::new(NullBehavior))
        };
        {
            let node = self.get(id).expect("checked above");
            behavior.draw(node, surface);
            if focused && node.focus_indicator {
                behavior.draw_focus(node, surface);
            }
        }
        if let Some(node) = self.get_mut(id) {
            node.behavior = behavior;
        }

        if let Some(state) = self.state(id) {
            let focused_child = state.focused;
            let back_to_front: Vec<NodeId> = state.children.iter_back_to_front().collect();
            for child in back_to_front {
                self.paint_node(child, surface, focused_child == Some(child));
            }
        }

        surface.restore();
    }
}
