//! Anchor-based resize propagation.

use super::anchor::adjust_axis;
use super::tree::UiTree;
use super::NodeId;
use crate::geom::{Rect, Size};

impl UiTree {
    /// Recompute every child's geometry from its anchor flags after the
    /// container grew/shrank from `old` to `new`. Runs through `set_bounds`,
    /// so a resized child container propagates to its own children in turn.
    pub(crate) fn propagate_resize(&mut self, container: NodeId, old: Size, new: Size) {
        let Some(state) = self.state(container) else {
            return;
        };
        let children: Vec<NodeId> = state.children.iter().collect();
        for child in children {
            let Some(node) = self.get(child) else {
                continue;
            };
            let bounds = node.bounds();
            let anchors = node.anchors();
            let (x, width) = adjust_axis(
                bounds.x,
                bounds.width,
                anchors.left,
                anchors.right,
                old.width,
                new.width,
            );
            let (y, height) = adjust_axis(
                bounds.y,
                bounds.height,
                anchors.top,
                anchors.bottom,
                old.height,
                new.height,
            );
            let adjusted = Rect::new(x, y, width, height);
            if adjusted != bounds {
                self.set_bounds(child, adjusted);
            }
        }
    }
}
