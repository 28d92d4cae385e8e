//! Tab-order focus chain.
//!
//! Eligibility is tab-stop or being a container; ordering is (tab index,
//! top, left) ascending for forward traversal and the reverse for backward.
//! `do_tab` lets a focused child container exhaust its own chain before this
//! container advances its focused-child pointer.

use super::tree::UiTree;
use super::NodeId;
use std::cmp::Ordering;

type TabKey = (i32, f32, f32);

fn key_cmp(a: &TabKey, b: &TabKey) -> Ordering {
    a.0.cmp(&b.0)
        .then_with(|| a.1.total_cmp(&b.1))
        .then_with(|| a.2.total_cmp(&b.2))
}

impl UiTree {
    fn tab_key(&self, id: NodeId) -> Option<TabKey> {
        let node = self.get(id)?;
        Some((node.tab_index(), node.bounds().y, node.bounds().x))
    }

    /// The next (or previous) tab-eligible sibling after `current` in tab
    /// order. `None` for `current` starts from the beginning (or end).
    pub fn next_control(
        &self,
        container: NodeId,
        current: Option<NodeId>,
        forward: bool,
    ) -> Option<NodeId> {
        let state = self.state(container)?;
        let mut eligible: Vec<(TabKey, NodeId)> = state
            .children
            .iter()
            .filter_map(|c| {
                let node = self.get(c)?;
                if node.is_tab_stop() || node.is_container() {
                    Some(((node.tab_index(), node.bounds().y, node.bounds().x), c))
                } else {
                    None
                }
            })
            .collect();
        eligible.sort_by(|a, b| key_cmp(&a.0, &b.0));
        if !forward {
            eligible.reverse();
        }

        let Some(current) = current else {
            return eligible.first().map(|e| e.1);
        };
        if let Some(pos) = eligible.iter().position(|e| e.1 == current) {
            return eligible.get(pos + 1).map(|e| e.1);
        }
        // Current is not eligible itself; advance past its ordering position.
        let key = self.tab_key(current)?;
        eligible
            .iter()
            .find(|e| {
                if forward {
                    key_cmp(&e.0, &key) == Ordering::Greater
                } else {
                    key_cmp(&e.0, &key) == Ordering::Less
                }
            })
            .map(|e| e.1)
    }

    /// Advance the focus chain one step. Returns false when this container's
    /// chain is exhausted; the caller decides whether to wrap around by
    /// invoking again from the start.
    pub fn do_tab(&mut self, container: NodeId, forward: bool, show_indicator: bool) -> bool {
        if self.state(container).is_none() {
            return false;
        }
        let focused = self.focused_child(container);

        // A focused child container gets to exhaust its own chain first.
        if let Some(inner) = focused {
            if self.get(inner).is_some_and(|n| n.is_container())
                && self.do_tab(inner, forward, show_indicator)
            {
                return true;
            }
        }

        match self.next_control(container, focused, forward) {
            Some(next) => {
                self.focus_child(container, Some(next), show_indicator);
                true
            }
            None => {
                self.focus_child(container, None, show_indicator);
                false
            }
        }
    }

    /// The container's focused child, validated against current membership.
    pub fn focused_child(&self, container: NodeId) -> Option<NodeId> {
        let state = self.state(container)?;
        state.focused.filter(|&f| state.children.contains(f))
    }

    /// Point the container's focus at `child` (or clear it), updating the
    /// focus-indicator request and repainting both affected nodes.
    pub fn focus_child(&mut self, container: NodeId, child: Option<NodeId>, show_indicator: bool) {
        let Some(state) = self.state_mut(container) else {
            return;
        };
        let old = state.focused;
        state.focused = child;
        if let Some(old) = old {
            self.invalidate(old);
        }
        if let Some(new) = child {
            if let Some(node) = self.get_mut(new) {
                node.focus_indicator = show_indicator;
            }
            self.invalidate(new);
        }
    }
}
