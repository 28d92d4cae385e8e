//! Widget tree dump and diagnostic utilities.

use crate::widget::{NodeId, UiTree};
use std::fmt::Write;

/// Render the subtree rooted at `root` as indented text, front-to-back in
/// z-order. Consumed by authoring tools and diagnostics.
pub fn dump_tree(tree: &UiTree, root: NodeId) -> String {
    let mut out = String::new();
    dump_node(tree, root, 0, &mut out);
    out
}

fn dump_node(tree: &UiTree, id: NodeId, depth: usize, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let indent = "  ".repeat(depth);
    let bounds = node.bounds();

    let _ = write!(out, "{indent}{}", node.kind());
    if let Some(name) = node.name() {
        let _ = write!(out, " \"{name}\"");
    }
    if let Some(role) = node.role() {
        let _ = write!(out, " [{}]", role.as_str());
    }
    let _ = write!(
        out,
        " ({}, {}) {}x{}",
        bounds.x, bounds.y, bounds.width, bounds.height
    );
    if !node.is_visible() {
        let _ = write!(out, " hidden");
    }
    if !node.is_enabled() {
        let _ = write!(out, " disabled");
    }
    if node.is_tab_stop() {
        let _ = write!(out, " tab={}", node.tab_index());
    }
    out.push('\n');

    if let Some(children) = node.children() {
        for child in children.iter() {
            dump_node(tree, child, depth + 1, out);
        }
    }
}
