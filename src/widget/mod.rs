//! Widget tree: nodes, anchors, ordering, ownership, input routing.

mod anchor;
mod children;
mod focus;
mod layout;
mod node;
mod paint;
mod routing;
mod tree;

pub use anchor::Anchors;
pub use children::ChildList;
pub use node::{Behavior, ContainerBehavior, ControlNode, Reactions, CONTAINER_KIND};
pub use tree::UiTree;

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique node handle. Ids are never reused, so handles retained
/// into a discarded tree fail lookups instead of aliasing new nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn next() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}
