//! Notification hooks exposed to the application layer.
//!
//! Every input and structural event a node handles is also announced to
//! external subscribers, so the application can wire a skin node's clicks to
//! playback actions without subclassing. Each (node, kind) pair carries an
//! ordered list of independent subscriptions; subscribers observe only and
//! never mutate the tree from inside a callback.

use crate::geom::{Point, Size};
use crate::input::{KeyInput, PointerInput};
use crate::widget::NodeId;
use std::collections::HashMap;

/// Event kinds a subscriber can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    Press,
    Release,
    PointerMove,
    Wheel,
    Enter,
    Leave,
    Click,
    DoubleClick,
    Moved,
    Resized,
    KeyDown,
    Added,
    Removed,
    /// Value-style change raised by concrete widgets (checked state,
    /// slider position, and the like).
    StateChanged,
}

impl HookKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Press" => Some(Self::Press),
            "Release" => Some(Self::Release),
            "PointerMove" => Some(Self::PointerMove),
            "Wheel" => Some(Self::Wheel),
            "Enter" => Some(Self::Enter),
            "Leave" => Some(Self::Leave),
            "Click" => Some(Self::Click),
            "DoubleClick" => Some(Self::DoubleClick),
            "Moved" => Some(Self::Moved),
            "Resized" => Some(Self::Resized),
            "KeyDown" => Some(Self::KeyDown),
            "Added" => Some(Self::Added),
            "Removed" => Some(Self::Removed),
            "StateChanged" => Some(Self::StateChanged),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Press => "Press",
            Self::Release => "Release",
            Self::PointerMove => "PointerMove",
            Self::Wheel => "Wheel",
            Self::Enter => "Enter",
            Self::Leave => "Leave",
            Self::Click => "Click",
            Self::DoubleClick => "DoubleClick",
            Self::Moved => "Moved",
            Self::Resized => "Resized",
            Self::KeyDown => "KeyDown",
            Self::Added => "Added",
            Self::Removed => "Removed",
            Self::StateChanged => "StateChanged",
        }
    }
}

/// Payload delivered with a hook. Pointer positions are in the coordinate
/// space of the node the hook fires on.
#[derive(Debug, Clone)]
pub enum HookArgs {
    Pointer(PointerInput),
    Key(KeyInput),
    Moved { from: Point, to: Point },
    Resized { from: Size, to: Size },
    None,
}

/// Callback invoked with the node the event fired on and its payload.
pub type HookFn = Box<dyn FnMut(NodeId, &HookArgs)>;

/// Handle returned by [`HookRegistry::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Per-node, per-kind subscriber lists.
#[derive(Default)]
pub struct HookRegistry {
    handlers: HashMap<NodeId, HashMap<HookKind, Vec<(SubscriptionId, HookFn)>>>,
    next_id: u64,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a subscriber; multiple subscribers per (node, kind) fire in
    /// subscription order.
    pub fn subscribe(&mut self, node: NodeId, kind: HookKind, f: HookFn) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.handlers
            .entry(node)
            .or_default()
            .entry(kind)
            .or_default()
            .push((id, f));
        id
    }

    /// Detach a single subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for by_kind in self.handlers.values_mut() {
            for list in by_kind.values_mut() {
                if let Some(pos) = list.iter().position(|(sid, _)| *sid == id) {
                    list.remove(pos);
                    return true;
                }
            }
        }
        false
    }

    /// Drop every subscription attached to a node.
    pub fn remove_node(&mut self, node: NodeId) {
        self.handlers.remove(&node);
    }

    pub(crate) fn fire(&mut self, node: NodeId, kind: HookKind, args: &HookArgs) {
        if let Some(list) = self
            .handlers
            .get_mut(&node)
            .and_then(|by_kind| by_kind.get_mut(&kind))
        {
            for (_, f) in list.iter_mut() {
                f(node, args);
            }
        }
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count: usize = self
            .handlers
            .values()
            .flat_map(|m| m.values())
            .map(Vec::len)
            .sum();
        f.debug_struct("HookRegistry")
            .field("nodes", &self.handlers.len())
            .field("subscriptions", &count)
            .finish()
    }
}
