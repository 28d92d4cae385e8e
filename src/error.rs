use crate::widget::NodeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    #[error("node {0:?} is not a container")]
    NotAContainer(NodeId),

    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    CycleDetected { parent: NodeId, child: NodeId },

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("role {role} requires widget kind {expected}, got {actual}")]
    RoleKindMismatch {
        role: String,
        expected: String,
        actual: String,
    },

    #[error("animation has no frames: interval {interval_ms}ms, duration {duration_ms}ms")]
    EmptyAnimation { interval_ms: u64, duration_ms: u64 },

    #[error("visual states differ in size: {from_w}x{from_h} vs {to_w}x{to_h}")]
    StateSizeMismatch {
        from_w: u32,
        from_h: u32,
        to_w: u32,
        to_h: u32,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
