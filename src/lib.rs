//! Skinnable UI core
//!
//! The rendering and input core of a skin-driven media-player UI: a retained
//! widget tree whose visuals come entirely from externally supplied skin
//! graphics. Nodes carry geometry, anchors, and semantic roles; containers
//! own z-ordered children and route pointer/keyboard input; a shared frame
//! scheduler crossfades between two bitmap states on hover/press transitions.

pub mod animator;
pub mod config;
pub mod dirty;
pub mod dump;
pub mod error;
pub mod event;
pub mod geom;
pub mod input;
pub mod role;
pub mod root;
pub mod surface;
pub mod widget;

pub use error::{Error, Result};
pub use root::RootView;
pub use widget::{ControlNode, NodeId, UiTree};
