//! Semantic role tags binding skin nodes to player functions.
//!
//! A role names *what* a node means to the player (Play, Volume, Playlist…)
//! and is bound one-to-one to a required concrete widget kind. The catalog
//! is the static lookup used when a tree is reconstructed from serialized
//! skin data: one constructible node per tag, checked by exact kind match at
//! assignment time rather than by runtime type introspection.

use crate::error::{Error, Result};
use crate::widget::ControlNode;
use std::collections::HashMap;

/// Enumerated semantic roles a skin node can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticRole {
    Play,
    Pause,
    Stop,
    PreviousTrack,
    NextTrack,
    OpenFile,
    Volume,
    Balance,
    Position,
    Playlist,
    TrackTitle,
    TimeDisplay,
    Background,
}

impl SemanticRole {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Play" => Some(Self::Play),
            "Pause" => Some(Self::Pause),
            "Stop" => Some(Self::Stop),
            "PreviousTrack" => Some(Self::PreviousTrack),
            "NextTrack" => Some(Self::NextTrack),
            "OpenFile" => Some(Self::OpenFile),
            "Volume" => Some(Self::Volume),
            "Balance" => Some(Self::Balance),
            "Position" => Some(Self::Position),
            "Playlist" => Some(Self::Playlist),
            "TrackTitle" => Some(Self::TrackTitle),
            "TimeDisplay" => Some(Self::TimeDisplay),
            "Background" => Some(Self::Background),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Pause => "Pause",
            Self::Stop => "Stop",
            Self::PreviousTrack => "PreviousTrack",
            Self::NextTrack => "NextTrack",
            Self::OpenFile => "OpenFile",
            Self::Volume => "Volume",
            Self::Balance => "Balance",
            Self::Position => "Position",
            Self::Playlist => "Playlist",
            Self::TrackTitle => "TrackTitle",
            Self::TimeDisplay => "TimeDisplay",
            Self::Background => "Background",
        }
    }
}

/// Factory producing a fresh, unattached node for a role.
pub type NodeFactory = Box<dyn Fn() -> ControlNode>;

/// Catalog entry: human-readable name, required widget kind, constructor.
pub struct RoleEntry {
    pub display_name: &'static str,
    pub kind: &'static str,
    factory: NodeFactory,
}

/// Role → entry lookup, built once at startup by the widget collaborator.
#[derive(Default)]
pub struct RoleCatalog {
    entries: HashMap<SemanticRole, RoleEntry>,
}

impl RoleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the constructible widget kind for a role. Later
    /// registrations replace earlier ones.
    pub fn register(
        &mut self,
        role: SemanticRole,
        display_name: &'static str,
        kind: &'static str,
        factory: NodeFactory,
    ) {
        self.entries.insert(
            role,
            RoleEntry {
                display_name,
                kind,
                factory,
            },
        );
    }

    pub fn display_name(&self, role: SemanticRole) -> Option<&'static str> {
        self.entries.get(&role).map(|e| e.display_name)
    }

    /// The widget kind a node must have to carry `role`.
    pub fn required_kind(&self, role: SemanticRole) -> Option<&'static str> {
        self.entries.get(&role).map(|e| e.kind)
    }

    /// Reject a role/kind pairing that does not match the catalog exactly.
    pub fn check(&self, role: SemanticRole, kind: &str) -> Result<()> {
        let expected = self
            .required_kind(role)
            .ok_or_else(|| Error::UnknownRole(role.as_str().to_string()))?;
        if expected != kind {
            return Err(Error::RoleKindMismatch {
                role: role.as_str().to_string(),
                expected: expected.to_string(),
                actual: kind.to_string(),
            });
        }
        Ok(())
    }

    /// Construct the node registered for `role`, with the role already
    /// assigned.
    pub fn create(&self, role: SemanticRole) -> Result<ControlNode> {
        let entry = self
            .entries
            .get(&role)
            .ok_or_else(|| Error::UnknownRole(role.as_str().to_string()))?;
        let mut node = (entry.factory)();
        self.check(role, node.kind())?;
        node.role = Some(role);
        Ok(node)
    }
}

impl std::fmt::Debug for RoleCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleCatalog")
            .field("roles", &self.entries.len())
            .finish()
    }
}
