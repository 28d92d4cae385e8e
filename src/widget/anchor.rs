//! Per-edge anchor flags and the resize adjustment they drive.

/// Which edges of a node keep a fixed margin to its parent when the parent
/// resizes. Both axes resolve independently through the same four cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Default for Anchors {
    /// Left and top only: the node stays put when the parent resizes.
    fn default() -> Self {
        Self {
            left: true,
            top: true,
            right: false,
            bottom: false,
        }
    }
}

impl Anchors {
    pub fn new(left: bool, top: bool, right: bool, bottom: bool) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// All four edges pinned: the node stretches with the parent.
    pub fn all() -> Self {
        Self::new(true, true, true, true)
    }

    /// No edge pinned: the node re-centers proportionally.
    pub fn none() -> Self {
        Self::new(false, false, false, false)
    }
}

/// Recompute one axis of a child after its parent resized from
/// `old_parent` to `new_parent` extent. Returns the new (start, extent).
pub(crate) fn adjust_axis(
    start: f32,
    extent: f32,
    near: bool,
    far: bool,
    old_parent: f32,
    new_parent: f32,
) -> (f32, f32) {
    match (near, far) {
        // Neither edge pinned: scale the child's center by the parent ratio.
        (false, false) => {
            if old_parent <= 0.0 {
                return (start, extent);
            }
            let center = start + extent / 2.0;
            (center * new_parent / old_parent - extent / 2.0, extent)
        }
        // Both pinned: keep the near edge, preserve the far margin.
        (true, true) => {
            let far_margin = old_parent - (start + extent);
            (start, new_parent - far_margin - start)
        }
        // Far edge only: shift by the exact extent delta.
        (false, true) => (start + new_parent - old_parent, extent),
        // Near edge only (default): nothing to do.
        (true, false) => (start, extent),
    }
}
