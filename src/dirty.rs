//! Accumulated dirty region.
//!
//! Invalidation requests raised while handling input, layout, or animation
//! ticks are recorded here and honored on the next paint pass, never
//! processed synchronously inside the current one.

use crate::geom::Rect;

/// Set of invalid rectangles in root-absolute coordinates.
///
/// Adding a rectangle already covered by an accumulated one is a no-op, so
/// repeated invalidation of the same area leaves the region unchanged.
#[derive(Debug, Clone, Default)]
pub struct DirtyRegion {
    rects: Vec<Rect>,
}

impl DirtyRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, rect: Rect) {
        if rect.size().is_empty() {
            return;
        }
        if self.rects.iter().any(|r| r.contains_rect(&rect)) {
            return;
        }
        // Drop accumulated rects the new one swallows.
        self.rects.retain(|r| !rect.contains_rect(r));
        self.rects.push(rect);
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Bounding box of the accumulated region, if any.
    pub fn bounding(&self) -> Option<Rect> {
        let mut iter = self.rects.iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, r| acc.union(r)))
    }

    /// Drain the accumulated rectangles, leaving the region empty.
    pub fn take(&mut self) -> Vec<Rect> {
        std::mem::take(&mut self.rects)
    }
}
