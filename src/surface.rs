//! Drawing-surface boundary.
//!
//! The core never draws pixels itself; it manipulates transform state and
//! clip rectangles on a surface supplied by the rendering collaborator, and
//! asks that collaborator to sample single pixels for alpha-tested
//! hit-testing. Concrete widget behaviors downcast through [`Surface::as_any`]
//! to reach the real drawing API of whatever surface the host provides.

use crate::geom::{Point, Rect};
use std::any::Any;

/// Transform/clip surface handed to widget draw routines.
pub trait Surface {
    /// Push the current transform and clip state.
    fn save(&mut self);
    /// Pop back to the most recently saved state.
    fn restore(&mut self);
    /// Translate the current transform.
    fn translate(&mut self, dx: f32, dy: f32);
    /// Intersect the current clip with `rect` (in current-transform space).
    fn intersect_clip(&mut self, rect: Rect);
    /// Escape hatch for concrete drawing operations.
    fn as_any(&mut self) -> &mut dyn Any;
}

/// Single-pixel render probe used for alpha-tested hit-testing.
///
/// The implementation renders `draw` into a 1×1 target positioned over the
/// node-local point `at` and reports the resulting alpha. Irregularly shaped
/// skin art thereby gets clickable regions matching its visible pixels
/// instead of its bounding box.
pub trait AlphaSampler {
    fn sample_alpha(&mut self, at: Point, draw: &mut dyn FnMut(&mut dyn Surface)) -> u8;
}
