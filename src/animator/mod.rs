//! Shared frame-advance scheduler for two-state crossfade animations.
//!
//! Any number of animations share one clock ticking at a fixed quantum,
//! driven by the host's periodic callback on the UI thread. Each animation
//! linearly blends a destination visual state over a source state, one
//! quantized step at a time, and invalidates its owner so the new frame gets
//! painted. Stopping returns the completion fraction so an opposite-direction
//! transition (hover-out reversing a hover-in) resumes from the same blended
//! frame instead of snapping.

mod blend;

use crate::error::{Error, Result};
use image::RgbaImage;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Minimum tick quantum in milliseconds; requested intervals are floored to
/// a whole number of these.
pub const TICK_QUANTUM_MS: u64 = 10;

/// Immutable bitmap state an animation blends between. Shared handles keep
/// attach cheap; the composited current frame is always separately owned.
pub type VisualState = Arc<RgbaImage>;

/// Callback invoked whenever an animation produces a new current frame.
pub type InvalidateFn = Box<dyn FnMut()>;

/// Callback invoked exactly once when a run reaches its final frame.
pub type CompleteFn = Box<dyn FnMut()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

/// One two-state crossfade: Idle → Running → Finished.
struct Animation {
    from: VisualState,
    to: VisualState,
    /// Ticks skipped between renders: round(interval/quantum) − 1.
    skip: u32,
    skip_left: u32,
    /// Total frame count: duration / interval.
    frames: u32,
    /// Monotonic within one run, bounded by [0, frames].
    frame: u32,
    running: bool,
    auto_detach: bool,
    on_invalidate: InvalidateFn,
    on_complete: Option<CompleteFn>,
    /// Fully recomposited from the untouched from/to states every render
    /// tick, so restarts, reversals, and concurrent animations never share a
    /// buffer.
    current: RgbaImage,
}

/// The shared scheduler.
#[derive(Default)]
pub struct FrameAnimator {
    animations: HashMap<AnimationId, Animation>,
    /// Detaches requested mid-flight, honored at the start of the next tick
    /// so the active set is never mutated while being iterated.
    pending_detach: Vec<AnimationId>,
    clock_running: bool,
    next_id: u64,
}

impl FrameAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a crossfade. `interval_ms` is floored to the tick quantum;
    /// the frame count is `duration_ms / interval` and must be at least one.
    /// Registering (re)starts the shared clock if it was idle. The animation
    /// itself stays idle until [`start`](Self::start).
    pub fn attach(
        &mut self,
        interval_ms: u64,
        duration_ms: u64,
        from: VisualState,
        to: VisualState,
        on_invalidate: InvalidateFn,
    ) -> Result<AnimationId> {
        if from.dimensions() != to.dimensions() {
            return Err(Error::StateSizeMismatch {
                from_w: from.width(),
                from_h: from.height(),
                to_w: to.width(),
                to_h: to.height(),
            });
        }
        let interval = interval_ms.max(TICK_QUANTUM_MS);
        let frames = (duration_ms / interval) as u32;
        if frames == 0 {
            return Err(Error::EmptyAnimation {
                interval_ms,
                duration_ms,
            });
        }
        let skip = (interval as f64 / TICK_QUANTUM_MS as f64).round() as u32 - 1;

        self.next_id += 1;
        let id = AnimationId(self.next_id);
        let current = (*from).clone();
        self.animations.insert(
            id,
            Animation {
                from,
                to,
                skip,
                skip_left: 0,
                frames,
                frame: 0,
                running: false,
                auto_detach: false,
                on_invalidate,
                on_complete: None,
                current,
            },
        );
        debug!(?id, interval, frames, skip, "attach animation");
        self.clock_running = true;
        Ok(id)
    }

    /// Detach automatically once a run completes.
    pub fn set_auto_detach(&mut self, id: AnimationId, auto_detach: bool) {
        if let Some(anim) = self.animations.get_mut(&id) {
            anim.auto_detach = auto_detach;
        }
    }

    /// Completion callback, fired exactly once per finished run.
    pub fn set_on_complete(&mut self, id: AnimationId, on_complete: CompleteFn) {
        if let Some(anim) = self.animations.get_mut(&id) {
            anim.on_complete = Some(on_complete);
        }
    }

    /// Begin (or resume) a run seeded at the given completion fraction.
    /// Restarts the shared clock. Returns false for an unknown id.
    pub fn start(&mut self, id: AnimationId, fraction: f32) -> bool {
        let Some(anim) = self.animations.get_mut(&id) else {
            return false;
        };
        anim.frame = (fraction.clamp(0.0, 1.0) * anim.frames as f32).round() as u32;
        anim.skip_left = 0;
        anim.running = true;
        self.clock_running = true;
        true
    }

    /// Halt a run and report how far it got, for a reverse transition to
    /// resume from the same blended frame.
    pub fn stop(&mut self, id: AnimationId) -> Option<f32> {
        let anim = self.animations.get_mut(&id)?;
        anim.running = false;
        Some(anim.frame as f32 / anim.frames as f32)
    }

    /// Queue removal from the clock; honored at the next tick start.
    pub fn detach(&mut self, id: AnimationId) {
        self.pending_detach.push(id);
    }

    pub fn is_attached(&self, id: AnimationId) -> bool {
        self.animations.contains_key(&id)
    }

    pub fn is_running(&self, id: AnimationId) -> bool {
        self.animations.get(&id).is_some_and(|a| a.running)
    }

    /// Completion fraction of a run, in [0, 1].
    pub fn progress(&self, id: AnimationId) -> Option<f32> {
        let anim = self.animations.get(&id)?;
        Some(anim.frame as f32 / anim.frames as f32)
    }

    /// The most recently composited frame.
    pub fn current_frame(&self, id: AnimationId) -> Option<&RgbaImage> {
        self.animations.get(&id).map(|a| &a.current)
    }

    /// Whether the host should keep driving [`tick`](Self::tick).
    pub fn clock_running(&self) -> bool {
        self.clock_running
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Advance the shared clock by one quantum: process queued detaches,
    /// stop the clock if nothing remains, otherwise step every running
    /// animation.
    pub fn tick(&mut self) {
        for id in self.pending_detach.drain(..) {
            if self.animations.remove(&id).is_some() {
                debug!(?id, "detach animation");
            }
        }
        if self.animations.is_empty() {
            self.clock_running = false;
            return;
        }

        let mut completed = Vec::new();
        for (&id, anim) in self.animations.iter_mut() {
            if !anim.running {
                continue;
            }
            if anim.skip_left > 0 {
                anim.skip_left -= 1;
                continue;
            }
            anim.skip_left = anim.skip;

            anim.frame += 1;
            let factor = anim.frame as f32 / anim.frames as f32;
            anim.current = blend::crossfade(&anim.from, &anim.to, factor);
            (anim.on_invalidate)();

            if anim.frame >= anim.frames {
                anim.running = false;
                completed.push(id);
            }
        }

        for id in completed {
            let Some(anim) = self.animations.get_mut(&id) else {
                continue;
            };
            if let Some(on_complete) = anim.on_complete.as_mut() {
                on_complete();
            }
            if anim.auto_detach {
                self.pending_detach.push(id);
            }
        }
    }
}

impl std::fmt::Debug for FrameAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameAnimator")
            .field("animations", &self.animations.len())
            .field("pending_detach", &self.pending_detach.len())
            .field("clock_running", &self.clock_running)
            .finish()
    }
}
