//! Virtual smooth-scroll store.
//!
//! The walkthrough never reads a real scrollbar; wheel and navigation
//! input move a target scroll-top inside a virtual document, and each
//! frame the visible scroll-top eases toward that target with an
//! exponential approach. The driver only ever sees the normalized
//! [`offset`](ScrollState::offset), on the frame after the input landed.

use crate::constants::{SCROLL_SETTLE_DURATION_SEC, SCROLL_SNAP_EPSILON_PX};
use crate::driver::sanitize_progress;
use crate::easing::ease_out_expo;

pub struct ScrollState {
    scroll_top: f32,
    target_top: f32,
    scroll_height: f32,
}

impl ScrollState {
    pub fn new(scroll_height: f32) -> Self {
        Self {
            scroll_top: 0.0,
            target_top: 0.0,
            scroll_height: sanitize_height(scroll_height),
        }
    }

    /// Resize the virtual document, preserving the relative position of
    /// both the visible top and the target (a viewport resize must not
    /// teleport the camera).
    pub fn set_scroll_height(&mut self, scroll_height: f32) {
        let offset = self.offset();
        let target_offset = (self.target_top / self.scroll_height).clamp(0.0, 1.0);
        self.scroll_height = sanitize_height(scroll_height);
        self.scroll_top = offset * self.scroll_height;
        self.target_top = target_offset * self.scroll_height;
    }

    /// Accumulate a wheel delta (positive scrolls down) into the target.
    pub fn add_wheel_delta(&mut self, delta_px: f32) {
        if !delta_px.is_finite() {
            return;
        }
        self.target_top = (self.target_top + delta_px).clamp(0.0, self.scroll_height);
    }

    /// Fire-and-forget navigation jump; the motion happens over the
    /// following frames as the store settles.
    pub fn jump_to_offset(&mut self, offset: f32) {
        self.target_top = sanitize_progress(offset) * self.scroll_height;
    }

    /// Ease the visible top toward the target. Call once per frame.
    pub fn step(&mut self, dt_sec: f32) {
        if !dt_sec.is_finite() || dt_sec <= 0.0 {
            return;
        }
        let diff = self.target_top - self.scroll_top;
        if diff.abs() <= SCROLL_SNAP_EPSILON_PX {
            self.scroll_top = self.target_top;
            return;
        }
        let alpha = ease_out_expo(dt_sec / SCROLL_SETTLE_DURATION_SEC);
        self.scroll_top += diff * alpha;
    }

    /// Normalized scroll progress in \[0, 1\].
    pub fn offset(&self) -> f32 {
        (self.scroll_top / self.scroll_height).clamp(0.0, 1.0)
    }

    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    pub fn target_top(&self) -> f32 {
        self.target_top
    }

    pub fn scroll_height(&self) -> f32 {
        self.scroll_height
    }

    /// True once the visible top has reached the target.
    pub fn is_settled(&self) -> bool {
        self.scroll_top == self.target_top
    }
}

fn sanitize_height(scroll_height: f32) -> f32 {
    if scroll_height.is_finite() {
        scroll_height.max(1.0)
    } else {
        1.0
    }
}
