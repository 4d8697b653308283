//! Scroll-to-camera interpolation.
//!
//! Maps a normalized scroll offset into a continuous keyframe-space cursor,
//! splits it into a bracketing segment plus a local factor, eases the
//! factor, and lerps position/target/zoom between the two keyframes. Runs
//! once per rendered frame inside the host's frame callback; nothing here
//! blocks, allocates, or panics.

use glam::Vec3;

use crate::camera::{CameraPose, CameraRig};
use crate::constants::{BREATHING_AMPLITUDE, BREATHING_RATE, BREATHING_Z_RATIO};
use crate::easing::ease_in_out_expo;
use crate::path::KeyframeTable;

/// Low-amplitude periodic sway layered on the interpolated position.
/// Purely cosmetic; nulls out at `now_sec = 0` or with amplitude 0.
#[derive(Clone, Copy, Debug)]
pub struct Breathing {
    pub amplitude: f32,
    pub rate: f32,
}

impl Breathing {
    pub const OFF: Breathing = Breathing {
        amplitude: 0.0,
        rate: 0.0,
    };
}

impl Default for Breathing {
    fn default() -> Self {
        Self {
            amplitude: BREATHING_AMPLITUDE,
            rate: BREATHING_RATE,
        }
    }
}

/// Converts scroll progress into camera poses along a [`KeyframeTable`].
pub struct ScrollCameraDriver {
    table: KeyframeTable,
    breathing: Breathing,
    last_pose: CameraPose,
}

impl ScrollCameraDriver {
    pub fn new(table: KeyframeTable) -> Self {
        let first = table.first();
        let last_pose = CameraPose {
            position: first.position,
            target: first.target,
            zoom: first.zoom,
        };
        Self {
            table,
            breathing: Breathing::default(),
            last_pose,
        }
    }

    pub fn with_breathing(mut self, breathing: Breathing) -> Self {
        self.breathing = breathing;
        self
    }

    pub fn table(&self) -> &KeyframeTable {
        &self.table
    }

    /// Continuous keyframe-space coordinate for a scroll offset.
    /// Non-finite input fails closed to 0.
    pub fn cursor(&self, progress: f32) -> f32 {
        sanitize_progress(progress) * self.table.segments() as f32
    }

    /// Bracketing segment index and local interpolation factor.
    ///
    /// The base index is clamped to `[0, segments - 1]` so the upper
    /// keyframe never runs past the end of the table; at the clamped top
    /// edge the local factor evaluates to exactly 1.0, which resolves the
    /// pose to the final keyframe.
    pub fn segment(&self, progress: f32) -> (usize, f32) {
        let cursor = self.cursor(progress);
        let base = (cursor.floor() as usize).min(self.table.segments() - 1);
        (base, cursor - base as f32)
    }

    /// Camera pose for a scroll offset at a wall-clock instant.
    ///
    /// A table-access fault cannot occur for indices produced by
    /// [`segment`](Self::segment); if it somehow does, the driver degrades
    /// to holding the last valid pose instead of surfacing an error into
    /// the frame loop.
    pub fn pose_at(&mut self, progress: f32, now_sec: f32) -> CameraPose {
        let (base, local_t) = self.segment(progress);
        let (from, to) = match (self.table.get(base), self.table.get(base + 1)) {
            (Ok(from), Ok(to)) => (from, to),
            _ => return self.last_pose,
        };

        let eased = ease_in_out_expo(local_t);
        let mut position = from.position.lerp(to.position, eased);
        let target = from.target.lerp(to.target, eased);
        let zoom = from.zoom + (to.zoom - from.zoom) * eased;

        let sway = (now_sec * self.breathing.rate).sin() * self.breathing.amplitude;
        position += Vec3::new(0.0, sway, sway * BREATHING_Z_RATIO);

        let pose = CameraPose {
            position,
            target,
            zoom,
        };
        self.last_pose = pose;
        pose
    }

    /// Compute the pose for this frame and apply it to the render camera.
    pub fn drive(&mut self, rig: &mut dyn CameraRig, progress: f32, now_sec: f32) -> CameraPose {
        let pose = self.pose_at(progress, now_sec);
        rig.apply_pose(&pose);
        pose
    }
}

/// Clamp scroll progress to \[0, 1\], failing closed on NaN/infinite input.
pub fn sanitize_progress(progress: f32) -> f32 {
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        log::warn!("non-finite scroll progress {progress}; clamping to 0");
        0.0
    }
}
