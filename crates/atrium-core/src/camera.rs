//! Camera types shared with the web and native frontends.
//!
//! These types intentionally avoid referencing platform-specific APIs and
//! are suitable for use on both native and web targets. The frontends
//! consume them to build view/projection matrices for the walkthrough
//! camera; the scroll driver only ever talks to the [`CameraRig`] trait.

use glam::{Mat4, Vec3};

use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_MIN_ZOOM, CAMERA_NEAR,
};

/// The per-frame output of the scroll driver: where the camera sits, what
/// it looks at, and how far it is zoomed in. Recomputed every frame and
/// never stored beyond the frame that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub zoom: f32,
}

/// Mutation capability for whatever camera actually renders the scene.
///
/// The driver owns no geometry and no renderer; it computes a pose and
/// hands it to this interface, so the interpolation core can be tested
/// without any GPU surface behind it.
pub trait CameraRig {
    fn set_position(&mut self, position: Vec3);
    fn look_at(&mut self, target: Vec3);
    fn set_zoom(&mut self, zoom: f32);
    fn refresh_projection(&mut self);

    fn apply_pose(&mut self, pose: &CameraPose) {
        self.set_position(pose.position);
        self.look_at(pose.target);
        self.set_zoom(pose.zoom);
        self.refresh_projection();
    }
}

/// Right-handed perspective camera with a three.js-style zoom factor:
/// zoom narrows the effective field of view rather than dollying the eye.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub zoom: f32,
    projection: Mat4,
}

impl Camera {
    /// Camera configured for the walkthrough: fov 75°, near 0.1, far 1000.
    pub fn walkthrough(aspect: f32) -> Self {
        let mut camera = Self {
            eye: Vec3::new(0.0, 2.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
            zoom: 1.0,
            projection: Mat4::IDENTITY,
        };
        camera.refresh_projection();
        camera
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect.max(1e-3);
        self.refresh_projection();
    }

    /// Effective vertical fov after applying zoom.
    pub fn effective_fovy(&self) -> f32 {
        let zoom = self.zoom.max(CAMERA_MIN_ZOOM);
        2.0 * ((self.fovy_radians * 0.5).tan() / zoom).atan()
    }

    /// Clip-space projection matrix as of the last [`CameraRig::refresh_projection`].
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// View matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

impl CameraRig for Camera {
    fn set_position(&mut self, position: Vec3) {
        self.eye = position;
    }

    fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = if zoom.is_finite() {
            zoom.max(CAMERA_MIN_ZOOM)
        } else {
            1.0
        };
    }

    fn refresh_projection(&mut self) {
        self.projection =
            Mat4::perspective_rh(self.effective_fovy(), self.aspect, self.znear, self.zfar);
    }
}
