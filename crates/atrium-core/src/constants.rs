// Shared camera/scroll tuning constants used by both web and native frontends.

// Walkthrough structure
pub const SECTION_COUNT: usize = 5; // entrance, about, projects, skills, contact
pub const STAGES_PER_SECTION: usize = 3; // overview, focus, detail

// Camera projection (matches the canvas setup: fov 75, near 0.1, far 1000)
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_MIN_ZOOM: f32 = 0.05; // floor for the projection zoom divisor

// Breathing sway added on top of the interpolated camera position
pub const BREATHING_AMPLITUDE: f32 = 0.02; // world units on y at peak
pub const BREATHING_RATE: f32 = 1.0; // radians per second
pub const BREATHING_Z_RATIO: f32 = 0.5; // z sway relative to y

// Virtual scroll store
pub const SCROLL_PAGES: f32 = 5.0; // document height in viewport heights
pub const SCROLL_SETTLE_DURATION_SEC: f32 = 1.2; // nominal settle time for the ease-out approach
pub const SCROLL_SNAP_EPSILON_PX: f32 = 0.5; // below this the store snaps to target

// Scene decoration
pub const LED_PULSE_BASE: f32 = 0.8; // idle LED glow
pub const LED_PULSE_SPAN: f32 = 0.4; // peak-to-idle glow swing
pub const LED_PULSE_RATE: f32 = 2.0; // radians per second
pub const ACTIVE_ROOM_GLOW: f32 = 1.0; // extra glow on the room being viewed
