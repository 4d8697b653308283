//! Declarative house decoration, flattened to quad instances.
//!
//! The house is a horizontal strip of rooms along X. Nothing here is a
//! scene graph: each frame the layout is flattened into parallel
//! position/color/scale/glow vectors that both frontends upload as
//! instance data. The only animated inputs are wall-clock time (LED
//! pulse) and the active section (room highlight).

use glam::{Vec3, Vec4};

use crate::constants::{
    ACTIVE_ROOM_GLOW, LED_PULSE_BASE, LED_PULSE_RATE, LED_PULSE_SPAN, SECTION_COUNT,
};

/// Room anchor X positions, entrance first, in traversal order.
pub const ROOM_ANCHOR_X: [f32; SECTION_COUNT] = [-50.0, -30.0, -10.0, 10.0, 30.0];

// Back-wall panel per room (entrance title wall, then the four rooms).
const ROOM_PANEL_COLORS: [[f32; 3]; SECTION_COUNT] = [
    [0.96, 0.96, 0.93], // entrance title wall
    [0.53, 0.81, 0.92], // about
    [1.0, 0.70, 0.73],  // projects
    [0.73, 0.88, 1.0],  // skills
    [0.73, 1.0, 0.79],  // contact
];

// Divider walls between rooms.
const DIVIDER_X: [f32; 5] = [-40.0, -20.0, 0.0, 20.0, 40.0];
const DIVIDER_COLORS: [[f32; 3]; 5] = [
    [0.99, 0.47, 0.66],
    [0.27, 0.72, 0.82],
    [0.98, 0.79, 0.14],
    [0.42, 0.36, 0.91],
    [0.0, 0.72, 0.58],
];

// Floor LED strip along the hallway.
const LED_COUNT: usize = 20;
const LED_SPACING: f32 = 5.0;
const LED_FIRST_X: f32 = -55.0;

const ROOM_PANEL_SCALE: f32 = 6.0;
const DIVIDER_SCALE: f32 = 3.0;
const LED_SCALE: f32 = 0.5;
const ROOM_PANEL_IDLE_GLOW: f32 = 0.2;
const DIVIDER_GLOW: f32 = 0.1;

/// Flattened instance buffers for one frame.
pub struct SceneInstances {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec4>,
    pub scales: Vec<f32>,
    pub glows: Vec<f32>,
}

impl SceneInstances {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Total instances produced by [`build`]; frontends size GPU buffers to it.
pub const fn instance_count() -> usize {
    SECTION_COUNT + DIVIDER_X.len() + LED_COUNT
}

/// Flatten the layout for one frame.
pub fn build(now_sec: f32, active_section: Option<usize>) -> SceneInstances {
    let capacity = instance_count();
    let mut positions = Vec::with_capacity(capacity);
    let mut colors = Vec::with_capacity(capacity);
    let mut scales = Vec::with_capacity(capacity);
    let mut glows = Vec::with_capacity(capacity);

    for (i, &x) in ROOM_ANCHOR_X.iter().enumerate() {
        positions.push(Vec3::new(x, 2.0, -8.0));
        colors.push(Vec4::from((Vec3::from(ROOM_PANEL_COLORS[i]), 1.0)));
        scales.push(ROOM_PANEL_SCALE);
        let glow = if active_section == Some(i) {
            ROOM_PANEL_IDLE_GLOW + ACTIVE_ROOM_GLOW
        } else {
            ROOM_PANEL_IDLE_GLOW
        };
        glows.push(glow);
    }

    for (i, &x) in DIVIDER_X.iter().enumerate() {
        positions.push(Vec3::new(x, 2.5, 0.0));
        colors.push(Vec4::from((Vec3::from(DIVIDER_COLORS[i]), 1.0)));
        scales.push(DIVIDER_SCALE);
        glows.push(DIVIDER_GLOW);
    }

    for i in 0..LED_COUNT {
        let x = LED_FIRST_X + i as f32 * LED_SPACING;
        positions.push(Vec3::new(x, 0.3, 8.0));
        let rgb = hsl_to_rgb(i as f32 * 18.0 + 180.0, 0.8, 0.5);
        colors.push(Vec4::from((Vec3::from(rgb), 0.95)));
        scales.push(LED_SCALE);
        glows.push(LED_PULSE_BASE + (now_sec * LED_PULSE_RATE + i as f32).sin() * LED_PULSE_SPAN);
    }

    SceneInstances {
        positions,
        colors,
        scales,
        glows,
    }
}

/// Hue in degrees, saturation/lightness in \[0, 1\].
pub fn hsl_to_rgb(hue_deg: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let hue = hue_deg.rem_euclid(360.0);
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - ((hue / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = lightness - c / 2.0;
    let (r, g, b) = match hue as u32 / 60 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r + m, g + m, b + m]
}
