//! Easing curves used by the camera driver and the smooth-scroll store.

/// Exponential ease-in-out over \[0, 1\].
///
/// Holds close to each endpoint for most of the segment and transitions
/// rapidly through the middle, which reads as "settle on a keyframe, then
/// snap to the next" rather than constant-velocity motion.
pub fn ease_in_out_expo(t: f32) -> f32 {
    if t.is_nan() || t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else if t < 0.5 {
        (20.0 * t - 10.0).exp2() / 2.0
    } else {
        (2.0 - (-20.0 * t + 10.0).exp2()) / 2.0
    }
}

/// Exponential ease-out over \[0, 1\], as used to settle smooth scrolling.
pub fn ease_out_expo(t: f32) -> f32 {
    if t.is_nan() || t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        (1.001 - (-10.0 * t).exp2()).min(1.0)
    }
}
