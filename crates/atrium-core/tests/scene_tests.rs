// Host-side tests for the flattened house decoration.

use atrium_core::{
    scene, KeyframeTable, LED_PULSE_BASE, LED_PULSE_SPAN, ROOM_ANCHOR_X, SECTION_COUNT,
    STAGES_PER_SECTION,
};

#[test]
fn build_fills_every_channel_to_the_declared_count() {
    let instances = scene::build(0.0, None);
    assert_eq!(instances.len(), scene::instance_count());
    assert_eq!(instances.positions.len(), instances.colors.len());
    assert_eq!(instances.positions.len(), instances.scales.len());
    assert_eq!(instances.positions.len(), instances.glows.len());
    assert!(!instances.is_empty());
}

#[test]
fn instance_channels_stay_in_sane_ranges() {
    let instances = scene::build(3.7, Some(1));
    for (i, color) in instances.colors.iter().enumerate() {
        for channel in color.to_array() {
            assert!(
                (0.0..=1.0).contains(&channel),
                "color channel {channel} out of range at instance {i}"
            );
        }
    }
    for (i, &scale) in instances.scales.iter().enumerate() {
        assert!(scale > 0.0, "non-positive scale at instance {i}");
    }
    for (i, &glow) in instances.glows.iter().enumerate() {
        assert!(glow.is_finite() && glow >= 0.0, "bad glow at instance {i}");
    }
}

#[test]
fn only_the_active_room_panel_gets_the_highlight() {
    let idle = scene::build(0.0, None);
    let active = scene::build(0.0, Some(2));
    for section in 0..SECTION_COUNT {
        if section == 2 {
            assert!(
                active.glows[section] > idle.glows[section],
                "active room {section} should glow brighter"
            );
        } else {
            assert_eq!(
                active.glows[section], idle.glows[section],
                "inactive room {section} must not change"
            );
        }
    }
}

#[test]
fn led_pulse_breathes_with_the_clock_within_bounds() {
    let led_range = SECTION_COUNT + 5..scene::instance_count();
    let early = scene::build(0.0, None);
    let later = scene::build(1.0, None);
    let mut moved = false;
    for i in led_range {
        let glow = later.glows[i];
        assert!(
            glow >= LED_PULSE_BASE - LED_PULSE_SPAN - 1e-5
                && glow <= LED_PULSE_BASE + LED_PULSE_SPAN + 1e-5,
            "LED glow {glow} outside pulse envelope at instance {i}"
        );
        if (glow - early.glows[i]).abs() > 1e-4 {
            moved = true;
        }
    }
    assert!(moved, "LED pulse should vary with the animation clock");
}

#[test]
fn room_anchors_line_up_with_the_camera_path() {
    let table = KeyframeTable::house_path();
    for section in 0..SECTION_COUNT {
        let overview = table.get(section * STAGES_PER_SECTION).unwrap();
        assert_eq!(
            overview.target.x, ROOM_ANCHOR_X[section],
            "section {section} overview should look at its room anchor"
        );
    }
}

#[test]
fn hsl_conversion_matches_known_colors() {
    assert_eq!(scene::hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
    let green = scene::hsl_to_rgb(120.0, 1.0, 0.5);
    assert!((green[0]).abs() < 1e-6 && (green[1] - 1.0).abs() < 1e-6 && green[2].abs() < 1e-6);
    // Zero saturation collapses to gray at the given lightness.
    let gray = scene::hsl_to_rgb(200.0, 0.0, 0.25);
    for channel in gray {
        assert!((channel - 0.25).abs() < 1e-6);
    }
    // Hue wraps every full turn.
    assert_eq!(
        scene::hsl_to_rgb(480.0, 0.8, 0.5),
        scene::hsl_to_rgb(120.0, 0.8, 0.5)
    );
}
