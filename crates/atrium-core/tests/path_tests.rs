// Host-side tests for the keyframe table and the built-in house path.

use atrium_core::{
    Keyframe, KeyframeTable, PathError, HOUSE_PATH, SECTION_COUNT, STAGES_PER_SECTION,
};
use glam::Vec3;

fn frame(x: f32, zoom: f32) -> Keyframe {
    Keyframe {
        position: Vec3::new(x, 0.0, 0.0),
        target: Vec3::ZERO,
        zoom,
    }
}

#[test]
fn house_path_has_one_keyframe_per_stage() {
    let table = KeyframeTable::house_path();
    assert_eq!(table.count(), SECTION_COUNT * STAGES_PER_SECTION);
    assert_eq!(table.segments(), table.count() - 1);
    assert_eq!(HOUSE_PATH.len(), table.count());
}

#[test]
fn house_path_passes_its_own_validation() {
    let table = KeyframeTable::house_path();
    let frames = (0..table.count())
        .map(|i| *table.get(i).unwrap())
        .collect::<Vec<_>>();
    assert!(KeyframeTable::new(frames).is_ok());
}

#[test]
fn house_path_zooms_are_positive_and_sections_run_left_to_right() {
    let table = KeyframeTable::house_path();
    for i in 0..table.count() {
        let keyframe = table.get(i).unwrap();
        assert!(keyframe.zoom > 0.0, "keyframe {i} has zoom {}", keyframe.zoom);
    }
    // Each section's overview keyframe sits further right than the last.
    let mut prev_x = f32::NEG_INFINITY;
    for section in 0..SECTION_COUNT {
        let overview = table.get(section * STAGES_PER_SECTION).unwrap();
        assert!(
            overview.position.x > prev_x,
            "section {section} overview is not to the right of the previous one"
        );
        prev_x = overview.position.x;
    }
}

#[test]
fn first_and_last_match_the_table_ends() {
    let table = KeyframeTable::house_path();
    assert_eq!(table.first(), table.get(0).unwrap());
    assert_eq!(table.last(), table.get(table.count() - 1).unwrap());
}

#[test]
fn out_of_range_access_is_a_typed_error() {
    let table = KeyframeTable::house_path();
    let len = table.count();
    match table.get(len) {
        Err(PathError::OutOfRange { index, len: reported }) => {
            assert_eq!(index, len);
            assert_eq!(reported, len);
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn construction_rejects_degenerate_paths() {
    assert_eq!(
        KeyframeTable::new(Vec::new()).unwrap_err(),
        PathError::TooShort(0)
    );
    assert_eq!(
        KeyframeTable::new(vec![frame(0.0, 1.0)]).unwrap_err(),
        PathError::TooShort(1)
    );
}

#[test]
fn construction_rejects_invalid_zoom() {
    for bad_zoom in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let err = KeyframeTable::new(vec![frame(0.0, 1.0), frame(1.0, bad_zoom)]).unwrap_err();
        match err {
            PathError::InvalidZoom { index, .. } => assert_eq!(index, 1),
            other => panic!("expected InvalidZoom for zoom {bad_zoom}, got {other:?}"),
        }
    }
}

#[test]
fn a_two_keyframe_path_is_the_minimum_viable_table() {
    let table = KeyframeTable::new(vec![frame(0.0, 1.0), frame(1.0, 2.0)]).unwrap();
    assert_eq!(table.count(), 2);
    assert_eq!(table.segments(), 1);
}
