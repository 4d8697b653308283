// Host-side tests for the virtual smooth-scroll store.

use atrium_core::{ease_out_expo, ScrollState, SectionTracker};

const FRAME: f32 = 1.0 / 60.0;

fn settle(scroll: &mut ScrollState) {
    for _ in 0..600 {
        scroll.step(FRAME);
        if scroll.is_settled() {
            return;
        }
    }
    panic!(
        "scroll failed to settle: top {} target {}",
        scroll.scroll_top(),
        scroll.target_top()
    );
}

#[test]
fn ease_out_expo_hits_exact_boundaries() {
    assert_eq!(ease_out_expo(0.0), 0.0);
    assert_eq!(ease_out_expo(1.0), 1.0);
    assert_eq!(ease_out_expo(f32::NAN), 0.0);
    let mut prev = 0.0_f32;
    for i in 0..=100 {
        let t = i as f32 / 100.0;
        let eased = ease_out_expo(t);
        assert!((0.0..=1.0).contains(&eased));
        assert!(eased >= prev, "ease-out curve regressed at t={t}");
        prev = eased;
    }
}

#[test]
fn wheel_deltas_accumulate_and_clamp() {
    let mut scroll = ScrollState::new(1000.0);
    scroll.add_wheel_delta(300.0);
    scroll.add_wheel_delta(300.0);
    assert_eq!(scroll.target_top(), 600.0);

    scroll.add_wheel_delta(10_000.0);
    assert_eq!(scroll.target_top(), 1000.0, "target must clamp at the bottom");
    scroll.add_wheel_delta(-50_000.0);
    assert_eq!(scroll.target_top(), 0.0, "target must clamp at the top");

    scroll.add_wheel_delta(f32::NAN);
    assert_eq!(scroll.target_top(), 0.0, "non-finite deltas are ignored");
}

#[test]
fn stepping_converges_monotonically_without_overshoot() {
    let mut scroll = ScrollState::new(1000.0);
    scroll.add_wheel_delta(750.0);
    let mut prev = scroll.scroll_top();
    for _ in 0..600 {
        scroll.step(FRAME);
        let top = scroll.scroll_top();
        assert!(top >= prev, "scroll top regressed while approaching target");
        assert!(top <= 750.0 + 1e-3, "scroll top overshot the target");
        prev = top;
        if scroll.is_settled() {
            break;
        }
    }
    assert!(scroll.is_settled(), "approach never reached the target");
    assert_eq!(scroll.scroll_top(), 750.0);
}

#[test]
fn offset_is_always_normalized() {
    let mut scroll = ScrollState::new(2000.0);
    assert_eq!(scroll.offset(), 0.0);
    scroll.add_wheel_delta(2000.0);
    settle(&mut scroll);
    assert_eq!(scroll.offset(), 1.0);
    assert!(scroll.offset().is_finite());
}

#[test]
fn jump_then_settle_reproduces_the_requested_section() {
    let tracker = SectionTracker::house();
    for section in 0..tracker.section_count() {
        let mut scroll = ScrollState::new(4500.0);
        scroll.jump_to_offset(tracker.jump_target(section));
        settle(&mut scroll);
        assert_eq!(
            tracker.sample(scroll.offset()).section,
            section,
            "jump to section {section} settled at offset {}",
            scroll.offset()
        );
    }
}

#[test]
fn jump_fails_closed_on_garbage_offsets() {
    let mut scroll = ScrollState::new(1000.0);
    scroll.jump_to_offset(f32::NAN);
    assert_eq!(scroll.target_top(), 0.0);
    scroll.jump_to_offset(7.0);
    assert_eq!(scroll.target_top(), 1000.0);
}

#[test]
fn resizing_preserves_relative_position() {
    let mut scroll = ScrollState::new(1000.0);
    scroll.jump_to_offset(0.5);
    settle(&mut scroll);
    assert!((scroll.offset() - 0.5).abs() < 1e-3);

    scroll.set_scroll_height(3000.0);
    assert!(
        (scroll.offset() - 0.5).abs() < 1e-3,
        "resize teleported the viewer to offset {}",
        scroll.offset()
    );
    assert!((scroll.target_top() - 1500.0).abs() < 2.0);
}

#[test]
fn zero_and_negative_dt_are_no_ops() {
    let mut scroll = ScrollState::new(1000.0);
    scroll.add_wheel_delta(500.0);
    let before = scroll.scroll_top();
    scroll.step(0.0);
    scroll.step(-1.0);
    scroll.step(f32::NAN);
    assert_eq!(scroll.scroll_top(), before);
}

#[test]
fn degenerate_heights_are_clamped() {
    let scroll = ScrollState::new(0.0);
    assert_eq!(scroll.scroll_height(), 1.0);
    let scroll = ScrollState::new(f32::NAN);
    assert_eq!(scroll.scroll_height(), 1.0);
}
