// Host-side tests for pure input helpers.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn pixel_mode_deltas_pass_through() {
    assert_eq!(wheel_delta_px(120.0, WHEEL_MODE_PIXEL, 800.0), 120.0);
    assert_eq!(wheel_delta_px(-53.5, WHEEL_MODE_PIXEL, 800.0), -53.5);
}

#[test]
fn line_and_page_modes_scale_to_pixels() {
    assert_eq!(
        wheel_delta_px(3.0, WHEEL_MODE_LINE, 800.0),
        3.0 * WHEEL_LINE_PX
    );
    assert_eq!(wheel_delta_px(-1.0, WHEEL_MODE_PAGE, 800.0), -800.0);
}

#[test]
fn unknown_delta_modes_fall_back_to_pixels() {
    assert_eq!(wheel_delta_px(40.0, 17, 800.0), 40.0);
}

#[test]
fn non_finite_deltas_are_dropped() {
    assert_eq!(wheel_delta_px(f64::NAN, WHEEL_MODE_PIXEL, 800.0), 0.0);
    assert_eq!(wheel_delta_px(f64::INFINITY, WHEEL_MODE_LINE, 800.0), 0.0);
}

#[test]
fn arrow_and_page_keys_step_sections() {
    assert_eq!(nav_command_for_key("ArrowRight"), Some(NavCommand::Next));
    assert_eq!(nav_command_for_key("PageDown"), Some(NavCommand::Next));
    assert_eq!(nav_command_for_key("ArrowLeft"), Some(NavCommand::Prev));
    assert_eq!(nav_command_for_key("PageUp"), Some(NavCommand::Prev));
    assert_eq!(nav_command_for_key("Home"), Some(NavCommand::First));
    assert_eq!(nav_command_for_key("End"), Some(NavCommand::Last));
}

#[test]
fn digit_keys_jump_to_sections() {
    assert_eq!(nav_command_for_key("1"), Some(NavCommand::Jump(0)));
    assert_eq!(nav_command_for_key("3"), Some(NavCommand::Jump(2)));
    assert_eq!(nav_command_for_key("5"), Some(NavCommand::Jump(4)));
    assert_eq!(nav_command_for_key("6"), None);
    assert_eq!(nav_command_for_key("a"), None);
    assert_eq!(nav_command_for_key("ArrowUp"), None);
}

#[test]
fn nav_resolution_clamps_to_the_grid() {
    assert_eq!(resolve_nav(NavCommand::Next, 0, 5), 1);
    assert_eq!(resolve_nav(NavCommand::Next, 4, 5), 4, "cannot step past the end");
    assert_eq!(resolve_nav(NavCommand::Prev, 3, 5), 2);
    assert_eq!(resolve_nav(NavCommand::Prev, 0, 5), 0, "cannot step before the start");
    assert_eq!(resolve_nav(NavCommand::First, 4, 5), 0);
    assert_eq!(resolve_nav(NavCommand::Last, 1, 5), 4);
    assert_eq!(resolve_nav(NavCommand::Jump(2), 0, 5), 2);
    assert_eq!(resolve_nav(NavCommand::Jump(9), 0, 5), 4, "jump clamps to the last section");
}

#[test]
fn nav_resolution_survives_an_empty_grid() {
    assert_eq!(resolve_nav(NavCommand::Next, 0, 0), 0);
    assert_eq!(resolve_nav(NavCommand::Last, 0, 0), 0);
}
