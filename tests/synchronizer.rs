use std::f64::consts::{FRAC_PI_2, PI, TAU};

use unitcircle::lowlevel::{approximate, CoordinateMapper, TrigSynchronizer, PRECISION};
use unitcircle::{HandlePixel, WidgetGeometry};

fn synchronizer() -> TrigSynchronizer {
    TrigSynchronizer::new(CoordinateMapper::new(&WidgetGeometry::new(400.0).unwrap()))
}

#[test]
fn initial_state_is_rounded_and_consistent() {
    let sync = synchronizer();
    let state = sync.initial_state(PI / 4.0);
    assert_eq!(state.angle(), 0.7854);
    assert_eq!(state.cosine(), 0.7071);
    assert_eq!(state.sine(), 0.7071);
    assert_eq!(state.handle(), HandlePixel::new(341.42, 341.42));
}

#[test]
fn angle_commit_updates_both_values_and_handles() {
    let sync = synchronizer();
    let mut state = sync.initial_state(PI / 4.0);
    let reconciled = sync.commit_angle(&mut state, 4.1888);
    assert!(reconciled.sine && reconciled.cosine);
    assert_eq!(state.sine(), -0.866);
    assert_eq!(state.cosine(), -0.5);
    assert_eq!(state.handle().x, 100.0);
    assert_eq!(state.handle().y, 26.8);
}

#[test]
fn magnitude_guard_lets_sign_flip_through_when_magnitude_changes() {
    let sync = synchronizer();
    let mut state = sync.initial_state(0.5236);
    let reconciled = sync.commit_angle(&mut state, 2.0944);
    assert!(reconciled.sine);
    assert!(reconciled.cosine);
    assert_eq!(state.cosine(), -0.5);
}

// Regression: moving from 30° to 330° keeps |sin| and |cos|, so the guard
// suppresses the sine update and the stored sine keeps the old sign.
#[test]
fn reflected_angle_keeps_stale_sine_sign() {
    let sync = synchronizer();
    let mut state = sync.initial_state(0.5236);
    assert_eq!(state.sine(), 0.5);

    let reconciled = sync.commit_angle(&mut state, 5.7596);
    assert!(!reconciled.sine);
    assert!(!reconciled.cosine);
    assert_eq!(state.angle(), 5.7596);
    assert_eq!(state.sine(), 0.5);
    assert_eq!(approximate(5.7596f64.sin(), PRECISION), -0.5);
    assert_eq!(state.handle().y, 300.0);
}

// Regression: moving from 10° to 170° keeps |cos|, so the cosine update is
// suppressed on its own and the cosine marker stays on the positive side.
#[test]
fn supplementary_angle_keeps_stale_cosine_sign() {
    let sync = synchronizer();
    let mut state = sync.initial_state(0.1745);
    assert_eq!(state.cosine(), 0.9848);
    assert_eq!(state.sine(), 0.1736);

    let reconciled = sync.commit_angle(&mut state, 2.9671);
    assert!(!reconciled.cosine);
    assert!(!reconciled.sine);
    assert_eq!(state.angle(), 2.9671);
    assert_eq!(state.cosine(), 0.9848);
    assert_eq!(approximate(2.9671f64.cos(), PRECISION), -0.9848);
    assert_eq!(state.sine(), 0.1736);
    assert_eq!(state.handle().x, 396.96);
}

#[test]
fn cosine_drag_only_reaches_upper_half() {
    let sync = synchronizer();
    let mut state = sync.initial_state(5.0);
    for x in 0..=400 {
        sync.drag_cosine(&mut state, f64::from(x)).unwrap();
        let angle = state.angle();
        assert!(
            angle >= 0.0 && angle <= approximate(PI, PRECISION),
            "x = {x}, angle = {angle}"
        );
        assert!(state.sine() >= 0.0);
    }
}

#[test]
fn sine_drag_only_reaches_right_half() {
    let sync = synchronizer();
    let mut state = sync.initial_state(PI);
    for y in 0..=400 {
        sync.drag_sine(&mut state, f64::from(y)).unwrap();
        let angle = state.angle();
        let upper = angle >= 0.0 && angle <= approximate(FRAC_PI_2, PRECISION);
        let lower = angle >= 1.5 * PI - 1e-4 && angle < TAU;
        assert!(upper || lower, "y = {y}, angle = {angle}");
    }
}

#[test]
fn sine_drag_wraps_negative_angles() {
    let sync = synchronizer();
    let mut state = sync.initial_state(0.0);
    sync.drag_sine(&mut state, 100.0).unwrap();
    assert_eq!(state.sine(), -0.5);
    assert_eq!(state.angle(), 5.7596);
    assert_eq!(state.handle().y, 100.0);
    assert_eq!(state.cosine(), 0.866);
}

#[test]
fn drags_reject_out_of_range_pixels_without_change() {
    let sync = synchronizer();
    let mut state = sync.initial_state(1.0);
    let before = state;
    assert!(sync.drag_cosine(&mut state, -1.0).is_none());
    assert!(sync.drag_cosine(&mut state, 401.0).is_none());
    assert!(sync.drag_sine(&mut state, 400.5).is_none());
    assert_eq!(state, before);
}

#[test]
fn angle_drag_from_pointer() {
    let sync = synchronizer();
    let mut state = sync.initial_state(PI / 4.0);
    sync.drag_angle(&mut state, HandlePixel::new(200.0, 400.0)).unwrap();
    assert_eq!(state.angle(), 1.5708);
    assert_eq!(state.cosine(), 0.0);
    assert_eq!(state.sine(), 1.0);
    assert_eq!(state.handle(), HandlePixel::new(200.0, 400.0));

    let before = state;
    let at_center = sync.drag_angle(&mut state, HandlePixel::new(200.0, 200.0));
    assert!(at_center.is_none());
    assert_eq!(state, before);
}
