use chartfolio::controller::ChartController;
use chartfolio::core::{MAX_ZOOM, MIN_ZOOM, Viewport};
use chartfolio::interaction::PanInteraction;

const LEN: usize = 5000;

fn controller() -> ChartController {
    ChartController::new(Viewport::new(1000, 500), 8.0).expect("controller init")
}

#[test]
fn wheel_zoom_applies_immediately() {
    let mut controller = controller();
    let mut pan = PanInteraction::new();

    let before = controller.view().zoom();
    assert!(pan.on_wheel(&mut controller, -1.0, 500.0, LEN));
    assert!(controller.view().zoom() > before);
    assert!(pan.is_idle());
}

#[test]
fn wheel_direction_maps_to_zoom_direction() {
    let mut controller = controller();
    let mut pan = PanInteraction::new();

    assert!(pan.on_wheel(&mut controller, -1.0, 500.0, LEN));
    assert!((controller.view().zoom() - 8.8).abs() <= 1e-9);

    assert!(pan.on_wheel(&mut controller, 1.0, 500.0, LEN));
    assert!((controller.view().zoom() - 8.0).abs() <= 1e-9);
}

#[test]
fn zoom_saturates_at_bounds_and_reports_no_change() {
    let mut controller = controller();
    let mut pan = PanInteraction::new();

    for _ in 0..200 {
        pan.on_wheel(&mut controller, -1.0, 500.0, LEN);
    }
    assert_eq!(controller.view().zoom(), MAX_ZOOM);
    assert!(!pan.on_wheel(&mut controller, -1.0, 500.0, LEN));

    for _ in 0..200 {
        pan.on_wheel(&mut controller, 1.0, 500.0, LEN);
    }
    assert_eq!(controller.view().zoom(), MIN_ZOOM);
    assert!(!pan.on_wheel(&mut controller, 1.0, 500.0, LEN));
}

#[test]
fn zoom_during_drag_does_not_disturb_the_gesture() {
    let mut controller = controller();
    let mut pan = PanInteraction::new();

    pan.on_pointer_down(800.0, &controller);
    pan.on_pointer_move(750.0, &mut controller, LEN);
    assert!(pan.is_dragging());

    assert!(pan.on_wheel(&mut controller, -1.0, 400.0, LEN));
    assert!(pan.is_dragging());

    // the next move still pans against the original anchor, at the new zoom
    pan.tick(&mut controller, LEN);
    assert!(pan.on_pointer_move(700.0, &mut controller, LEN));
}

#[test]
fn pivot_record_survives_a_zoom_cycle() {
    let mut controller = controller();
    let mut pan = PanInteraction::new();

    controller.set_offset(800.0, LEN);
    let pivot = 640.0;
    let width = controller.viewport().width;
    let before = controller.view().index_at_pixel(pivot, width, LEN);

    assert!(pan.on_wheel(&mut controller, -1.0, pivot, LEN));
    let mid = controller.view().index_at_pixel(pivot, width, LEN);
    assert!((mid - before).abs() <= 1.0 / controller.view().zoom());

    assert!(pan.on_wheel(&mut controller, 1.0, pivot, LEN));
    let after = controller.view().index_at_pixel(pivot, width, LEN);
    assert!((after - before).abs() <= 2.0 / controller.view().zoom());
}
