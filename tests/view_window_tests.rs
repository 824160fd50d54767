use chartfolio::core::{MAX_ZOOM, MIN_ZOOM, ViewWindow};
use proptest::prelude::*;

#[test]
fn new_rejects_non_positive_or_non_finite_zoom() {
    assert!(ViewWindow::new(0.0).is_err());
    assert!(ViewWindow::new(-3.0).is_err());
    assert!(ViewWindow::new(f64::NAN).is_err());
    assert!(ViewWindow::new(f64::INFINITY).is_err());
}

#[test]
fn new_clamps_zoom_into_bounds() {
    let low = ViewWindow::new(0.25).expect("valid zoom");
    assert_eq!(low.zoom(), MIN_ZOOM);

    let high = ViewWindow::new(500.0).expect("valid zoom");
    assert_eq!(high.zoom(), MAX_ZOOM);
}

#[test]
fn fresh_window_anchors_newest_record_at_right_edge() {
    let view = ViewWindow::new(10.0).expect("valid zoom");
    let (start, end) = view.visible_bounds(1000, 500);
    assert_eq!(end, 500);
    assert_eq!(start, 400);
}

#[test]
fn short_dataset_is_fully_visible() {
    let view = ViewWindow::new(10.0).expect("valid zoom");
    let (start, end) = view.visible_bounds(1000, 30);
    assert_eq!((start, end), (0, 30));
}

#[test]
fn pan_in_pixels_converts_at_current_zoom() {
    let mut view = ViewWindow::new(10.0).expect("valid zoom");
    let changed = view.pan_by_pixels(120.0, 1000, 500);
    assert!(changed);
    assert!((view.offset() - 12.0).abs() <= 1e-9);
}

#[test]
fn pan_clamps_at_oldest_record() {
    let mut view = ViewWindow::new(10.0).expect("valid zoom");
    view.pan_by_pixels(1.0e9, 1000, 500);
    // 500 records, 100 visible: at most 400 records of scrollback
    assert!((view.offset() - 400.0).abs() <= 1e-9);
}

#[test]
fn pan_at_boundary_reports_no_change() {
    let mut view = ViewWindow::new(10.0).expect("valid zoom");
    assert!(view.pan_by_pixels(5000.0, 1000, 500));
    assert!(!view.pan_by_pixels(100.0, 1000, 500));
    assert!(!view.pan_by_pixels(-0.0, 1000, 500));
}

#[test]
fn negative_pan_clamps_at_newest_record() {
    let mut view = ViewWindow::new(10.0).expect("valid zoom");
    assert!(!view.pan_by_pixels(-250.0, 1000, 500));
    assert_eq!(view.offset(), 0.0);
}

#[test]
fn non_finite_inputs_are_ignored() {
    let mut view = ViewWindow::new(10.0).expect("valid zoom");
    assert!(!view.pan_by_pixels(f64::NAN, 1000, 500));
    assert!(!view.set_offset_records(f64::INFINITY, 1000, 500));
    assert!(!view.zoom_at(f64::NAN, 500.0, 1000, 500));
    assert_eq!(view.offset(), 0.0);
}

#[test]
fn zoom_out_and_in_respect_bounds() {
    let mut view = ViewWindow::new(MIN_ZOOM).expect("valid zoom");
    assert!(!view.zoom_at(1.0, 500.0, 1000, 5000));
    assert_eq!(view.zoom(), MIN_ZOOM);

    let mut view = ViewWindow::new(MAX_ZOOM).expect("valid zoom");
    assert!(!view.zoom_at(-1.0, 500.0, 1000, 5000));
    assert_eq!(view.zoom(), MAX_ZOOM);
}

#[test]
fn zoom_keeps_pivot_record_stationary() {
    let mut view = ViewWindow::new(8.0).expect("valid zoom");
    view.set_offset_records(120.0, 1000, 5000);

    let pivot = 316.0;
    let before = view.index_at_pixel(pivot, 1000, 5000);
    assert!(view.zoom_at(-1.0, pivot, 1000, 5000));
    let after = view.index_at_pixel(pivot, 1000, 5000);

    // stationarity within one pixel's worth of index space
    assert!((after - before).abs() <= 1.0 / view.zoom());
}

#[test]
fn zoom_at_right_edge_keeps_newest_record_anchored() {
    let mut view = ViewWindow::new(8.0).expect("valid zoom");
    assert!(view.zoom_at(-1.0, 1000.0, 1000, 5000));
    assert_eq!(view.offset(), 0.0);
}

proptest! {
    #[test]
    fn visible_slice_length_is_always_the_clamped_quotient(
        zoom in 1.0f64..64.0,
        offset in -100.0f64..6000.0,
        width in 1u32..4000,
        len in 0usize..5000,
    ) {
        let mut view = ViewWindow::new(zoom).expect("valid zoom");
        view.set_offset_records(offset, width, len);

        let (start, end) = view.visible_bounds(width, len);
        let expected = ((f64::from(width) / view.zoom()).ceil() as usize).min(len);
        prop_assert_eq!(end - start, expected);
        prop_assert!(end <= len);
    }

    #[test]
    fn offset_stays_within_scrollback_bounds(
        zoom in 1.0f64..64.0,
        offset in -1.0e6f64..1.0e6,
        width in 1u32..4000,
        len in 0usize..5000,
    ) {
        let mut view = ViewWindow::new(zoom).expect("valid zoom");
        view.set_offset_records(offset, width, len);
        prop_assert!(view.offset() >= 0.0);
        prop_assert!(view.offset() <= len as f64);
    }
}
