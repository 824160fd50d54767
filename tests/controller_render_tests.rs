use chartfolio::controller::{ChartController, SubController};
use chartfolio::core::Viewport;
use chartfolio::data::PriceRecord;
use chartfolio::element::{Candle, Line, TimeGrid, GridUnit};
use chartfolio::render::{Primitive, RenderFrame};
use chrono::NaiveDate;

fn records(closes: &[f64]) -> Vec<PriceRecord> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 2).expect("valid date");
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let date = start + chrono::Days::new(i as u64);
            PriceRecord::new(date, close, close + 1.0, close - 1.0, close).expect("valid record")
        })
        .collect()
}

#[test]
fn elements_paint_in_registration_order() {
    let data = records(&[10.0, 11.0, 12.0, 13.0]);
    let mut controller =
        ChartController::new(Viewport::new(40, 100), 10.0).expect("controller init");

    controller.register_element(Box::new(Candle::new()));
    controller.register_element(Box::new(Line::project(&data, |record, _| record.close)));

    let mut frame = RenderFrame::new(controller.viewport());
    controller.render(&data, &mut frame).expect("render");

    // candle rects first, the polyline strictly after every rect
    let last_rect = frame
        .ops()
        .iter()
        .rposition(|op| matches!(op, Primitive::Rect(_)))
        .expect("candle bodies present");
    let first_polyline = frame
        .ops()
        .iter()
        .position(|op| matches!(op, Primitive::Polyline(_)))
        .expect("line present");
    assert!(last_rect < first_polyline);
}

#[test]
fn panel_scale_is_the_union_of_element_ranges() {
    let data = records(&[10.0, 20.0, 30.0]);
    let mut controller =
        ChartController::new(Viewport::new(30, 100), 10.0).expect("controller init");

    controller.register_element(Box::new(Candle::new()));
    // a projection far above the candle range must stretch the shared scale
    controller.register_element(Box::new(Line::from_values(vec![100.0, 100.0, 100.0])));

    let mut frame = RenderFrame::new(controller.viewport());
    controller.render(&data, &mut frame).expect("render");

    let polyline = frame.polylines().next().expect("line present");
    // the 100.0 line sits at the top of the unioned scale
    for point in &polyline.points {
        assert!((point.y - 0.0).abs() <= 1e-9);
    }

    // candle low (9.0) is the union minimum, so its wick reaches the bottom
    let min_wick_y = frame
        .lines()
        .map(|line| line.y2.max(line.y1))
        .fold(f64::NEG_INFINITY, f64::max);
    assert!((min_wick_y - 100.0).abs() <= 1e-9);
}

#[test]
fn empty_dataset_renders_without_nan() {
    let mut controller =
        ChartController::new(Viewport::new(100, 100), 10.0).expect("controller init");
    controller.register_element(Box::new(Candle::new()));

    let mut frame = RenderFrame::new(controller.viewport());
    controller.render(&[], &mut frame).expect("render");
    assert!(frame.is_empty());
    frame.validate().expect("frame valid");
}

#[test]
fn marker_only_panel_uses_fallback_scale() {
    let data = records(&[10.0, 11.0, 12.0]);
    let mut controller =
        ChartController::new(Viewport::new(30, 100), 10.0).expect("controller init");
    controller.register_element(Box::new(TimeGrid::new(GridUnit::Month)));

    let mut frame = RenderFrame::new(controller.viewport());
    controller.render(&data, &mut frame).expect("render");
    frame.validate().expect("no NaN geometry");
}

#[test]
fn sub_panel_follows_primary_view_window() {
    let data = records(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);
    let mut primary =
        ChartController::new(Viewport::new(20, 100), 10.0).expect("controller init");
    primary.register_element(Box::new(Candle::new()));

    let mut sub = SubController::new(Viewport::new(20, 50)).expect("sub init");
    sub.register_element(Box::new(Line::project(&data, |record, _| record.close)));

    // scroll the primary back by two records; the sub panel must follow
    primary.set_offset(20.0, data.len());
    let (slice, start) = primary.visible_slice(&data);
    assert_eq!(start, 2);
    assert_eq!(slice.len(), 2);

    let mut frame = RenderFrame::new(sub.viewport());
    sub.render(primary.view(), &data, &mut frame).expect("render");

    let polyline = frame.polylines().next().expect("line present");
    assert_eq!(polyline.points.len(), 2);
}

#[test]
fn visible_slice_is_never_empty_for_non_empty_data() {
    let data = records(&[10.0, 11.0]);
    let controller =
        ChartController::new(Viewport::new(1000, 100), 10.0).expect("controller init");
    let (slice, _) = controller.visible_slice(&data);
    assert_eq!(slice.len(), 2);
}
