use crate::element::{AreaStyle, ChartElement, Line, LineArea};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;
use crate::strategy::{PortfolioState, StrategyParams};

use crate::data::PriceRecord;

/// Builds the portfolio overlay stack for a simulated record sequence.
///
/// Overlays are returned back-to-front in the order they should be
/// registered: deposited principal, total holdings band, usable pool band,
/// saved pool band, total target line, and finally the rebalance corridor.
///
/// `states` must be the output of [`simulate`](crate::strategy::simulate)
/// over the same `records`; a length mismatch is an error.
pub fn portfolio_overlays(
    records: &[PriceRecord],
    states: &[PortfolioState],
    params: &StrategyParams,
) -> ChartResult<Vec<Box<dyn ChartElement>>> {
    if records.len() != states.len() {
        return Err(ChartError::InvalidData(format!(
            "portfolio overlay input mismatch: {} records vs {} states",
            records.len(),
            states.len()
        )));
    }

    let principal = Line::project(records, |_, index| {
        params.start_capital + states[index].period as f64 * params.periodic_deposit
    })
    .with_color(Color::rgb(0.0, 0.0, 0.0));

    let holdings = LineArea::project_band(
        records,
        AreaStyle {
            top_stroke: Some(Color::rgb(0.25, 0.63, 1.0)),
            bottom_stroke: None,
            fill: Color::rgba(0.25, 0.63, 1.0, 0.18),
            stroke_width: 1.5,
        },
        |record, index| {
            let state = states[index];
            (state.total_value(record.close), state.total_pool())
        },
    );

    let usable_pool = LineArea::project_band(
        records,
        AreaStyle {
            top_stroke: None,
            bottom_stroke: None,
            fill: Color::rgba(1.0, 0.835, 0.29, 0.27),
            stroke_width: 1.5,
        },
        |_, index| {
            let state = states[index];
            (state.total_pool(), state.saved_pool)
        },
    );

    let saved_pool = LineArea::project(
        records,
        AreaStyle {
            top_stroke: None,
            bottom_stroke: None,
            fill: Color::rgba(0.0, 0.588, 0.031, 0.27),
            stroke_width: 1.5,
        },
        |_, index| states[index].saved_pool,
    );

    let total_target = Line::project(records, |_, index| {
        let state = states[index];
        state.target_value + state.total_pool()
    })
    .with_color(Color::rgb(0.55, 0.27, 0.68));

    let corridor_stroke = Color::rgb(1.0, 0.55, 0.0);
    let corridor = LineArea::project_band(
        records,
        AreaStyle {
            top_stroke: Some(corridor_stroke),
            bottom_stroke: Some(corridor_stroke),
            fill: Color::rgba(1.0, 0.796, 0.573, 0.2),
            stroke_width: 1.0,
        },
        |_, index| {
            let total = {
                let state = states[index];
                state.target_value + state.total_pool()
            };
            (
                total * (1.0 + params.band_range),
                total * (1.0 - params.band_range),
            )
        },
    );

    Ok(vec![
        Box::new(principal),
        Box::new(holdings),
        Box::new(usable_pool),
        Box::new(saved_pool),
        Box::new(total_target),
        Box::new(corridor),
    ])
}
