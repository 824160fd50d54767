pub mod overlays;

pub use overlays::portfolio_overlays;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::data::PriceRecord;
use crate::error::{ChartError, ChartResult};

/// Policy constants of the value-averaging recurrence.
///
/// Defaults reproduce the recurrence this engine was built around. Every
/// constant is a named, overridable parameter; none of them encodes more
/// intent than the recurrence itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyParams {
    /// Capital available before the first record.
    pub start_capital: f64,
    /// Cash added to the pool at every period boundary.
    pub periodic_deposit: f64,
    /// Divisor applied to the pool in the target recurrence.
    pub base_gradient: f64,
    /// The gradient grows by one every this many periods.
    pub gradient_step_periods: i64,
    /// Fraction of the pool parked as savings at period 0.
    pub savings_base_ratio: f64,
    /// Savings ratio increment applied every `savings_step_periods`.
    pub savings_ratio_step: f64,
    pub savings_step_periods: i64,
    /// Upper bound for the savings ratio.
    pub savings_ratio_cap: f64,
    /// Rebalance tolerance around the target value.
    pub band_range: f64,
    /// Calendar weeks per recurrence period.
    pub period_weeks: i64,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            start_capital: 5000.0,
            periodic_deposit: 250.0,
            base_gradient: 10.0,
            gradient_step_periods: 26,
            savings_base_ratio: 0.25,
            savings_ratio_step: 0.05,
            savings_step_periods: 13,
            savings_ratio_cap: 0.9,
            band_range: 0.15,
            period_weeks: 2,
        }
    }
}

impl StrategyParams {
    pub fn validate(&self) -> ChartResult<()> {
        let finite = [
            self.start_capital,
            self.periodic_deposit,
            self.base_gradient,
            self.savings_base_ratio,
            self.savings_ratio_step,
            self.savings_ratio_cap,
            self.band_range,
        ];
        if finite.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidConfig(
                "strategy parameters must be finite".to_owned(),
            ));
        }
        if self.start_capital < 0.0 || self.periodic_deposit < 0.0 {
            return Err(ChartError::InvalidConfig(
                "capital and deposit must be >= 0".to_owned(),
            ));
        }
        if self.base_gradient <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "base gradient must be > 0".to_owned(),
            ));
        }
        if self.gradient_step_periods <= 0
            || self.savings_step_periods <= 0
            || self.period_weeks <= 0
        {
            return Err(ChartError::InvalidConfig(
                "period step counts must be > 0".to_owned(),
            ));
        }
        if !(0.0..1.0).contains(&self.band_range) {
            return Err(ChartError::InvalidConfig(
                "band range must be in [0, 1)".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&self.savings_base_ratio)
            || !(0.0..=1.0).contains(&self.savings_ratio_cap)
            || self.savings_ratio_step < 0.0
        {
            return Err(ChartError::InvalidConfig(
                "savings ratios must be in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }

    fn gradient(&self, period: i64) -> f64 {
        self.base_gradient + (period / self.gradient_step_periods) as f64
    }

    fn savings_ratio(&self, period: i64) -> f64 {
        let stepped =
            self.savings_base_ratio + (period / self.savings_step_periods) as f64 * self.savings_ratio_step;
        stepped.min(self.savings_ratio_cap)
    }
}

/// Portfolio snapshot attached to one price record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioState {
    /// Recurrence period index, rebased so the first record is period 0.
    pub period: i64,
    pub saved_pool: f64,
    pub usable_pool: f64,
    /// Whole shares held; kept as `f64` for arithmetic with prices.
    pub share_count: f64,
    pub target_value: f64,
}

impl PortfolioState {
    #[must_use]
    pub fn total_pool(self) -> f64 {
        self.saved_pool + self.usable_pool
    }

    #[must_use]
    pub fn market_value(self, close: f64) -> f64 {
        self.share_count * close
    }

    /// Pool plus market exposure: the account's total worth at `close`.
    #[must_use]
    pub fn total_value(self, close: f64) -> f64 {
        self.total_pool() + self.market_value(close)
    }
}

/// Weeks elapsed since the common-era epoch; monotonic across year
/// boundaries, unlike a week-of-year number.
fn absolute_week(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()).div_euclid(7)
}

/// Runs the value-averaging recurrence over the full record sequence.
///
/// Single pass, O(n), deterministic: the output depends only on the ordered
/// price sequence and `params`. Records with `close <= 0` perform no share
/// transaction. All pools and the share count stay non-negative.
pub fn simulate(
    records: &[PriceRecord],
    params: &StrategyParams,
) -> ChartResult<Vec<PortfolioState>> {
    params.validate()?;
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let first_close = records[0].close;
    let (share_count, target_value, pool) = if first_close > 0.0 {
        let count = (params.start_capital / first_close).floor();
        let invested = count * first_close;
        (count, invested, params.start_capital - invested)
    } else {
        (0.0, 0.0, params.start_capital)
    };

    let base_period = absolute_week(records[0].date).div_euclid(params.period_weeks);
    let mut state = PortfolioState {
        period: 0,
        saved_pool: 0.0,
        usable_pool: pool,
        share_count,
        target_value,
    };

    let mut out = Vec::with_capacity(records.len());
    for record in records {
        let period = absolute_week(record.date).div_euclid(params.period_weeks) - base_period;
        // previous share count; the period transition never trades
        let market_value = state.market_value(record.close);

        if period != state.period {
            let total_pool = state.total_pool();
            let gradient = params.gradient(period);
            let next_target = state.target_value
                + total_pool / gradient
                + (market_value - state.target_value) / (2.0 * gradient.sqrt())
                + params.periodic_deposit;
            let grown_pool = total_pool + params.periodic_deposit;
            let saved_pool = grown_pool * params.savings_ratio(period);

            state = PortfolioState {
                period,
                saved_pool,
                usable_pool: grown_pool - saved_pool,
                share_count: state.share_count,
                target_value: next_target,
            };
        }

        if record.close > 0.0 {
            let ceiling = state.target_value * (1.0 + params.band_range);
            let floor_value = state.target_value * (1.0 - params.band_range);

            if market_value > ceiling {
                let shares = ((market_value - ceiling) / record.close).floor();
                state.share_count -= shares;
                state.saved_pool += shares * record.close;
            } else if market_value < floor_value {
                let shortfall = (floor_value - market_value).min(state.usable_pool);
                let shares = (shortfall / record.close).floor();
                state.share_count += shares;
                state.usable_pool -= shares * record.close;
            }
        }

        out.push(state);
    }

    Ok(out)
}
