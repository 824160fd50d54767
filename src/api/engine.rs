use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::api::ChartEngineConfig;
use crate::controller::{ChartController, SubController};
use crate::data::PriceSeries;
use crate::element::{Candle, GridUnit, Split, TimeGrid, XTick};
use crate::error::ChartResult;
use crate::interaction::PanInteraction;
use crate::render::{RenderFrame, Renderer};
use crate::strategy::{StrategyParams, portfolio_overlays, simulate};

/// Top-level facade tying the data store, both panel controllers, the
/// interaction machine, and a renderer into one host-driven unit.
///
/// The host forwards raw pointer/wheel events as they arrive and calls
/// [`tick_frame`](ChartEngine::tick_frame) once per animation frame; the
/// engine coalesces everything in between and renders at most once per tick.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    series: PriceSeries,
    main: ChartController,
    sub: SubController,
    interaction: PanInteraction,
    seen_range_version: u64,
    dirty: bool,
    alive: bool,
}

impl<R: Renderer> ChartEngine<R> {
    /// Mounts the engine over an already-validated price series.
    pub fn new(renderer: R, series: PriceSeries, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;

        let main = ChartController::new(config.main_viewport, config.initial_zoom)?;
        let sub = SubController::new(config.sub_viewport)?;
        let seen_range_version = series.date_range().version();

        debug!(
            records = series.len(),
            zoom = config.initial_zoom,
            "engine mounted"
        );

        Ok(Self {
            renderer,
            series,
            main,
            sub,
            interaction: PanInteraction::new(),
            seen_range_version,
            dirty: true,
            alive: true,
        })
    }

    /// Registers the standard price-panel layer stack: year grid, candles,
    /// split markers, date ticks.
    pub fn install_price_panel(&mut self) {
        self.main.register_element(Box::new(TimeGrid::new(GridUnit::Year)));
        self.main.register_element(Box::new(Candle::new()));
        self.main.register_element(Box::new(Split::new()));
        self.main.register_element(Box::new(XTick::new()));
        self.dirty = true;
    }

    /// Runs the portfolio simulation over the full series and installs its
    /// overlay stack on the secondary panel, alongside the shared grid and
    /// date ticks.
    pub fn install_portfolio_overlays(&mut self, params: &StrategyParams) -> ChartResult<()> {
        let states = simulate(self.series.records(), params)?;
        let overlays = portfolio_overlays(self.series.records(), &states, params)?;

        self.sub.register_element(Box::new(TimeGrid::new(GridUnit::Year)));
        for overlay in overlays {
            self.sub.register_element(overlay);
        }
        self.sub.register_element(Box::new(XTick::new()));
        self.dirty = true;
        Ok(())
    }

    /// Marks the scene dirty so the next tick re-renders.
    pub fn refresh(&mut self) {
        self.dirty = true;
    }

    pub fn pointer_down(&mut self, x: f64) {
        if !self.alive {
            return;
        }
        self.interaction.on_pointer_down(x, &self.main);
    }

    pub fn pointer_move(&mut self, x: f64) {
        if !self.alive {
            return;
        }
        let len = self.series.visible_records().len();
        if self.interaction.on_pointer_move(x, &mut self.main, len) {
            self.dirty = true;
        }
    }

    pub fn pointer_up(&mut self) {
        if !self.alive {
            return;
        }
        self.interaction.on_pointer_up();
    }

    pub fn wheel(&mut self, wheel_delta: f64, pivot_px: f64) {
        if !self.alive {
            return;
        }
        let len = self.series.visible_records().len();
        if self.interaction.on_wheel(&mut self.main, wheel_delta, pivot_px, len) {
            self.dirty = true;
        }
    }

    /// Narrows the visible date range; picked up on the next tick.
    pub fn set_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.series.set_date_range(start, end);
    }

    /// Advances one animation frame: reacts to date-range edits, steps the
    /// interaction machine, and renders once if anything changed.
    ///
    /// Returns whether a frame was rendered.
    pub fn tick_frame(&mut self) -> ChartResult<bool> {
        if !self.alive {
            return Ok(false);
        }

        let version = self.series.date_range().version();
        if version != self.seen_range_version {
            self.seen_range_version = version;
            self.dirty = true;
        }

        let len = self.series.visible_records().len();
        if self.interaction.tick(&mut self.main, len) {
            self.dirty = true;
        }

        if !self.dirty {
            return Ok(false);
        }
        self.render()?;
        self.dirty = false;
        Ok(true)
    }

    /// Renders both panels immediately, regardless of the dirty flag.
    pub fn render(&mut self) -> ChartResult<()> {
        // overlays index full-series vectors, so the date-range cut must be
        // carried as the global base of the windowed slice
        let (base, _) = self.series.visible_bounds();
        let records = self.series.visible_records();

        let mut main_frame = RenderFrame::new(self.main.viewport());
        self.main.render_from(records, base, &mut main_frame)?;
        self.renderer.render(&main_frame)?;

        let mut sub_frame = RenderFrame::new(self.sub.viewport());
        self.sub
            .render_from(self.main.view(), records, base, &mut sub_frame)?;
        self.renderer.render(&sub_frame)?;

        trace!(
            main_ops = main_frame.ops().len(),
            sub_ops = sub_frame.ops().len(),
            "engine frame rendered"
        );
        Ok(())
    }

    /// Tears the engine down. Idempotent: every entry point becomes a no-op,
    /// gesture state is dropped, and both element lists are cleared.
    pub fn destroy(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.interaction.reset();
        self.main.clear_elements();
        self.sub.clear_elements();
        debug!("engine destroyed");
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    #[must_use]
    pub fn controller(&self) -> &ChartController {
        &self.main
    }

    #[must_use]
    pub fn sub_controller(&self) -> &SubController {
        &self.sub
    }

    #[must_use]
    pub fn interaction(&self) -> &PanInteraction {
        &self.interaction
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
