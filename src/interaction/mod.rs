use tracing::trace;

use crate::controller::ChartController;

/// Per-frame divisor applied to captured momentum while the button is held.
const DRAG_DECAY_DIVISOR: f64 = 1.2;
/// Momentum magnitude below which a held drag's momentum snaps to zero.
const DRAG_DECAY_FLOOR: f64 = 5.0;
/// Inertia stops once the per-frame momentum falls below one pixel.
const INERTIA_STOP_THRESHOLD: f64 = 1.0;

/// Drag gesture phase.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PanPhase {
    Idle,
    Dragging {
        start_x: f64,
        last_x: f64,
        anchor_offset: f64,
    },
    Decaying {
        start_x: f64,
        virtual_x: f64,
        anchor_offset: f64,
    },
}

/// Pointer/wheel state machine translating raw input into view mutations.
///
/// The host drives it with exactly one [`tick`](PanInteraction::tick) per
/// animation frame. Pointer events may arrive at any rate in between; moves
/// are coalesced to at most one applied mutation per frame, and the inertia
/// loop advances at most one step per frame. Teardown is a single
/// [`reset`](PanInteraction::reset): no state survives into the next
/// gesture and no scheduled continuation exists to orphan.
#[derive(Debug)]
pub struct PanInteraction {
    phase: PanPhase,
    momentum: f64,
    move_in_flight: bool,
}

impl PanInteraction {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: PanPhase::Idle,
            momentum: 0.0,
            move_in_flight: false,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, PanPhase::Idle)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, PanPhase::Dragging { .. })
    }

    #[must_use]
    pub fn is_decaying(&self) -> bool {
        matches!(self.phase, PanPhase::Decaying { .. })
    }

    #[must_use]
    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// Starts a drag gesture. A fresh pointer-down always preempts an
    /// in-flight inertia decay; no momentum carries over.
    pub fn on_pointer_down(&mut self, x: f64, controller: &ChartController) {
        self.momentum = 0.0;
        self.move_in_flight = false;
        self.phase = PanPhase::Dragging {
            start_x: x,
            last_x: x,
            anchor_offset: controller.view().offset(),
        };
        trace!(x, "drag started");
    }

    /// Applies a pointer move while dragging.
    ///
    /// Moves outside a drag are absorbed. Re-entrant moves within one frame
    /// are dropped until the next [`tick`](PanInteraction::tick) completes
    /// the frame, bounding redraw frequency to one per frame regardless of
    /// input event rate. Returns whether the view changed.
    pub fn on_pointer_move(&mut self, x: f64, controller: &mut ChartController, len: usize) -> bool {
        if self.move_in_flight {
            return false;
        }
        let PanPhase::Dragging {
            start_x,
            last_x,
            anchor_offset,
        } = &mut self.phase
        else {
            return false;
        };

        self.move_in_flight = true;
        self.momentum += x - *last_x;
        *last_x = x;
        let total_px = *start_x - x;
        controller.pan_from_anchor(*anchor_offset, total_px, len)
    }

    /// Ends the drag and hands the accumulated momentum to the inertia loop.
    ///
    /// A pointer-up with no matching pointer-down is absorbed silently.
    pub fn on_pointer_up(&mut self) {
        if let PanPhase::Dragging {
            start_x,
            last_x,
            anchor_offset,
        } = self.phase
        {
            self.phase = PanPhase::Decaying {
                start_x,
                virtual_x: last_x,
                anchor_offset,
            };
            trace!(momentum = self.momentum, "drag released");
        }
    }

    /// Pivot-preserving wheel zoom, applied immediately (no decay, no
    /// queuing). Returns whether the view changed.
    pub fn on_wheel(
        &mut self,
        controller: &mut ChartController,
        wheel_delta: f64,
        pivot_px: f64,
        len: usize,
    ) -> bool {
        controller.handle_zoom(wheel_delta, pivot_px, len)
    }

    /// Advances one animation frame.
    ///
    /// While dragging, this decays the captured momentum toward zero and
    /// re-opens the move coalescing gate. While decaying, it performs one
    /// inertia step. Returns whether the view changed and a redraw is due.
    pub fn tick(&mut self, controller: &mut ChartController, len: usize) -> bool {
        self.move_in_flight = false;

        match &mut self.phase {
            PanPhase::Idle => false,
            PanPhase::Dragging { .. } => {
                if self.momentum.abs() < DRAG_DECAY_FLOOR {
                    self.momentum = 0.0;
                } else {
                    self.momentum /= DRAG_DECAY_DIVISOR;
                }
                false
            }
            PanPhase::Decaying {
                start_x,
                virtual_x,
                anchor_offset,
            } => {
                if self.momentum.abs() < INERTIA_STOP_THRESHOLD {
                    self.phase = PanPhase::Idle;
                    return false;
                }

                *virtual_x += self.momentum;
                let total_px = *start_x - *virtual_x + self.momentum.floor();
                let changed = controller.pan_from_anchor(*anchor_offset, total_px, len);
                self.momentum -= self.momentum.signum();
                changed
            }
        }
    }

    /// Returns the machine to `Idle`, dropping any gesture state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for PanInteraction {
    fn default() -> Self {
        Self::new()
    }
}
