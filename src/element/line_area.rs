use crate::core::{Range, ValueScale};
use crate::data::PriceRecord;
use crate::element::{ChartElement, ElementContext};
use crate::error::ChartResult;
use crate::render::{Color, PathPoint, PolygonPrimitive, PolylinePrimitive, RenderFrame};

/// Stroke and fill styling for a [`LineArea`].
///
/// `None` strokes are fully transparent: no stroke primitive is emitted for
/// that edge while the fill still paints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaStyle {
    pub top_stroke: Option<Color>,
    pub bottom_stroke: Option<Color>,
    pub fill: Color,
    pub stroke_width: f64,
}

impl Default for AreaStyle {
    fn default() -> Self {
        Self {
            top_stroke: Some(Color::rgb(0.25, 0.63, 1.0)),
            bottom_stroke: Some(Color::rgb(0.25, 0.63, 1.0)),
            fill: Color::rgba(0.25, 0.63, 1.0, 0.2),
            stroke_width: 1.5,
        }
    }
}

/// Filled band between a top and an optional bottom projection.
///
/// A missing bottom projection anchors the band at value 0, and that
/// baseline participates in the element's reported range.
pub struct LineArea {
    top: Vec<f64>,
    bottom: Option<Vec<f64>>,
    style: AreaStyle,
}

impl LineArea {
    #[must_use]
    pub fn new(top: Vec<f64>, bottom: Option<Vec<f64>>, style: AreaStyle) -> Self {
        Self { top, bottom, style }
    }

    /// Top-only band anchored at 0, from a per-record projection.
    #[must_use]
    pub fn project(
        records: &[PriceRecord],
        style: AreaStyle,
        projection: impl Fn(&PriceRecord, usize) -> f64,
    ) -> Self {
        let top = records
            .iter()
            .enumerate()
            .map(|(index, record)| projection(record, index))
            .collect();
        Self::new(top, None, style)
    }

    /// Band between per-record `(top, bottom)` projections.
    #[must_use]
    pub fn project_band(
        records: &[PriceRecord],
        style: AreaStyle,
        projection: impl Fn(&PriceRecord, usize) -> (f64, f64),
    ) -> Self {
        let mut top = Vec::with_capacity(records.len());
        let mut bottom = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let (t, b) = projection(record, index);
            top.push(t);
            bottom.push(b);
        }
        Self::new(top, Some(bottom), style)
    }

    pub fn set_style(&mut self, style: AreaStyle) {
        self.style = style;
    }

    fn bottom_value(&self, global_index: usize) -> f64 {
        match &self.bottom {
            Some(bottom) => bottom.get(global_index).copied().unwrap_or(0.0),
            None => 0.0,
        }
    }
}

impl ChartElement for LineArea {
    fn value_range(&self, ctx: &ElementContext<'_>) -> Option<Range> {
        let top_range = Range::of(ctx.project(&self.top));
        let bottom_range = match &self.bottom {
            Some(bottom) => Range::of(ctx.project(bottom)),
            // the implicit baseline participates in auto-scale
            None => top_range.map(|range| range.including(0.0)),
        };
        Range::union_opt(top_range, bottom_range)
    }

    fn draw(
        &self,
        ctx: &ElementContext<'_>,
        scale: ValueScale,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        let top_visible = ctx.project(&self.top);
        if top_visible.len() < 2 {
            return Ok(());
        }

        let top_points: Vec<PathPoint> = top_visible
            .iter()
            .enumerate()
            .map(|(local, &value)| {
                PathPoint::new(ctx.record_center_x(local), scale.value_to_pixel(value))
            })
            .collect();
        let bottom_points: Vec<PathPoint> = (0..top_visible.len())
            .map(|local| {
                let value = self.bottom_value(ctx.start + local);
                PathPoint::new(ctx.record_center_x(local), scale.value_to_pixel(value))
            })
            .collect();

        let mut polygon = top_points.clone();
        polygon.extend(bottom_points.iter().rev().copied());
        frame.push_polygon(PolygonPrimitive::new(polygon, self.style.fill));

        if let Some(color) = self.style.top_stroke {
            frame.push_polyline(PolylinePrimitive::new(
                top_points,
                self.style.stroke_width,
                color,
            ));
        }
        if let Some(color) = self.style.bottom_stroke {
            frame.push_polyline(PolylinePrimitive::new(
                bottom_points,
                self.style.stroke_width,
                color,
            ));
        }

        Ok(())
    }
}
