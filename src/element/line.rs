use crate::core::{Range, ValueScale};
use crate::data::PriceRecord;
use crate::element::{ChartElement, ElementContext};
use crate::error::ChartResult;
use crate::render::{Color, PathPoint, PolylinePrimitive, RenderFrame};

/// Single polyline over a caller-supplied per-record projection.
///
/// The projection is evaluated against the full record sequence at
/// construction time so slice indexing stays in global record space.
pub struct Line {
    values: Vec<f64>,
    color: Color,
    stroke_width: f64,
}

impl Line {
    /// Evaluates `projection` once per record over the full sequence.
    #[must_use]
    pub fn project(
        records: &[PriceRecord],
        projection: impl Fn(&PriceRecord, usize) -> f64,
    ) -> Self {
        let values = records
            .iter()
            .enumerate()
            .map(|(index, record)| projection(record, index))
            .collect();
        Self::from_values(values)
    }

    /// Wraps an already-computed full-length value vector.
    #[must_use]
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            values,
            color: Color::rgb(0.25, 0.63, 1.0),
            stroke_width: 2.0,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_stroke_width(&mut self, stroke_width: f64) {
        self.stroke_width = stroke_width;
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl ChartElement for Line {
    fn value_range(&self, ctx: &ElementContext<'_>) -> Option<Range> {
        Range::of(ctx.project(&self.values))
    }

    fn draw(
        &self,
        ctx: &ElementContext<'_>,
        scale: ValueScale,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        let visible = ctx.project(&self.values);
        if visible.len() < 2 {
            return Ok(());
        }

        let points = visible
            .iter()
            .enumerate()
            .map(|(local, &value)| {
                PathPoint::new(ctx.record_center_x(local), scale.value_to_pixel(value))
            })
            .collect();
        frame.push_polyline(PolylinePrimitive::new(points, self.stroke_width, self.color));

        Ok(())
    }
}
