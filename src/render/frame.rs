use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    LinePrimitive, PolygonPrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive,
};

/// One draw command inside a frame.
///
/// Commands are replayed strictly in push order, which keeps the panel's
/// back-to-front paint order identical to element registration order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Polyline(PolylinePrimitive),
    Polygon(PolygonPrimitive),
    Text(TextPrimitive),
}

impl Primitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Polyline(polyline) => polyline.validate(),
            Self::Polygon(polygon) => polygon.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    ops: Vec<Primitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ops: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.ops.push(Primitive::Line(line));
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.ops.push(Primitive::Rect(rect));
    }

    pub fn push_polyline(&mut self, polyline: PolylinePrimitive) {
        self.ops.push(Primitive::Polyline(polyline));
    }

    pub fn push_polygon(&mut self, polygon: PolygonPrimitive) {
        self.ops.push(Primitive::Polygon(polygon));
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.ops.push(Primitive::Text(text));
    }

    #[must_use]
    pub fn ops(&self) -> &[Primitive] {
        &self.ops
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for op in &self.ops {
            op.validate()?;
        }

        Ok(())
    }

    /// Convenience iterators over one primitive kind, in push order.
    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.ops.iter().filter_map(|op| match op {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.ops.iter().filter_map(|op| match op {
            Primitive::Polyline(polyline) => Some(polyline),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = &PolygonPrimitive> {
        self.ops.iter().filter_map(|op| match op {
            Primitive::Polygon(polygon) => Some(polygon),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.ops.iter().filter_map(|op| match op {
            Primitive::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.ops.iter().filter_map(|op| match op {
            Primitive::Rect(rect) => Some(rect),
            _ => None,
        })
    }
}
