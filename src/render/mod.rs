mod frame;
mod null_renderer;
mod primitives;

pub use frame::{Primitive, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, PathPoint, PolygonPrimitive, PolylinePrimitive, RectPrimitive,
    TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from windowing and interaction logic. A frame
/// replaces the previous surface contents; backends clear before replaying.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
