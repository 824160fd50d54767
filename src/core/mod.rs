pub mod range;
pub mod types;
pub mod view_window;

pub use range::{Range, ValueScale};
pub use types::Viewport;
pub use view_window::{MAX_ZOOM, MIN_ZOOM, ViewWindow};
