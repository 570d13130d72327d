// File: crates/curve-chart/src/lib.rs
// Summary: Renderer entry point; exports the chart model and CPU raster pipeline.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod series;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use error::RenderError;
pub use geometry::RectI32;
pub use series::Series;
pub use theme::Theme;
pub use types::Insets;
pub use view::ViewState;
