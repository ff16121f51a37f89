#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod eraser;
pub mod error;
pub mod geometry;
pub mod input;
pub mod mapper;
pub mod raster;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod surface;
pub mod tools;

pub use app::PaintApp;
pub use config::SurfaceConfig;
pub use eraser::{Eraser, EraserMode};
pub use error::{ConfigError, ToolParseError};
pub use geometry::{Color, Point};
pub use input::{InputEvent, InputHandler};
pub use mapper::CoordinateMapper;
pub use raster::{Pen, PlottedPoint, PointSink};
pub use renderer::Renderer;
pub use scene::Scene;
pub use shape::{Drawable, Shape, ShapeStyle};
pub use surface::DrawingSurface;
pub use tools::{ToolKind, ToolSettings};
