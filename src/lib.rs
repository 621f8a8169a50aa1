#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod document;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod session;
pub mod state;
pub mod stroke;
pub mod tools;

pub use app::ZebraApp;
pub use document::{Document, PathSink};
pub use error::{PanelError, StateError};
pub use input::{DragEvent, DragSampler, PointerEvent};
pub use panels::{ChangeEffect, ConfigPanel, WidgetKind, WidgetSpec};
pub use renderer::Renderer;
pub use session::ZebraSession;
pub use state::{ParamName, ParamValue, ToolState};
pub use stroke::{Path, StrokeCap, StrokeStyle};
pub use tools::{LineSegment, Tool, ZebraTool};
