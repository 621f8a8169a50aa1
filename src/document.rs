use egui::Pos2;

use crate::stroke::{Path, StrokeStyle};

/// Receives the geometry a tool produces.
///
/// The receiver decides how the segment looks; tools only supply end points.
pub trait PathSink {
    fn add_line(&mut self, from: Pos2, to: Pos2);
}

/// The drawing: a flat list of paths plus the style new tool output gets
#[derive(Debug, Clone, Default)]
pub struct Document {
    paths: Vec<Path>,
    default_style: StrokeStyle,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_style(default_style: StrokeStyle) -> Self {
        Self {
            paths: Vec::new(),
            default_style,
        }
    }

    pub fn default_style(&self) -> &StrokeStyle {
        &self.default_style
    }

    /// Add a path that carries its own style
    pub fn add_path(&mut self, path: Path) {
        self.paths.push(path);
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }
}

impl PathSink for Document {
    fn add_line(&mut self, from: Pos2, to: Pos2) {
        self.paths.push(Path::line(from, to, self.default_style));
    }
}
