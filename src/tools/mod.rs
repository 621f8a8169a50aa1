use egui::Pos2;

use crate::input::DragEvent;
use crate::state::ToolState;

/// A straight segment produced by a tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Pos2,
    pub to: Pos2,
}

impl LineSegment {
    pub fn new(from: Pos2, to: Pos2) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// Tool trait defines the interface for drag-driven drawing tools
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Called when the tool is selected (activated).
    fn activate(&mut self) {
        // default: do nothing
    }

    /// Called when the tool is deselected (deactivated).
    fn deactivate(&mut self);

    /// Handle pointer press on the canvas, starting a drag.
    fn on_pointer_down(&mut self, pos: Pos2);

    /// Handle one drag sample. Returns the geometry to add to the document, if any.
    fn on_pointer_drag(&mut self, event: &DragEvent, state: &ToolState) -> Option<LineSegment>;

    /// Handle pointer release, ending the drag.
    fn on_pointer_up(&mut self);

    /// Name of the current drag phase, for display
    fn current_state_name(&self) -> &'static str;
}

mod zebra_tool;
pub use zebra_tool::{DragPhase, ZebraTool, step_vector, stripe_segment};
