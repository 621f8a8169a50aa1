use egui::{Pos2, Vec2};

use crate::geometry::{is_finite_pos, is_finite_vec, midpoint_behind, rotate_degrees, with_length};
use crate::input::DragEvent;
use crate::state::ToolState;
use crate::tools::{LineSegment, Tool};

/// Where the tool is in a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Draws a stripe across the drag path for every drag sample.
///
/// Each stripe sits on the perpendicular bisector of the latest movement,
/// so a drag leaves a trail of parallel bars like a zebra crossing.
#[derive(Debug, Clone, Default)]
pub struct ZebraTool {
    phase: DragPhase,
}

impl ZebraTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }
}

/// The step vector for one sample: `delta` itself in dynamic mode, or
/// `delta` rescaled to `state.offset`. `None` when `delta` has no direction.
pub fn step_vector(delta: Vec2, state: &ToolState) -> Option<Vec2> {
    if !is_finite_vec(delta) || delta.length() <= 0.0 {
        return None;
    }
    if state.mouse_offset {
        Some(delta)
    } else {
        with_length(delta, state.offset)
    }
}

/// The stripe for one sample, or `None` if it would be degenerate
pub fn stripe_segment(event: &DragEvent, state: &ToolState) -> Option<LineSegment> {
    if !is_finite_pos(event.point) {
        return None;
    }
    let step = step_vector(event.delta, state)?;
    let middle = midpoint_behind(event.point, event.delta);

    let top = middle + rotate_degrees(step, -90.0);
    let bottom = middle + rotate_degrees(step, 90.0);

    let segment = LineSegment::new(top, bottom);
    (is_finite_pos(top) && is_finite_pos(bottom) && segment.length() > 0.0).then_some(segment)
}

impl Tool for ZebraTool {
    fn name(&self) -> &'static str {
        "Zebra"
    }

    fn activate(&mut self) {
        self.phase = DragPhase::Idle;
    }

    fn deactivate(&mut self) {
        self.phase = DragPhase::Idle;
    }

    fn on_pointer_down(&mut self, _pos: Pos2) {
        self.phase = DragPhase::Dragging;
    }

    fn on_pointer_drag(&mut self, event: &DragEvent, state: &ToolState) -> Option<LineSegment> {
        if self.phase != DragPhase::Dragging {
            return None;
        }
        let segment = stripe_segment(event, state);
        if segment.is_none() {
            log::trace!("Skipping degenerate drag sample {:?}", event);
        }
        segment
    }

    fn on_pointer_up(&mut self) {
        self.phase = DragPhase::Idle;
    }

    fn current_state_name(&self) -> &'static str {
        match self.phase {
            DragPhase::Idle => "Idle",
            DragPhase::Dragging => "Dragging",
        }
    }
}
