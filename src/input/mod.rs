use egui::{Pos2, Rect, Response};

mod router;
mod sampler;

pub use router::route_event;
pub use sampler::{DragEvent, DragSampler};

/// Pointer events on the canvas, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down(Pos2),
    /// Pointer moved while the button is held
    Move(Pos2),
    /// Button released, ending the drag
    Up,
}

/// Translate the canvas response of one frame into pointer events.
///
/// Positions are made relative to `canvas_rect.min` so the drawing does not
/// depend on where the canvas sits in the window.
pub fn pointer_events(response: &Response, canvas_rect: Rect) -> Vec<PointerEvent> {
    let mut events = Vec::new();
    let local = |pos: Pos2| pos - canvas_rect.min.to_vec2();

    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(PointerEvent::Down(local(pos)));
        }
    }
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(PointerEvent::Move(local(pos)));
        }
    }
    if response.drag_stopped() {
        events.push(PointerEvent::Up);
    }

    events
}
