use crate::document::PathSink;
use crate::session::ZebraSession;

use super::PointerEvent;

/// Routes a pointer event to the active session, returning the number of
/// segments written into `sink`
pub fn route_event(event: PointerEvent, session: &mut ZebraSession, sink: &mut dyn PathSink) -> usize {
    match event {
        PointerEvent::Down(pos) => {
            session.pointer_down(pos);
            0
        }
        PointerEvent::Move(pos) => session.pointer_move(pos, sink),
        PointerEvent::Up => {
            session.pointer_up();
            0
        }
    }
}
