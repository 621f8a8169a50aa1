use egui::{Pos2, Vec2};
use zebra_paint::geometry::rotate_degrees;
use zebra_paint::tools::{step_vector, stripe_segment};
use zebra_paint::{DragEvent, Tool, ToolState, ZebraTool};

const EPS: f32 = 1e-4;

fn approx_pos(a: Pos2, b: Pos2) -> bool {
    (a - b).length() < EPS
}

fn approx_vec(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < EPS
}

fn fixed(offset: f32) -> ToolState {
    ToolState {
        offset,
        mouse_offset: false,
        ..ToolState::default()
    }
}

fn dynamic() -> ToolState {
    ToolState {
        mouse_offset: true,
        ..ToolState::default()
    }
}

#[test]
fn test_fixed_step_has_offset_length_and_delta_direction() {
    let state = fixed(25.0);
    for delta in [
        Vec2::new(3.0, 4.0),
        Vec2::new(-0.5, 0.0),
        Vec2::new(100.0, -250.0),
        Vec2::new(0.0, 0.001),
    ] {
        let step = step_vector(delta, &state).unwrap();
        assert!((step.length() - 25.0).abs() < EPS, "step {:?} for {:?}", step, delta);
        // Same direction: parallel and pointing the same way
        assert!(step.normalized().dot(delta.normalized()) > 1.0 - EPS);
    }
}

#[test]
fn test_dynamic_step_is_delta() {
    let state = dynamic();
    for delta in [Vec2::new(3.0, 4.0), Vec2::new(-70.0, 0.25)] {
        assert_eq!(step_vector(delta, &state), Some(delta));
    }
}

#[test]
fn test_quarter_turns_are_orthogonal_and_opposite() {
    let step = Vec2::new(6.0, -2.5);
    let up = rotate_degrees(step, -90.0);
    let down = rotate_degrees(step, 90.0);

    assert!(up.dot(step).abs() < EPS);
    assert!(down.dot(step).abs() < EPS);
    assert!((up.length() - step.length()).abs() < EPS);
    assert!((down.length() - step.length()).abs() < EPS);
    assert!(approx_vec(up, -down));
}

#[test]
fn test_stripe_ends_are_antiparallel_around_the_midpoint() {
    let event = DragEvent::new(Pos2::new(40.0, 30.0), Vec2::new(8.0, 6.0));
    let segment = stripe_segment(&event, &fixed(10.0)).unwrap();

    let middle = Pos2::new(36.0, 27.0);
    let to_top = segment.from - middle;
    let to_bottom = segment.to - middle;
    assert!(approx_vec(to_top, -to_bottom));
    assert!(to_top.dot(event.delta).abs() < EPS);
    assert!((segment.length() - 20.0).abs() < EPS);
}

#[test]
fn test_single_sample_drag_with_fixed_offset() {
    // Drag from (0,0) to (10,0) in one sample
    let event = DragEvent::new(Pos2::new(10.0, 0.0), Vec2::new(10.0, 0.0));
    let segment = stripe_segment(&event, &fixed(10.0)).unwrap();

    assert!(approx_pos(segment.from, Pos2::new(5.0, 10.0)));
    assert!(approx_pos(segment.to, Pos2::new(5.0, -10.0)));
}

#[test]
fn test_single_sample_drag_with_dynamic_offset_matches_fixed() {
    let event = DragEvent::new(Pos2::new(10.0, 0.0), Vec2::new(10.0, 0.0));
    let fixed_segment = stripe_segment(&event, &fixed(10.0)).unwrap();
    let dynamic_segment = stripe_segment(&event, &dynamic()).unwrap();

    assert!(approx_pos(fixed_segment.from, dynamic_segment.from));
    assert!(approx_pos(fixed_segment.to, dynamic_segment.to));

    // A faster drag only widens the dynamic stripe
    let fast = DragEvent::new(Pos2::new(30.0, 0.0), Vec2::new(30.0, 0.0));
    assert!((stripe_segment(&fast, &fixed(10.0)).unwrap().length() - 20.0).abs() < EPS);
    assert!((stripe_segment(&fast, &dynamic()).unwrap().length() - 60.0).abs() < EPS);
}

#[test]
fn test_zero_delta_emits_nothing() {
    let event = DragEvent::new(Pos2::new(10.0, 10.0), Vec2::ZERO);
    assert_eq!(stripe_segment(&event, &fixed(10.0)), None);
    assert_eq!(stripe_segment(&event, &dynamic()), None);
}

#[test]
fn test_non_finite_input_emits_nothing() {
    let state = fixed(10.0);
    let nan_delta = DragEvent::new(Pos2::new(1.0, 1.0), Vec2::new(f32::NAN, 1.0));
    let inf_point = DragEvent::new(Pos2::new(f32::INFINITY, 1.0), Vec2::new(1.0, 1.0));
    assert_eq!(stripe_segment(&nan_delta, &state), None);
    assert_eq!(stripe_segment(&inf_point, &state), None);
}

#[test]
fn test_zero_offset_emits_nothing() {
    let event = DragEvent::new(Pos2::new(10.0, 0.0), Vec2::new(10.0, 0.0));
    assert_eq!(stripe_segment(&event, &fixed(0.0)), None);
}

#[test]
fn test_tool_only_draws_while_dragging() {
    let state = ToolState::default();
    let event = DragEvent::new(Pos2::new(10.0, 0.0), Vec2::new(10.0, 0.0));
    let mut tool = ZebraTool::new();
    tool.activate();

    assert_eq!(tool.current_state_name(), "Idle");
    assert!(tool.on_pointer_drag(&event, &state).is_none());

    tool.on_pointer_down(Pos2::ZERO);
    assert_eq!(tool.current_state_name(), "Dragging");
    assert!(tool.on_pointer_drag(&event, &state).is_some());

    tool.on_pointer_up();
    assert!(tool.on_pointer_drag(&event, &state).is_none());
}
