use slidesheet::{SheetConfig, SlideEdge, SlideState};
use slidesheet_core::IntRect;
use slidesheet_foundation::ViewKind;
use slidesheet_testing::{FakeHost, SheetRobot};

/// A 400x1000 container holding a full-size bottom sheet with a 200px peek.
fn bottom_robot(configure: impl FnOnce(SheetConfig) -> SheetConfig) -> SheetRobot {
    let mut host = FakeHost::new(400, 1000);
    let sheet = host.add_view(None, IntRect::new(0, 0, 400, 1000), ViewKind::Group);
    let config = configure(SheetConfig::new(SlideEdge::Bottom).with_peek_size(200));
    SheetRobot::new(host, sheet, config)
}

fn expanded(mut robot: SheetRobot) -> SheetRobot {
    robot.set_state(SlideState::Expanded).unwrap();
    robot.wait_for_idle();
    assert_eq!(robot.position(), 0);
    robot.callback().clear();
    robot
}

#[test]
fn fling_up_expands_a_collapsed_sheet() {
    let mut robot = bottom_robot(|config| config);
    assert_eq!(robot.position(), 800);

    robot.fling((200.0, 900.0), (200.0, 600.0));
    assert_eq!(robot.state(), SlideState::Settling);
    robot.wait_for_idle();

    assert_eq!(robot.state(), SlideState::Expanded);
    assert_eq!(robot.position(), 0);
    assert_eq!(
        robot.callback().states(),
        vec![SlideState::Dragging, SlideState::Settling, SlideState::Expanded]
    );
}

#[test]
fn slow_release_settles_at_the_nearer_rest() {
    let mut robot = bottom_robot(|config| config);
    robot.drag((200.0, 900.0), (200.0, 300.0));
    robot.wait_for_idle();
    assert_eq!(robot.state(), SlideState::Expanded);

    let mut robot = bottom_robot(|config| config);
    robot.drag((200.0, 900.0), (200.0, 700.0));
    robot.wait_for_idle();
    assert_eq!(robot.state(), SlideState::Collapsed);
    assert_eq!(robot.position(), 800);
}

#[test]
fn fast_downward_fling_hides_a_hideable_sheet() {
    let mut robot = bottom_robot(|config| config.with_hideable(true));
    robot.fling((200.0, 850.0), (200.0, 1000.0));
    robot.wait_for_idle();

    assert_eq!(robot.state(), SlideState::Hidden);
    assert_eq!(robot.position(), 1000);
}

#[test]
fn sheet_that_is_not_hideable_never_hides() {
    let mut robot = bottom_robot(|config| config);
    robot.fling((200.0, 850.0), (200.0, 1000.0));
    robot.wait_for_idle();

    assert_eq!(robot.state(), SlideState::Collapsed);
    assert_eq!(robot.position(), 800);
    assert!(!robot.callback().states().contains(&SlideState::Hidden));

    robot.set_state(SlideState::Hidden).unwrap();
    robot.wait_for_idle();
    assert_eq!(robot.state(), SlideState::Collapsed);
}

#[test]
fn skip_collapsed_hides_past_the_midpoint() {
    let robot = bottom_robot(|config| config.with_hideable(true).with_skip_collapsed(true));
    let mut robot = expanded(robot);

    robot.drag((200.0, 100.0), (200.0, 600.0));
    robot.wait_for_idle();

    assert_eq!(robot.state(), SlideState::Hidden);
    assert_eq!(robot.position(), 1000);
}

#[test]
fn dragging_moves_the_sheet_with_the_pointer() {
    let mut robot = bottom_robot(|config| config);
    robot.drag_without_release((200.0, 900.0), (200.0, 600.0), 10, 16);

    assert_eq!(robot.state(), SlideState::Dragging);
    // The move that crossed the slop only captures.
    assert_eq!(robot.position(), 530);
    let offsets = robot.callback().slide_offsets();
    assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));

    robot.release(60);
    robot.wait_for_idle();
    assert_eq!(robot.state(), SlideState::Collapsed);
}

#[test]
fn top_sheet_expands_downward() {
    let mut host = FakeHost::new(400, 1000);
    let sheet = host.add_view(None, IntRect::new(0, 0, 400, 1000), ViewKind::Group);
    let mut robot = SheetRobot::new(
        host,
        sheet,
        SheetConfig::new(SlideEdge::Top).with_peek_size(200),
    );
    assert_eq!(robot.position(), -800);

    robot.fling((200.0, 100.0), (200.0, 400.0));
    robot.wait_for_idle();
    assert_eq!(robot.state(), SlideState::Expanded);
    assert_eq!(robot.position(), 0);

    let offsets = robot.callback().slide_offsets();
    assert!(offsets.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(offsets.last(), Some(&1.0));
}

#[test]
fn left_sheet_follows_horizontal_gestures() {
    let mut host = FakeHost::new(1000, 400);
    let sheet = host.add_view(None, IntRect::new(0, 0, 800, 400), ViewKind::Group);
    let mut robot = SheetRobot::new(
        host,
        sheet,
        SheetConfig::new(SlideEdge::Left).with_peek_size(200),
    );
    assert_eq!(robot.position(), -600);

    robot.fling((100.0, 200.0), (500.0, 200.0));
    robot.wait_for_idle();
    assert_eq!(robot.state(), SlideState::Expanded);
    assert_eq!(robot.position(), 0);

    robot.drag((700.0, 200.0), (300.0, 200.0));
    robot.wait_for_idle();
    assert_eq!(robot.state(), SlideState::Collapsed);
    assert_eq!(robot.position(), -600);
}

#[test]
fn right_sheet_expands_to_its_minimum_offset() {
    let mut host = FakeHost::new(1000, 400);
    let sheet = host.add_view(None, IntRect::new(200, 0, 1000, 400), ViewKind::Group);
    let mut robot = SheetRobot::new(
        host,
        sheet,
        SheetConfig::new(SlideEdge::Right).with_peek_size(200),
    );
    assert_eq!(robot.position(), 800);

    robot.drag((900.0, 200.0), (300.0, 200.0));
    robot.wait_for_idle();
    assert_eq!(robot.state(), SlideState::Expanded);
    assert_eq!(robot.position(), 200);
}

#[test]
fn edge_drag_pulls_a_hidden_sheet_back() {
    let mut robot = bottom_robot(|config| config.with_hideable(true).with_edge_drag(true));
    robot.set_state(SlideState::Hidden).unwrap();
    robot.wait_for_idle();
    assert_eq!(robot.position(), 1000);

    robot.press(200.0, 990.0);
    assert!(robot.last_handled());
    assert!(robot.is_intercepted());
    for step in 1..=10 {
        robot.move_to(200.0, 990.0 - 50.0 * step as f32, 16);
    }
    assert_eq!(robot.state(), SlideState::Dragging);
    assert_eq!(robot.position(), 550);

    robot.release(60);
    robot.wait_for_idle();
    assert_eq!(robot.state(), SlideState::Collapsed);
    assert_eq!(robot.position(), 800);
}

#[test]
fn edge_drag_needs_to_be_enabled() {
    let mut robot = bottom_robot(|config| config.with_hideable(true));
    robot.set_state(SlideState::Hidden).unwrap();
    robot.wait_for_idle();

    robot.press(200.0, 990.0);
    assert!(!robot.is_intercepted());
    robot.move_to(200.0, 700.0, 16);
    robot.release(16);
    assert_eq!(robot.state(), SlideState::Hidden);
    assert_eq!(robot.position(), 1000);
}

#[test]
fn repeated_requests_notify_once_per_change() {
    let mut robot = bottom_robot(|config| config);
    robot.set_state(SlideState::Expanded).unwrap();
    robot.advance_frame();
    robot.set_state(SlideState::Expanded).unwrap();
    robot.wait_for_idle();
    robot.set_state(SlideState::Expanded).unwrap();

    assert_eq!(
        robot.callback().states(),
        vec![SlideState::Settling, SlideState::Expanded]
    );
    assert!(!robot.behavior().has_pending_frame());
}

#[test]
fn grabbing_a_settling_sheet_stops_the_settle() {
    let mut robot = bottom_robot(|config| config);
    robot.set_state(SlideState::Expanded).unwrap();
    robot.advance_frame();
    robot.advance_frame();
    let caught_at = robot.position();
    assert!(caught_at < 800 && caught_at > 0);

    robot.press(200.0, caught_at as f32 + 50.0);
    assert_eq!(robot.state(), SlideState::Dragging);
    assert!(robot.is_intercepted());
    assert!(!robot.behavior().has_pending_frame());

    robot.move_to(200.0, 990.0, 16);
    robot.release(60);
    robot.wait_for_idle();
    assert_eq!(robot.state(), SlideState::Collapsed);
}

#[test]
fn release_at_rest_deep_in_the_peek_hides() {
    let mut robot = bottom_robot(|config| config.with_hideable(true));
    robot.drag((200.0, 850.0), (200.0, 970.0));
    robot.wait_for_idle();

    assert_eq!(robot.state(), SlideState::Hidden);
    assert_eq!(robot.position(), 1000);
    let offsets = robot.callback().slide_offsets();
    assert!(offsets.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(offsets.last(), Some(&-1.0));
}

#[test]
fn cancel_settles_at_the_nearer_rest() {
    let mut robot = bottom_robot(|config| config);
    robot.drag_without_release((200.0, 900.0), (200.0, 300.0), 10, 16);
    assert!(robot.position() < 400);
    robot.cancel();
    assert!(!robot.is_intercepted());
    robot.wait_for_idle();
    assert_eq!(robot.state(), SlideState::Expanded);
    assert_eq!(robot.position(), 0);

    let mut robot = bottom_robot(|config| config);
    robot.drag_without_release((200.0, 900.0), (200.0, 700.0), 10, 16);
    robot.cancel();
    robot.wait_for_idle();
    assert_eq!(robot.state(), SlideState::Collapsed);
    assert_eq!(robot.position(), 800);
}

#[test]
fn cancelled_outside_touch_leaves_the_next_sequence_free() {
    let mut robot = bottom_robot(|config| config);
    robot.drag_without_release((200.0, 300.0), (200.0, 600.0), 10, 16);
    assert!(!robot.is_intercepted());
    robot.cancel();
    assert_eq!(robot.position(), 800);

    robot.drag((200.0, 850.0), (200.0, 250.0));
    robot.wait_for_idle();
    assert_eq!(robot.state(), SlideState::Expanded);
}
