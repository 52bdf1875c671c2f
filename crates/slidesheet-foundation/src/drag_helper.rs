//! Capture, drag and settle primitive for one axis of a container.
//!
//! [`DragHelper`] watches the pointer stream a container forwards to it,
//! decides when a child should be captured, moves the captured child while
//! the pointer drags it, and animates it to a final position afterwards.
//!
//! Decisions that depend on the owner (may this view be captured, where may
//! it go) are asked through [`DragPolicy`]. Everything the owner needs to
//! react to is queued as a [`DragEvent`] and read back with
//! [`DragHelper::poll_event`], so the helper never calls into its owner while
//! the owner is borrowed.

use crate::gesture_constants::{
    ViewConfiguration, BASE_SETTLE_DURATION_MS, MAX_SETTLE_DURATION_MS,
};
use crate::input::{PointerEvent, PointerEventKind, PointerId};
use crate::scroller::{Easing, Scroller};
use crate::velocity_tracker::VelocityTracker1D;
use crate::view_tree::{ViewId, ViewTree};
use slidesheet_core::{IntRect, Orientation, Point};
use std::collections::VecDeque;

/// Set of container edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct EdgeFlags(u8);

impl EdgeFlags {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const TOP: Self = Self(1 << 2);
    pub const BOTTOM: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragState {
    Idle,
    Dragging,
    Settling,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    StateChanged(DragState),
    Captured {
        view: ViewId,
        pointer: Option<PointerId>,
    },
    /// The view moved; `position` is its new leading coordinate.
    PositionChanged {
        view: ViewId,
        position: i32,
        delta: i32,
    },
    /// The pointer let go of the captured view. Answer with
    /// [`DragHelper::settle_captured_view_at`] to animate it somewhere.
    Released { view: ViewId, velocity: f32 },
    /// A drag started inside a tracked edge band.
    EdgeDragStarted {
        edges: EdgeFlags,
        pointer: PointerId,
    },
}

/// Container capabilities the helper needs beyond plain tree queries.
pub trait DragHost: ViewTree {
    fn container_bounds(&self) -> IntRect;

    /// Topmost child of the container under the point, if any.
    fn top_child_under(&self, x: i32, y: i32) -> Option<ViewId>;

    fn offset_view(&mut self, view: ViewId, orientation: Orientation, delta: i32);
}

/// Owner decisions consulted while tracking a gesture.
pub trait DragPolicy<H: ?Sized> {
    fn try_capture_view(&self, host: &H, view: ViewId, pointer: PointerId) -> bool;

    /// Constrains a proposed leading coordinate for `view`.
    fn clamp_position(&self, host: &H, view: ViewId, position: i32) -> i32;

    /// Distance `view` may travel; 0 means it cannot be dragged.
    fn drag_range(&self, host: &H, view: ViewId) -> i32;
}

#[derive(Clone, Copy, Debug)]
struct PendingRelease {
    velocity: f32,
}

pub struct DragHelper {
    orientation: Orientation,
    config: ViewConfiguration,
    drag_state: DragState,
    captured_view: Option<ViewId>,
    active_pointer: Option<PointerId>,
    tracked_pointer: Option<PointerId>,
    initial_motion: Option<Point>,
    last_motion: Point,
    initial_edges_touched: EdgeFlags,
    edge_drags_in_progress: EdgeFlags,
    tracking_edges: EdgeFlags,
    velocity_tracker: VelocityTracker1D,
    scroller: Scroller,
    pending_release: Option<PendingRelease>,
    events: VecDeque<DragEvent>,
}

impl DragHelper {
    pub fn new(orientation: Orientation, config: ViewConfiguration) -> Self {
        Self {
            orientation,
            config,
            drag_state: DragState::Idle,
            captured_view: None,
            active_pointer: None,
            tracked_pointer: None,
            initial_motion: None,
            last_motion: Point::ZERO,
            initial_edges_touched: EdgeFlags::NONE,
            edge_drags_in_progress: EdgeFlags::NONE,
            tracking_edges: EdgeFlags::NONE,
            velocity_tracker: VelocityTracker1D::new(),
            scroller: Scroller::new(Easing::QuinticOut),
            pending_release: None,
            events: VecDeque::new(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn drag_state(&self) -> DragState {
        self.drag_state
    }

    pub fn captured_view(&self) -> Option<ViewId> {
        self.captured_view
    }

    pub fn set_edge_tracking_enabled(&mut self, edges: EdgeFlags) {
        self.tracking_edges = edges;
    }

    /// Whether the current gesture started inside any of `edges`.
    pub fn is_edge_touched(&self, edges: EdgeFlags) -> bool {
        self.initial_edges_touched.intersects(edges)
    }

    /// Next queued notification, oldest first.
    pub fn poll_event(&mut self) -> Option<DragEvent> {
        self.events.pop_front()
    }

    /// Captures `view` regardless of the policy.
    pub fn capture_child_view(&mut self, view: ViewId, pointer: Option<PointerId>) {
        self.captured_view = Some(view);
        self.active_pointer = pointer;
        self.events.push_back(DragEvent::Captured { view, pointer });
        self.set_drag_state(DragState::Dragging);
    }

    /// Forgets the current gesture without touching any view.
    pub fn cancel(&mut self) {
        self.active_pointer = None;
        self.tracked_pointer = None;
        self.initial_motion = None;
        self.initial_edges_touched = EdgeFlags::NONE;
        self.edge_drags_in_progress = EdgeFlags::NONE;
        self.velocity_tracker.clear();
    }

    pub fn should_intercept_touch_event<H, P>(
        &mut self,
        event: &PointerEvent,
        host: &mut H,
        policy: &P,
    ) -> bool
    where
        H: DragHost + ?Sized,
        P: DragPolicy<H> + ?Sized,
    {
        self.flush_release();
        if event.kind == PointerEventKind::Down {
            self.cancel();
        }
        self.velocity_tracker.add_movement(event, self.orientation);

        match event.kind {
            PointerEventKind::Down => {
                self.save_initial_motion(event, host);
                let to_capture = host.top_child_under(event.x(), event.y());
                if to_capture.is_some()
                    && to_capture == self.captured_view
                    && self.drag_state == DragState::Settling
                {
                    self.try_capture_view_for_drag(to_capture, event.id, host, policy);
                }
            }
            PointerEventKind::Move => {
                if self.tracked_pointer == Some(event.id) {
                    self.intercept_move(event, host, policy);
                    self.last_motion = event.position;
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => self.cancel(),
        }

        self.drag_state == DragState::Dragging
    }

    fn intercept_move<H, P>(&mut self, event: &PointerEvent, host: &mut H, policy: &P)
    where
        H: DragHost + ?Sized,
        P: DragPolicy<H> + ?Sized,
    {
        let Some(initial) = self.initial_motion else {
            return;
        };
        let dx = event.position.x - initial.x;
        let dy = event.position.y - initial.y;
        let to_capture = host.top_child_under(event.x(), event.y());
        let past_slop = to_capture
            .is_some_and(|view| self.check_touch_slop(host, policy, view, dx, dy));

        if past_slop {
            if let Some(view) = to_capture {
                // A drag that could not move the view at all is left to
                // whoever else is watching the stream.
                let old = host.bounds(view).map_or(0, |b| b.start(self.orientation));
                let axis_delta = self.axis_delta(dx, dy) as i32;
                let clamped = policy.clamp_position(host, view, old + axis_delta);
                if policy.drag_range(host, view) == 0 || clamped == old {
                    return;
                }
            }
        }

        self.report_new_edge_drags(dx, dy, event.id);
        if self.drag_state == DragState::Dragging {
            return;
        }
        if past_slop {
            self.try_capture_view_for_drag(to_capture, event.id, host, policy);
        }
    }

    pub fn process_touch_event<H, P>(&mut self, event: &PointerEvent, host: &mut H, policy: &P)
    where
        H: DragHost + ?Sized,
        P: DragPolicy<H> + ?Sized,
    {
        self.flush_release();
        if event.kind == PointerEventKind::Down {
            self.cancel();
        }
        self.velocity_tracker.add_movement(event, self.orientation);

        match event.kind {
            PointerEventKind::Down => {
                self.save_initial_motion(event, host);
                let to_capture = host.top_child_under(event.x(), event.y());
                self.try_capture_view_for_drag(to_capture, event.id, host, policy);
            }
            PointerEventKind::Move => {
                if self.drag_state == DragState::Dragging {
                    if self.active_pointer.is_some() && self.active_pointer != Some(event.id) {
                        return;
                    }
                    let delta = event.along(self.orientation) - self.last_motion.along(self.orientation);
                    self.drag_by(host, policy, delta as i32);
                    self.last_motion = event.position;
                } else if self.tracked_pointer == Some(event.id) {
                    if let Some(initial) = self.initial_motion {
                        let dx = event.position.x - initial.x;
                        let dy = event.position.y - initial.y;
                        self.report_new_edge_drags(dx, dy, event.id);
                        if self.drag_state != DragState::Dragging {
                            let to_capture = host.top_child_under(event.x(), event.y());
                            if let Some(view) = to_capture {
                                if self.check_touch_slop(host, policy, view, dx, dy) {
                                    self.try_capture_view_for_drag(
                                        to_capture, event.id, host, policy,
                                    );
                                }
                            }
                        }
                    }
                    self.last_motion = event.position;
                }
            }
            PointerEventKind::Up => {
                if self.drag_state == DragState::Dragging {
                    let velocity = self.release_velocity();
                    self.dispatch_view_released(velocity);
                }
                self.cancel();
            }
            PointerEventKind::Cancel => {
                if self.drag_state == DragState::Dragging {
                    self.dispatch_view_released(0.0);
                }
                self.cancel();
            }
        }
    }

    /// Animates the captured view to `final_position` using the velocity the
    /// pointer was released with. Only valid while answering a
    /// [`DragEvent::Released`]. Returns true if a settle was started.
    pub fn settle_captured_view_at<H, P>(
        &mut self,
        host: &mut H,
        policy: &P,
        final_position: i32,
    ) -> bool
    where
        H: DragHost + ?Sized,
        P: DragPolicy<H> + ?Sized,
    {
        let Some(release) = self.pending_release.take() else {
            log::warn!("settle_captured_view_at called outside of a view release");
            return false;
        };
        self.force_settle_captured_view_at(host, policy, final_position, release.velocity)
    }

    /// Animates `view` to `final_position` from rest. Returns true if the
    /// view is not already there and a settle was started.
    pub fn smooth_slide_view_to<H, P>(
        &mut self,
        host: &mut H,
        policy: &P,
        view: ViewId,
        final_position: i32,
    ) -> bool
    where
        H: DragHost + ?Sized,
        P: DragPolicy<H> + ?Sized,
    {
        self.flush_release();
        self.captured_view = Some(view);
        self.active_pointer = None;
        let started = self.force_settle_captured_view_at(host, policy, final_position, 0.0);
        if !started && self.drag_state == DragState::Idle {
            self.captured_view = None;
        }
        started
    }

    /// Advances a running settle to `frame_time_ms`. Returns true while more
    /// frames are needed.
    pub fn continue_settling<H: DragHost + ?Sized>(&mut self, host: &mut H, frame_time_ms: i64) -> bool {
        self.flush_release();
        if self.drag_state != DragState::Settling {
            return false;
        }

        let mut keep_going = self.scroller.compute_scroll_offset(frame_time_ms);
        let position = self.scroller.current_position();
        self.move_captured_to(host, position);

        if keep_going && position == self.scroller.final_position() {
            self.scroller.abort_animation();
            keep_going = false;
        }
        if !keep_going {
            self.set_drag_state(DragState::Idle);
        }

        self.drag_state == DragState::Settling
    }

    fn force_settle_captured_view_at<H, P>(
        &mut self,
        host: &mut H,
        policy: &P,
        final_position: i32,
        velocity: f32,
    ) -> bool
    where
        H: DragHost + ?Sized,
        P: DragPolicy<H> + ?Sized,
    {
        let Some(view) = self.captured_view else {
            return false;
        };
        let Some(bounds) = host.bounds(view) else {
            return false;
        };
        let start = bounds.start(self.orientation);
        let delta = final_position - start;
        if delta == 0 {
            self.scroller.abort_animation();
            self.set_drag_state(DragState::Idle);
            return false;
        }

        let range = policy.drag_range(host, view);
        let extent = host.container_bounds().extent(self.orientation);
        let duration = self.compute_settle_duration(delta, velocity, range, extent);
        self.scroller.start_scroll(start, delta, duration);
        self.set_drag_state(DragState::Settling);
        true
    }

    fn compute_settle_duration(&self, delta: i32, velocity: f32, range: i32, extent: i32) -> i64 {
        if delta == 0 {
            return 0;
        }
        let velocity = self.clamp_velocity(velocity).abs();
        let duration = if velocity > 0.0 && extent > 0 {
            let half = extent as f32 / 2.0;
            let ratio = (delta.abs() as f32 / extent as f32).min(1.0);
            let distance = half + half * distance_influence_for_snap_duration(ratio);
            4 * (1000.0 * (distance / velocity).abs()).round() as i64
        } else if range > 0 {
            let fraction = delta.abs() as f32 / range as f32;
            ((fraction + 1.0) * BASE_SETTLE_DURATION_MS as f32) as i64
        } else {
            BASE_SETTLE_DURATION_MS
        };
        duration.min(MAX_SETTLE_DURATION_MS)
    }

    fn clamp_velocity(&self, velocity: f32) -> f32 {
        let magnitude = velocity.abs();
        if magnitude < self.config.min_fling_velocity {
            0.0
        } else if magnitude > self.config.max_fling_velocity {
            self.config.max_fling_velocity.copysign(velocity)
        } else {
            velocity
        }
    }

    fn release_velocity(&self) -> f32 {
        let velocity = self
            .velocity_tracker
            .compute_velocity(self.config.max_fling_velocity);
        self.clamp_velocity(velocity)
    }

    fn dispatch_view_released(&mut self, velocity: f32) {
        if let Some(view) = self.captured_view {
            self.pending_release = Some(PendingRelease { velocity });
            self.events.push_back(DragEvent::Released { view, velocity });
        } else {
            self.set_drag_state(DragState::Idle);
        }
    }

    /// A release nobody settled leaves the helper idle.
    fn flush_release(&mut self) {
        if self.pending_release.take().is_some() && self.drag_state == DragState::Dragging {
            self.set_drag_state(DragState::Idle);
        }
    }

    fn drag_by<H, P>(&mut self, host: &mut H, policy: &P, delta: i32)
    where
        H: DragHost + ?Sized,
        P: DragPolicy<H> + ?Sized,
    {
        let Some(view) = self.captured_view else {
            return;
        };
        let Some(bounds) = host.bounds(view) else {
            return;
        };
        let old = bounds.start(self.orientation);
        let clamped = policy.clamp_position(host, view, old + delta);
        self.move_captured_to(host, clamped);
    }

    fn move_captured_to<H: DragHost + ?Sized>(&mut self, host: &mut H, position: i32) {
        let Some(view) = self.captured_view else {
            return;
        };
        let Some(bounds) = host.bounds(view) else {
            return;
        };
        let delta = position - bounds.start(self.orientation);
        if delta != 0 {
            host.offset_view(view, self.orientation, delta);
            self.events.push_back(DragEvent::PositionChanged {
                view,
                position,
                delta,
            });
        }
    }

    fn try_capture_view_for_drag<H, P>(
        &mut self,
        view: Option<ViewId>,
        pointer: PointerId,
        host: &H,
        policy: &P,
    ) -> bool
    where
        H: DragHost + ?Sized,
        P: DragPolicy<H> + ?Sized,
    {
        let Some(view) = view else {
            return false;
        };
        if self.captured_view == Some(view) && self.active_pointer == Some(pointer) {
            return true;
        }
        if policy.try_capture_view(host, view, pointer) {
            self.capture_child_view(view, Some(pointer));
            return true;
        }
        false
    }

    fn check_touch_slop<H, P>(&self, host: &H, policy: &P, view: ViewId, dx: f32, dy: f32) -> bool
    where
        H: DragHost + ?Sized,
        P: DragPolicy<H> + ?Sized,
    {
        policy.drag_range(host, view) > 0
            && self.axis_delta(dx, dy).abs() > self.config.touch_slop as f32
    }

    fn report_new_edge_drags(&mut self, dx: f32, dy: f32, pointer: PointerId) {
        let mut started = EdgeFlags::NONE;
        for (edge, delta, other) in [
            (EdgeFlags::LEFT, dx, dy),
            (EdgeFlags::TOP, dy, dx),
            (EdgeFlags::RIGHT, dx, dy),
            (EdgeFlags::BOTTOM, dy, dx),
        ] {
            if self.check_new_edge_drag(delta, other, edge) {
                started.insert(edge);
            }
        }

        if !started.is_empty() {
            self.edge_drags_in_progress.insert(started);
            self.events.push_back(DragEvent::EdgeDragStarted {
                edges: started,
                pointer,
            });
        }
    }

    fn check_new_edge_drag(&self, delta: f32, other: f32, edge: EdgeFlags) -> bool {
        let slop = self.config.touch_slop as f32;
        let (delta, other) = (delta.abs(), other.abs());
        if !self.initial_edges_touched.contains(edge)
            || !self.tracking_edges.contains(edge)
            || self.edge_drags_in_progress.contains(edge)
            || (delta <= slop && other <= slop)
        {
            return false;
        }
        delta > slop
    }

    fn save_initial_motion<H: DragHost + ?Sized>(&mut self, event: &PointerEvent, host: &H) {
        self.tracked_pointer = Some(event.id);
        self.initial_motion = Some(event.position);
        self.last_motion = event.position;
        self.initial_edges_touched = self.edges_touched(event.x(), event.y(), host);
    }

    fn edges_touched<H: DragHost + ?Sized>(&self, x: i32, y: i32, host: &H) -> EdgeFlags {
        let container = host.container_bounds();
        let size = self.config.edge_size;
        let mut edges = EdgeFlags::NONE;
        if x < container.left + size {
            edges.insert(EdgeFlags::LEFT);
        }
        if y < container.top + size {
            edges.insert(EdgeFlags::TOP);
        }
        if x > container.right - size {
            edges.insert(EdgeFlags::RIGHT);
        }
        if y > container.bottom - size {
            edges.insert(EdgeFlags::BOTTOM);
        }
        edges
    }

    fn axis_delta(&self, dx: f32, dy: f32) -> f32 {
        match self.orientation {
            Orientation::Horizontal => dx,
            Orientation::Vertical => dy,
        }
    }

    fn set_drag_state(&mut self, state: DragState) {
        if self.drag_state == state {
            return;
        }
        self.drag_state = state;
        self.events.push_back(DragEvent::StateChanged(state));
        if state == DragState::Idle {
            self.captured_view = None;
        }
    }
}

/// Longer snaps take proportionally less time per pixel.
fn distance_influence_for_snap_duration(fraction: f32) -> f32 {
    let fraction = (fraction - 0.5) * 0.3 * std::f32::consts::FRAC_PI_2;
    fraction.sin()
}

#[cfg(test)]
#[path = "tests/drag_helper_tests.rs"]
mod tests;
