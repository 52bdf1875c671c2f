//! State shared by every entry point of the behavior.
//!
//! Kept apart from the drag helper so the helper can borrow it as its
//! [`DragPolicy`] while the behavior drives the helper.

use crate::callback::SheetCallback;
use crate::config::{PeekSize, SheetConfig};
use crate::edge::SlideEdge;
use crate::geometry::{auto_peek_size, SheetGeometry};
use crate::state::SlideState;
use slidesheet_core::Orientation;
use slidesheet_foundation::{
    DragPolicy, EdgeFlags, PointerEvent, PointerId, VelocityTracker1D, ViewConfiguration, ViewId,
    ViewTree,
};

/// Bookkeeping for one touch sequence or nested scroll.
#[derive(Default)]
pub(crate) struct GestureSession {
    pub(crate) active_pointer: Option<PointerId>,
    pub(crate) initial_x: i32,
    pub(crate) initial_y: i32,
    pub(crate) touching_scrolling_child: bool,
    /// The sequence started outside the sheet; nothing is intercepted until
    /// it ends.
    pub(crate) ignore_events: bool,
    pub(crate) velocity_tracker: VelocityTracker1D,
    pub(crate) last_nested_scroll_delta: i32,
    pub(crate) nested_scrolled: bool,
}

pub(crate) struct Sheet {
    pub(crate) edge: SlideEdge,
    pub(crate) view_configuration: ViewConfiguration,
    pub(crate) peek_size: PeekSize,
    pub(crate) hideable: bool,
    pub(crate) skip_collapsed: bool,
    pub(crate) edge_drag_enabled: bool,
    pub(crate) state: SlideState,
    pub(crate) geometry: SheetGeometry,
    /// Peek changed while no sheet view was attached.
    pub(crate) needs_offset_update: bool,
    pub(crate) child: Option<ViewId>,
    pub(crate) scrolling_child: Option<ViewId>,
    pub(crate) callback: Option<Box<dyn SheetCallback>>,
    pub(crate) session: GestureSession,
}

impl Sheet {
    pub(crate) fn new(config: SheetConfig) -> Self {
        Self {
            edge: config.edge,
            view_configuration: config.view_configuration,
            peek_size: config.peek_size,
            hideable: config.hideable,
            skip_collapsed: config.skip_collapsed,
            edge_drag_enabled: config.edge_drag_enabled,
            state: SlideState::Collapsed,
            geometry: SheetGeometry::new(config.edge, 0, 0, 0),
            needs_offset_update: false,
            child: None,
            scrolling_child: None,
            callback: None,
            session: GestureSession::default(),
        }
    }

    pub(crate) fn orientation(&self) -> Orientation {
        self.edge.orientation()
    }

    /// Leading coordinate of `view` along the slide axis.
    pub(crate) fn position_of<T: ViewTree + ?Sized>(&self, tree: &T, view: ViewId) -> Option<i32> {
        tree.bounds(view)
            .map(|bounds| bounds.start(self.orientation()))
    }

    pub(crate) fn resolve_peek(&self, parent_size: i32, child_size: i32) -> i32 {
        match self.peek_size {
            PeekSize::Auto => auto_peek_size(parent_size, child_size)
                .max(self.view_configuration.min_peek_size),
            PeekSize::Px(peek) => peek,
        }
    }

    pub(crate) fn update_geometry(&mut self, parent_size: i32, child_size: i32) {
        let peek = self.resolve_peek(parent_size, child_size);
        self.geometry = SheetGeometry::new(self.edge, parent_size, child_size, peek);
        self.needs_offset_update = false;
    }

    pub(crate) fn edge_tracking(&self) -> EdgeFlags {
        if self.edge_drag_enabled {
            self.edge.drag_edge()
        } else {
            EdgeFlags::NONE
        }
    }

    /// Hidden is only reachable by hideable sheets.
    pub(crate) fn sanitize(&self, state: SlideState) -> SlideState {
        if state == SlideState::Hidden && !self.hideable {
            SlideState::Collapsed
        } else {
            state
        }
    }

    pub(crate) fn set_state_internal(&mut self, state: SlideState) {
        let state = self.sanitize(state);
        if self.state == state {
            return;
        }
        log::debug!("sheet state {:?} -> {:?}", self.state, state);
        self.state = state;
        if let (Some(child), Some(callback)) = (self.child, self.callback.as_mut()) {
            callback.on_state_changed(child, state);
        }
    }

    pub(crate) fn dispatch_on_slide(&mut self, position: i32) {
        let Some(child) = self.child else {
            return;
        };
        let offset = self.geometry.slide_offset(position);
        log::trace!("sheet {child} at {position} (offset {offset:.3})");
        if let Some(callback) = self.callback.as_mut() {
            callback.on_slide(child, offset);
        }
    }

    /// Target rest state for a sheet let go at `position`. `velocity` picks
    /// the direction; `hide_velocity` feeds the hide projection.
    pub(crate) fn select_target(
        &self,
        position: i32,
        velocity: f32,
        hide_velocity: f32,
    ) -> SlideState {
        if self
            .geometry
            .should_hide(position, hide_velocity, self.hideable, self.skip_collapsed)
        {
            SlideState::Hidden
        } else if self.geometry.is_toward_expanded(velocity)
            || (velocity == 0.0 && self.geometry.is_closer_to_expanded(position))
        {
            SlideState::Expanded
        } else {
            SlideState::Collapsed
        }
    }

    /// Velocity of the current touch sequence along the slide axis.
    pub(crate) fn session_velocity(&self) -> f32 {
        self.session
            .velocity_tracker
            .compute_velocity(self.view_configuration.max_fling_velocity)
    }

    pub(crate) fn reset_session(&mut self) {
        self.session.active_pointer = None;
        self.session.touching_scrolling_child = false;
        self.session.velocity_tracker.clear();
    }

    /// Ends the touch sequence. The velocity samples stay until the next
    /// down.
    pub(crate) fn end_touch_sequence(&mut self) {
        self.session.active_pointer = None;
        self.session.touching_scrolling_child = false;
        self.session.ignore_events = false;
    }

    pub(crate) fn track(&mut self, event: &PointerEvent) {
        let orientation = self.orientation();
        self.session.velocity_tracker.add_movement(event, orientation);
    }

    /// Pointer travel from the initial touch along the slide axis, as
    /// whole pixels.
    fn travel(&self, event: &PointerEvent) -> i32 {
        match self.orientation() {
            Orientation::Vertical => self.session.initial_y - event.y(),
            Orientation::Horizontal => self.session.initial_x - event.x(),
        }
    }

    pub(crate) fn touch_indicates_drag(&self, event: &PointerEvent) -> bool {
        self.travel(event).abs() > self.view_configuration.touch_slop
    }

    /// Whether `view` could scroll either way along the axis the pointer has
    /// mostly travelled on.
    pub(crate) fn can_scroll_in_event_direction<T: ViewTree + ?Sized>(
        &self,
        tree: &T,
        view: ViewId,
        event: &PointerEvent,
    ) -> bool {
        let vertical = self.session.initial_y - event.y();
        let horizontal = self.session.initial_x - event.x();
        let (orientation, direction) = if vertical.abs() > horizontal.abs() {
            (Orientation::Vertical, vertical)
        } else {
            (Orientation::Horizontal, horizontal)
        };
        tree.can_scroll(view, orientation, direction) || tree.can_scroll(view, orientation, -direction)
    }
}

impl<H: ViewTree + ?Sized> DragPolicy<H> for Sheet {
    fn try_capture_view(&self, host: &H, view: ViewId, pointer: PointerId) -> bool {
        if self.state == SlideState::Dragging || self.session.touching_scrolling_child {
            return false;
        }
        // Content that can still scroll back gets the gesture first.
        if self.state == SlideState::Expanded
            && self.session.active_pointer == Some(pointer)
            && self
                .scrolling_child
                .is_some_and(|scroll| host.can_scroll(scroll, self.orientation(), -1))
        {
            return false;
        }
        self.child == Some(view)
    }

    fn clamp_position(&self, _host: &H, _view: ViewId, position: i32) -> i32 {
        self.geometry.clamp_drag_position(position, self.hideable)
    }

    fn drag_range(&self, _host: &H, _view: ViewId) -> i32 {
        self.geometry.drag_range(self.hideable)
    }
}
