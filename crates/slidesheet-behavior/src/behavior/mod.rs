//! The sliding sheet behavior.
//!
//! A [`SlidingSheetBehavior`] is attached to one child of a container and
//! turns it into a sheet that rests Expanded, Collapsed (showing only its
//! peek) or Hidden against one edge of that container. The host forwards
//! layout passes, pointer events, nested scrolls from descendants and
//! display frames; the behavior moves the sheet through [`SheetHost`] and
//! reports progress to a [`SheetCallback`].

mod nested_scroll;
mod settle;
mod sheet;
mod touch;

pub use nested_scroll::ScrollAxes;

use crate::callback::SheetCallback;
use crate::config::{PeekSize, SheetConfig};
use crate::edge::SlideEdge;
use crate::error::SheetError;
use crate::geometry::SheetGeometry;
use crate::host::SheetHost;
use crate::saved_state::SavedState;
use crate::state::SlideState;
use sheet::Sheet;
use slidesheet_core::FrameQueue;
use slidesheet_foundation::{find_scrolling_child, DragHelper, ViewId};

/// Work continued on a later display frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SheetTask {
    /// Advance the running settle; commit `target` once it lands.
    Settle { target: SlideState },
    /// A state request waiting for the host's pending layout pass.
    StartSettle { target: SlideState },
}

pub struct SlidingSheetBehavior {
    sheet: Sheet,
    drag_helper: Option<DragHelper>,
    tasks: FrameQueue<SheetTask>,
}

impl Default for SlidingSheetBehavior {
    fn default() -> Self {
        Self::new(SheetConfig::default())
    }
}

impl SlidingSheetBehavior {
    pub fn new(config: SheetConfig) -> Self {
        Self {
            sheet: Sheet::new(config),
            drag_helper: None,
            tasks: FrameQueue::new(),
        }
    }

    pub fn slide_edge(&self) -> SlideEdge {
        self.sheet.edge
    }

    pub fn state(&self) -> SlideState {
        self.sheet.state
    }

    /// Rest positions computed by the last layout pass.
    pub fn geometry(&self) -> &SheetGeometry {
        &self.sheet.geometry
    }

    /// The sheet view, once laid out.
    pub fn child(&self) -> Option<ViewId> {
        self.sheet.child
    }

    /// Nested-scrolling descendant found by the last layout pass.
    pub fn scrolling_child(&self) -> Option<ViewId> {
        self.sheet.scrolling_child
    }

    pub fn peek_size(&self) -> PeekSize {
        self.sheet.peek_size
    }

    /// Changes the collapsed extent. A Collapsed sheet is re-laid out so it
    /// rests at the new peek.
    pub fn set_peek_size<H: SheetHost + ?Sized>(&mut self, host: &mut H, peek_size: PeekSize) {
        let needs_layout = match peek_size {
            PeekSize::Auto => {
                let changed = !self.sheet.peek_size.is_auto();
                self.sheet.peek_size = PeekSize::Auto;
                changed
            }
            PeekSize::Px(value) => {
                let peek_size = PeekSize::px(value);
                let changed = self.sheet.peek_size != peek_size;
                if changed {
                    self.sheet.peek_size = peek_size;
                    let child_size = self.sheet.child.and_then(|child| host.bounds(child));
                    match child_size {
                        Some(bounds) => {
                            let parent_size = self.sheet.geometry.parent_size;
                            self.sheet
                                .update_geometry(parent_size, bounds.extent(self.sheet.orientation()));
                        }
                        None => self.sheet.needs_offset_update = true,
                    }
                }
                changed
            }
        };

        if needs_layout && self.sheet.state == SlideState::Collapsed {
            if let Some(child) = self.sheet.child {
                host.request_layout(child);
            }
        }
    }

    pub fn is_hideable(&self) -> bool {
        self.sheet.hideable
    }

    pub fn set_hideable(&mut self, hideable: bool) {
        self.sheet.hideable = hideable;
    }

    pub fn skip_collapsed(&self) -> bool {
        self.sheet.skip_collapsed
    }

    pub fn set_skip_collapsed(&mut self, skip_collapsed: bool) {
        self.sheet.skip_collapsed = skip_collapsed;
    }

    pub fn is_edge_drag_enabled(&self) -> bool {
        self.sheet.edge_drag_enabled
    }

    pub fn set_edge_drag_enabled(&mut self, enabled: bool) {
        self.sheet.edge_drag_enabled = enabled;
        let edges = self.sheet.edge_tracking();
        if let Some(helper) = self.drag_helper.as_mut() {
            helper.set_edge_tracking_enabled(edges);
        }
    }

    pub fn set_callback(&mut self, callback: impl SheetCallback + 'static) {
        self.sheet.callback = Some(Box::new(callback));
    }

    pub fn remove_callback(&mut self) {
        self.sheet.callback = None;
    }

    /// Lays the sheet out and moves it to where its state says it belongs.
    ///
    /// While Dragging or Settling the sheet keeps its on-screen position;
    /// otherwise it snaps to the rest position of the current state. Returns
    /// false if the host reports no bounds for `child`.
    pub fn on_layout_child<H: SheetHost + ?Sized>(&mut self, host: &mut H, child: ViewId) -> bool {
        let orientation = self.sheet.orientation();
        let saved_position = self.sheet.position_of(&*host, child);
        host.layout_child(child);

        let Some(bounds) = host.bounds(child) else {
            log::warn!("sheet view {child} has no bounds after layout");
            return false;
        };
        let parent_size = host.container_bounds().extent(orientation);
        self.sheet
            .update_geometry(parent_size, bounds.extent(orientation));

        let current = bounds.start(orientation);
        let target = if self.sheet.state.is_moving() {
            saved_position
        } else {
            self.sheet.geometry.rest_position(self.sheet.state)
        }
        .unwrap_or(current);
        if target != current {
            host.offset_view(child, orientation, target - current);
        }

        let view_configuration = self.sheet.view_configuration;
        let helper = self
            .drag_helper
            .get_or_insert_with(|| DragHelper::new(orientation, view_configuration));
        helper.set_edge_tracking_enabled(self.sheet.edge_tracking());

        self.sheet.child = Some(child);
        self.sheet.scrolling_child = find_scrolling_child(&*host, child);
        true
    }

    /// Releases the sheet view. Later state requests are stored until the
    /// next layout pass.
    pub fn on_detached(&mut self) {
        self.tasks.clear();
        if let Some(helper) = self.drag_helper.as_mut() {
            helper.cancel();
        }
        self.sheet.child = None;
        self.sheet.scrolling_child = None;
        self.sheet.session = Default::default();
    }

    /// Moves the sheet to `state` with a settle animation.
    ///
    /// Hidden becomes Collapsed for sheets that are not hideable. Before the
    /// first layout the state is only recorded; while the host has a layout
    /// pending the animation waits for a later frame.
    pub fn set_state<H: SheetHost + ?Sized>(
        &mut self,
        host: &mut H,
        state: SlideState,
    ) -> Result<(), SheetError> {
        if state.is_moving() {
            log::warn!("rejecting request to enter transient state {state:?}");
            return Err(SheetError::IllegalTarget(state));
        }

        self.tasks
            .retain(|task| !matches!(task, SheetTask::StartSettle { .. }));
        let target = self.sheet.sanitize(state);
        if target == self.sheet.state {
            return Ok(());
        }

        let Some(child) = self.sheet.child else {
            self.sheet.state = target;
            return Ok(());
        };

        if host.is_layout_requested() {
            self.tasks.post(SheetTask::StartSettle { target });
            host.request_frame();
        } else {
            self.start_settling_animation(host, child, target);
        }
        Ok(())
    }

    pub fn save_state<S>(&self, host_state: S) -> SavedState<S> {
        SavedState::new(host_state, self.sheet.state)
    }

    /// Adopts a saved state and hands back the host's part of it.
    pub fn restore_state<S>(&mut self, saved: SavedState<S>) -> S {
        self.sheet.state = saved.restored_state();
        saved.host_state
    }

    /// Whether the behavior is waiting for [`on_frame`](Self::on_frame).
    pub fn has_pending_frame(&self) -> bool {
        self.tasks.has_frame_callbacks()
    }

    /// Runs the work queued for the frame drawn at `frame_time_nanos`.
    pub fn on_frame<H: SheetHost + ?Sized>(&mut self, host: &mut H, frame_time_nanos: u64) {
        let frame_time_ms = (frame_time_nanos / 1_000_000) as i64;
        for task in self.tasks.drain() {
            match task {
                SheetTask::Settle { target } => {
                    // A settle started earlier in this frame supersedes it.
                    if !self.has_queued_settle() {
                        self.continue_settle(host, target, frame_time_ms);
                    }
                }
                SheetTask::StartSettle { target } => {
                    if host.is_layout_requested() {
                        self.tasks.post(task);
                        host.request_frame();
                    } else if let Some(child) = self.sheet.child {
                        self.start_settling_animation(host, child, target);
                    } else {
                        log::warn!("dropping state request {target:?}; sheet is detached");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/behavior_tests.rs"]
mod tests;
