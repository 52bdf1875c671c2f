use super::{SheetTask, SlidingSheetBehavior};
use crate::host::SheetHost;
use crate::state::SlideState;
use slidesheet_foundation::{DragEvent, DragHelper, DragState, ViewId};

impl SlidingSheetBehavior {
    /// Reacts to everything the drag helper queued since the last call.
    pub(super) fn dispatch_drag_events<H: SheetHost + ?Sized>(&mut self, host: &mut H) {
        while let Some(event) = self.drag_helper.as_mut().and_then(DragHelper::poll_event) {
            match event {
                DragEvent::StateChanged(DragState::Dragging) => {
                    self.cancel_settle();
                    self.sheet.set_state_internal(SlideState::Dragging);
                }
                DragEvent::PositionChanged { position, .. } => {
                    self.sheet.dispatch_on_slide(position);
                }
                DragEvent::Released { view, velocity } => {
                    self.on_view_released(host, view, velocity);
                }
                DragEvent::EdgeDragStarted { pointer, .. } => {
                    if let (Some(child), Some(helper)) = (self.sheet.child, self.drag_helper.as_mut()) {
                        helper.capture_child_view(child, Some(pointer));
                    }
                }
                DragEvent::StateChanged(_) | DragEvent::Captured { .. } => {}
            }
        }
    }

    fn on_view_released<H: SheetHost + ?Sized>(&mut self, host: &mut H, view: ViewId, velocity: f32) {
        let Some(position) = self.sheet.position_of(&*host, view) else {
            return;
        };
        let hide_velocity = self.sheet.session_velocity();
        let target = self.sheet.select_target(position, velocity, hide_velocity);
        let Some(final_position) = self.sheet.geometry.rest_position(target) else {
            return;
        };
        log::debug!("sheet released at {position} with {velocity:.1} px/s; settling to {target:?}");

        let sheet = &self.sheet;
        let started = self
            .drag_helper
            .as_mut()
            .is_some_and(|helper| helper.settle_captured_view_at(host, sheet, final_position));
        if started {
            self.sheet.set_state_internal(SlideState::Settling);
            self.post_settle(host, target);
        } else {
            self.sheet.set_state_internal(target);
        }
    }

    /// Starts animating the sheet toward the rest position of `target`.
    pub(super) fn start_settling_animation<H: SheetHost + ?Sized>(
        &mut self,
        host: &mut H,
        child: ViewId,
        target: SlideState,
    ) {
        let Some(final_position) = self.sheet.geometry.rest_position(target) else {
            return;
        };

        let sheet = &self.sheet;
        let started = self
            .drag_helper
            .as_mut()
            .is_some_and(|helper| helper.smooth_slide_view_to(host, sheet, child, final_position));
        if started {
            log::debug!("sheet settling to {target:?} at {final_position}");
            self.sheet.set_state_internal(SlideState::Settling);
            self.post_settle(host, target);
        } else {
            self.sheet.set_state_internal(target);
        }
        self.dispatch_drag_events(host);
    }

    /// Replaces any running settle with one that commits `target`.
    fn post_settle<H: SheetHost + ?Sized>(&mut self, host: &mut H, target: SlideState) {
        self.cancel_settle();
        self.tasks.post(SheetTask::Settle { target });
        host.request_frame();
    }

    pub(super) fn has_queued_settle(&self) -> bool {
        self.tasks
            .iter()
            .any(|task| matches!(task, SheetTask::Settle { .. }))
    }

    pub(super) fn cancel_settle(&mut self) {
        self.tasks
            .retain(|task| !matches!(task, SheetTask::Settle { .. }));
    }

    pub(super) fn continue_settle<H: SheetHost + ?Sized>(
        &mut self,
        host: &mut H,
        target: SlideState,
        frame_time_ms: i64,
    ) {
        let grabbed = self
            .drag_helper
            .as_ref()
            .is_some_and(|helper| helper.drag_state() == DragState::Dragging);
        if grabbed {
            return;
        }

        let keep_going = self
            .drag_helper
            .as_mut()
            .is_some_and(|helper| helper.continue_settling(host, frame_time_ms));
        self.dispatch_drag_events(host);

        if keep_going {
            log::trace!("settle toward {target:?} continues at {frame_time_ms}ms");
            self.tasks.post(SheetTask::Settle { target });
            host.request_frame();
        } else {
            self.sheet.set_state_internal(target);
        }
    }
}
