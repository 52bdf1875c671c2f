use super::SlidingSheetBehavior;
use crate::host::SheetHost;
use crate::state::SlideState;
use slidesheet_foundation::{PointerEvent, PointerEventKind, ViewId};

impl SlidingSheetBehavior {
    /// Offered every pointer event the container sees before its children
    /// do. Returns true to take the rest of the sequence, which then arrives
    /// through [`on_touch_event`](Self::on_touch_event).
    pub fn on_intercept_touch_event<H: SheetHost + ?Sized>(
        &mut self,
        host: &mut H,
        child: ViewId,
        event: &PointerEvent,
    ) -> bool {
        if !host.is_shown(child) {
            self.sheet.session.ignore_events = true;
            return false;
        }

        if event.kind == PointerEventKind::Down {
            self.sheet.reset_session();
        }
        self.sheet.track(event);

        match event.kind {
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let ignored = self.sheet.session.ignore_events;
                self.sheet.end_touch_sequence();
                if ignored {
                    return false;
                }
            }
            PointerEventKind::Down => {
                let (x, y) = (event.x(), event.y());
                let over_scrolling_child = self
                    .sheet
                    .scrolling_child
                    .is_some_and(|scroll| host.is_point_in_child_bounds(scroll, x, y));
                let session = &mut self.sheet.session;
                session.initial_x = x;
                session.initial_y = y;
                if over_scrolling_child {
                    session.active_pointer = Some(event.id);
                    session.touching_scrolling_child = true;
                }
                session.ignore_events =
                    session.active_pointer.is_none() && !host.is_point_in_child_bounds(child, x, y);
            }
            PointerEventKind::Move => {}
        }

        if !self.sheet.session.ignore_events {
            if let Some(helper) = self.drag_helper.as_mut() {
                let intercept = helper.should_intercept_touch_event(event, host, &self.sheet);
                self.dispatch_drag_events(host);
                if intercept {
                    return true;
                }
            }
        }

        // The helper only captures the topmost view under the pointer; a
        // sheet covered by another child still takes drags that start over
        // its content unless that content can scroll the same way.
        let Some(scroll) = self.sheet.scrolling_child else {
            return false;
        };
        event.kind == PointerEventKind::Move
            && !self.sheet.session.ignore_events
            && self.sheet.state != SlideState::Dragging
            && (!self.sheet.can_scroll_in_event_direction(&*host, scroll, event)
                || !host.is_point_in_child_bounds(scroll, event.x(), event.y()))
            && self.sheet.touch_indicates_drag(event)
    }

    /// Handles an event of a sequence this behavior intercepted.
    ///
    /// Returns true when the sequence began in the edge band of a hideable
    /// sheet with edge drags enabled.
    pub fn on_touch_event<H: SheetHost + ?Sized>(
        &mut self,
        host: &mut H,
        child: ViewId,
        event: &PointerEvent,
    ) -> bool {
        if !host.is_shown(child) {
            return false;
        }
        if self.sheet.state == SlideState::Dragging && event.kind == PointerEventKind::Down {
            return true;
        }

        if let Some(helper) = self.drag_helper.as_mut() {
            helper.process_touch_event(event, host, &self.sheet);
            self.dispatch_drag_events(host);
        }

        if event.kind == PointerEventKind::Down {
            self.sheet.reset_session();
        }
        self.sheet.track(event);

        // Capture explicitly in case the helper skipped the sheet because
        // another view sat on top of it.
        if event.kind == PointerEventKind::Move
            && !self.sheet.session.ignore_events
            && self.sheet.touch_indicates_drag(event)
        {
            if let Some(helper) = self.drag_helper.as_mut() {
                helper.capture_child_view(child, Some(event.id));
                self.dispatch_drag_events(host);
            }
        }

        if matches!(event.kind, PointerEventKind::Up | PointerEventKind::Cancel) {
            self.sheet.end_touch_sequence();
        }

        let drag_edge = self.sheet.edge.drag_edge();
        self.sheet.hideable
            && self.sheet.edge_drag_enabled
            && self
                .drag_helper
                .as_ref()
                .is_some_and(|helper| helper.is_edge_touched(drag_edge))
    }
}
