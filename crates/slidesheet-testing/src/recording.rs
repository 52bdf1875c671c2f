//! Callback that records what the behavior reported.

use slidesheet::{SheetCallback, SlideState};
use slidesheet_foundation::ViewId;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SheetEvent {
    StateChanged(SlideState),
    Slide(f32),
}

/// Shares its log between the copy handed to the behavior and the copy the
/// test keeps.
#[derive(Clone, Default)]
pub struct RecordingCallback {
    events: Rc<RefCell<Vec<SheetEvent>>>,
}

impl RecordingCallback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SheetEvent> {
        self.events.borrow().clone()
    }

    pub fn states(&self) -> Vec<SlideState> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SheetEvent::StateChanged(state) => Some(*state),
                SheetEvent::Slide(_) => None,
            })
            .collect()
    }

    pub fn slide_offsets(&self) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SheetEvent::Slide(offset) => Some(*offset),
                SheetEvent::StateChanged(_) => None,
            })
            .collect()
    }

    pub fn last_state(&self) -> Option<SlideState> {
        self.states().last().copied()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl SheetCallback for RecordingCallback {
    fn on_state_changed(&mut self, _sheet: ViewId, state: SlideState) {
        self.events.borrow_mut().push(SheetEvent::StateChanged(state));
    }

    fn on_slide(&mut self, _sheet: ViewId, offset: f32) {
        self.events.borrow_mut().push(SheetEvent::Slide(offset));
    }
}
