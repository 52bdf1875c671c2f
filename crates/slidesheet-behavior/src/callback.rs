use crate::state::SlideState;
use slidesheet_foundation::ViewId;

/// Observer for sheet motion. Both methods default to doing nothing.
pub trait SheetCallback {
    /// Fired once per committed state change.
    fn on_state_changed(&mut self, _sheet: ViewId, _state: SlideState) {}

    /// Fired whenever the sheet moves. `offset` is 1 at Expanded, 0 at
    /// Collapsed and -1 at Hidden.
    fn on_slide(&mut self, _sheet: ViewId, _offset: f32) {}
}

impl<F> SheetCallback for F
where
    F: FnMut(ViewId, SlideState),
{
    fn on_state_changed(&mut self, sheet: ViewId, state: SlideState) {
        self(sheet, state)
    }
}
