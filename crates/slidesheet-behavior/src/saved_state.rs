use crate::error::DecodeError;
use crate::state::SlideState;

/// Sheet state persisted next to whatever the host saves for itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedState<S> {
    pub host_state: S,
    pub state: SlideState,
}

impl<S> SavedState<S> {
    pub fn new(host_state: S, state: SlideState) -> Self {
        Self { host_state, state }
    }

    /// Rebuilds a saved state from its persisted integer code.
    pub fn from_code(host_state: S, code: i32) -> Result<Self, DecodeError> {
        Ok(Self {
            host_state,
            state: SlideState::try_from(code)?,
        })
    }

    pub fn code(&self) -> i32 {
        self.state.code()
    }

    /// State a restored sheet starts in. A sheet is never restored
    /// mid-gesture, so moving states come back as Collapsed.
    pub fn restored_state(&self) -> SlideState {
        if self.state.is_moving() {
            SlideState::Collapsed
        } else {
            self.state
        }
    }
}
