use crate::error::{DecodeError, DecodeKind};

/// Logical state of a sliding sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlideState {
    /// Following a pointer or a nested scroll.
    Dragging,
    /// Animating toward a rest position.
    Settling,
    Expanded,
    #[default]
    Collapsed,
    Hidden,
}

impl SlideState {
    /// Dragging and Settling are transient; the rest are rest states.
    pub fn is_moving(self) -> bool {
        matches!(self, SlideState::Dragging | SlideState::Settling)
    }

    /// Stable integer code used when persisting the state.
    pub fn code(self) -> i32 {
        match self {
            SlideState::Dragging => 1,
            SlideState::Settling => 2,
            SlideState::Expanded => 3,
            SlideState::Collapsed => 4,
            SlideState::Hidden => 5,
        }
    }
}

impl TryFrom<i32> for SlideState {
    type Error = DecodeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SlideState::Dragging),
            2 => Ok(SlideState::Settling),
            3 => Ok(SlideState::Expanded),
            4 => Ok(SlideState::Collapsed),
            5 => Ok(SlideState::Hidden),
            _ => Err(DecodeError {
                kind: DecodeKind::SlideState,
                value,
            }),
        }
    }
}
