use crate::state::SlideState;

/// Which persisted enum failed to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeKind {
    SlideState,
    SlideEdge,
}

/// A stored integer code that does not name any variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeError {
    pub kind: DecodeKind,
    pub value: i32,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            DecodeKind::SlideState => {
                write!(f, "invalid slide state code {}; expected 1-5", self.value)
            }
            DecodeKind::SlideEdge => {
                write!(f, "invalid slide edge code {}; expected 1-4", self.value)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetError {
    /// Only stable states can be requested.
    IllegalTarget(SlideState),
}

impl std::fmt::Display for SheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetError::IllegalTarget(state) => {
                write!(f, "illegal state request {state:?}; expected Expanded, Collapsed or Hidden")
            }
        }
    }
}

impl std::error::Error for SheetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = DecodeError {
            kind: DecodeKind::SlideState,
            value: 9,
        };
        assert_eq!(err.to_string(), "invalid slide state code 9; expected 1-5");
        assert!(SheetError::IllegalTarget(SlideState::Dragging)
            .to_string()
            .contains("Dragging"));
    }
}
