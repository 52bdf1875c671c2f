use crate::error::{DecodeError, DecodeKind};
use slidesheet_core::Orientation;
use slidesheet_foundation::EdgeFlags;

/// Container edge a sheet is anchored to.
///
/// Top and Left are *reversed*: their expanded rest is at the larger
/// coordinate, so every offset comparison flips for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlideEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl SlideEdge {
    pub fn is_vertical(self) -> bool {
        matches!(self, SlideEdge::Top | SlideEdge::Bottom)
    }

    pub fn is_reversed(self) -> bool {
        matches!(self, SlideEdge::Top | SlideEdge::Left)
    }

    pub fn orientation(self) -> Orientation {
        if self.is_vertical() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// Edge band the drag helper watches for edge drags.
    pub fn drag_edge(self) -> EdgeFlags {
        match self {
            SlideEdge::Left => EdgeFlags::LEFT,
            SlideEdge::Right => EdgeFlags::RIGHT,
            SlideEdge::Top => EdgeFlags::TOP,
            SlideEdge::Bottom => EdgeFlags::BOTTOM,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            SlideEdge::Left => 1,
            SlideEdge::Right => 2,
            SlideEdge::Top => 3,
            SlideEdge::Bottom => 4,
        }
    }
}

impl TryFrom<i32> for SlideEdge {
    type Error = DecodeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SlideEdge::Left),
            2 => Ok(SlideEdge::Right),
            3 => Ok(SlideEdge::Top),
            4 => Ok(SlideEdge::Bottom),
            _ => Err(DecodeError {
                kind: DecodeKind::SlideEdge,
                value,
            }),
        }
    }
}
