//! Gesture foundation for slidesheet: pointer input, velocity tracking, and
//! the drag helper that captures and settles a child along one axis.

pub mod drag_helper;
pub mod gesture_constants;
pub mod input;
pub mod scroller;
pub mod velocity_tracker;
pub mod view_tree;

pub use drag_helper::{DragEvent, DragHelper, DragHost, DragPolicy, DragState, EdgeFlags};
pub use gesture_constants::ViewConfiguration;
pub use input::{PointerEvent, PointerEventKind, PointerId};
pub use scroller::{Easing, Scroller};
pub use velocity_tracker::VelocityTracker1D;
pub use view_tree::{find_scrolling_child, ViewId, ViewKind, ViewTree};

pub mod prelude {
    pub use crate::drag_helper::{DragEvent, DragHelper, DragHost, DragPolicy, DragState, EdgeFlags};
    pub use crate::gesture_constants::*;
    pub use crate::input::*;
    pub use crate::scroller::*;
    pub use crate::velocity_tracker::*;
    pub use crate::view_tree::*;
}
