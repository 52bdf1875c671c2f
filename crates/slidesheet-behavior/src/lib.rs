//! A sliding sheet for a layout container.
//!
//! [`SlidingSheetBehavior`] makes one child of a container behave as a sheet
//! anchored to any of the container's four edges. It can be dragged, flung
//! and driven by a nested-scrolling descendant, and rests Expanded,
//! Collapsed or Hidden. The container is reached through [`SheetHost`]; all
//! motion is reported to an optional [`SheetCallback`].

mod behavior;
mod callback;
mod config;
mod edge;
mod error;
mod geometry;
mod host;
mod saved_state;
mod state;

pub use behavior::{ScrollAxes, SlidingSheetBehavior};
pub use callback::SheetCallback;
pub use config::{PeekSize, SheetConfig};
pub use edge::SlideEdge;
pub use error::{DecodeError, DecodeKind, SheetError};
pub use geometry::{auto_peek_size, SheetGeometry};
pub use host::SheetHost;
pub use saved_state::SavedState;
pub use state::SlideState;

pub mod prelude {
    pub use crate::behavior::{ScrollAxes, SlidingSheetBehavior};
    pub use crate::callback::SheetCallback;
    pub use crate::config::{PeekSize, SheetConfig};
    pub use crate::edge::SlideEdge;
    pub use crate::host::SheetHost;
    pub use crate::state::SlideState;
    pub use slidesheet_foundation::{PointerEvent, ViewId};
}
