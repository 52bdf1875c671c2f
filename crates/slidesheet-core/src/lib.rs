//! Frame scheduling, geometry and unit primitives for slidesheet
//!
//! Everything in here is host-agnostic plain data. The behavior crates build
//! on these types so that a container integration only has to translate its
//! own event loop and view coordinates into them.

mod frame_clock;
mod geometry;
mod unit;

pub use frame_clock::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::frame_clock::FrameQueue;
    pub use crate::geometry::{IntRect, Orientation, Point};
    pub use crate::unit::Dp;
}
