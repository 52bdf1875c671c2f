//! Testing utilities for slidesheet: a fake host container, a recording
//! callback and a robot that drives gestures and frames.

pub mod fake_host;
pub mod recording;
pub mod robot;

pub use fake_host::FakeHost;
pub use recording::{RecordingCallback, SheetEvent};
pub use robot::{SheetRobot, FRAME_INTERVAL_MS};

pub mod prelude {
    pub use crate::fake_host::FakeHost;
    pub use crate::recording::{RecordingCallback, SheetEvent};
    pub use crate::robot::*;
}
