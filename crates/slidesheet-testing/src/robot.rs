//! Robot-style driver for a sheet living in a [`FakeHost`].
//!
//! The robot routes pointer events the way a container does: every event is
//! offered to [`SlidingSheetBehavior::on_intercept_touch_event`] until the
//! behavior takes the sequence, after which the rest of it goes to
//! [`SlidingSheetBehavior::on_touch_event`]. Time only moves when the robot
//! moves it.
//!
//! # Example
//!
//! ```
//! use slidesheet::{SheetConfig, SlideEdge, SlideState};
//! use slidesheet_core::IntRect;
//! use slidesheet_foundation::ViewKind;
//! use slidesheet_testing::{FakeHost, SheetRobot};
//!
//! let mut host = FakeHost::new(400, 1000);
//! let sheet = host.add_view(None, IntRect::new(0, 0, 400, 1000), ViewKind::Group);
//! let mut robot = SheetRobot::new(host, sheet, SheetConfig::new(SlideEdge::Bottom).with_peek_size(200));
//!
//! robot.fling((200.0, 900.0), (200.0, 600.0));
//! robot.wait_for_idle();
//! assert_eq!(robot.state(), SlideState::Expanded);
//! ```

use crate::fake_host::FakeHost;
use crate::recording::RecordingCallback;
use slidesheet::{SheetConfig, SlideState, SlidingSheetBehavior};
use slidesheet_foundation::{DragHost, PointerEvent, PointerEventKind, ViewId};

/// Frame interval used while pumping frames.
pub const FRAME_INTERVAL_MS: i64 = 16;

/// Upper bound on frames pumped by [`SheetRobot::wait_for_idle`].
const MAX_IDLE_FRAMES: usize = 1_000;

/// Pause before a slow release; long enough for the trackers to treat the
/// pointer as stopped.
const HOLD_MS: i64 = 60;

pub struct SheetRobot {
    host: FakeHost,
    behavior: SlidingSheetBehavior,
    sheet: ViewId,
    callback: RecordingCallback,
    uptime_ms: i64,
    pointer: (f32, f32),
    intercepted: bool,
    /// Return value of the last event the behavior handled.
    last_handled: bool,
}

impl SheetRobot {
    /// Attaches a behavior built from `config` to `sheet` and runs the first
    /// layout pass.
    pub fn new(host: FakeHost, sheet: ViewId, config: SheetConfig) -> Self {
        Self::with_behavior(host, sheet, SlidingSheetBehavior::new(config))
    }

    pub fn with_behavior(host: FakeHost, sheet: ViewId, mut behavior: SlidingSheetBehavior) -> Self {
        let callback = RecordingCallback::new();
        behavior.set_callback(callback.clone());
        let mut robot = Self {
            host,
            behavior,
            sheet,
            callback,
            uptime_ms: 0,
            pointer: (0.0, 0.0),
            intercepted: false,
            last_handled: false,
        };
        robot.layout();
        robot
    }

    pub fn host(&self) -> &FakeHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut FakeHost {
        &mut self.host
    }

    pub fn behavior(&self) -> &SlidingSheetBehavior {
        &self.behavior
    }

    pub fn behavior_mut(&mut self) -> &mut SlidingSheetBehavior {
        &mut self.behavior
    }

    /// Both halves at once, for driving entry points the robot does not
    /// wrap, such as nested scrolling.
    pub fn parts_mut(&mut self) -> (&mut FakeHost, &mut SlidingSheetBehavior) {
        (&mut self.host, &mut self.behavior)
    }

    pub fn sheet(&self) -> ViewId {
        self.sheet
    }

    pub fn callback(&self) -> &RecordingCallback {
        &self.callback
    }

    pub fn state(&self) -> SlideState {
        self.behavior.state()
    }

    /// Leading coordinate of the sheet along its slide axis.
    pub fn position(&self) -> i32 {
        let orientation = self.behavior.slide_edge().orientation();
        self.host.position(self.sheet, orientation).unwrap_or_default()
    }

    pub fn uptime_ms(&self) -> i64 {
        self.uptime_ms
    }

    /// Whether the behavior has taken the current pointer sequence.
    pub fn is_intercepted(&self) -> bool {
        self.intercepted
    }

    /// What the behavior returned for the last event it handled directly.
    pub fn last_handled(&self) -> bool {
        self.last_handled
    }

    pub fn layout(&mut self) -> bool {
        self.behavior.on_layout_child(&mut self.host, self.sheet)
    }

    pub fn set_state(&mut self, state: SlideState) -> Result<(), slidesheet::SheetError> {
        self.behavior.set_state(&mut self.host, state)
    }

    /// Delivers one event through the intercept-then-handle route.
    ///
    /// A down that no view sits under falls through to the container, which
    /// hands it to the behavior directly; the behavior keeps the sequence if
    /// it reports the down as handled.
    pub fn dispatch(&mut self, event: PointerEvent) {
        if event.kind == PointerEventKind::Down {
            self.intercepted = false;
        }
        if self.intercepted {
            self.last_handled = self.behavior.on_touch_event(&mut self.host, self.sheet, &event);
        } else {
            self.intercepted =
                self.behavior
                    .on_intercept_touch_event(&mut self.host, self.sheet, &event);
            let unclaimed = self.host.top_child_under(event.x(), event.y()).is_none();
            if !self.intercepted && event.kind == PointerEventKind::Down && unclaimed {
                self.last_handled =
                    self.behavior
                        .on_touch_event(&mut self.host, self.sheet, &event);
                self.intercepted = self.last_handled;
            }
        }
        if matches!(event.kind, PointerEventKind::Up | PointerEventKind::Cancel) {
            self.intercepted = false;
        }
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
        self.dispatch(PointerEvent::down(x, y, self.uptime_ms));
    }

    pub fn move_to(&mut self, x: f32, y: f32, elapsed_ms: i64) {
        self.uptime_ms += elapsed_ms;
        self.pointer = (x, y);
        self.dispatch(PointerEvent::moved(x, y, self.uptime_ms));
    }

    pub fn release(&mut self, elapsed_ms: i64) {
        self.uptime_ms += elapsed_ms;
        let (x, y) = self.pointer;
        self.dispatch(PointerEvent::up(x, y, self.uptime_ms));
    }

    pub fn cancel(&mut self) {
        let (x, y) = self.pointer;
        self.dispatch(PointerEvent::cancel(x, y, self.uptime_ms));
    }

    /// Presses at `from`, moves to `to` in `steps` equal moves spaced
    /// `step_ms` apart, and leaves the pointer down. Intermediate points are
    /// rounded to whole pixels.
    pub fn drag_without_release(&mut self, from: (f32, f32), to: (f32, f32), steps: u32, step_ms: i64) {
        let steps = steps.max(1);
        self.press(from.0, from.1);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            let x = (from.0 + (to.0 - from.0) * fraction).round();
            let y = (from.1 + (to.1 - from.1) * fraction).round();
            self.move_to(x, y, step_ms);
        }
    }

    /// A drag that stops before lifting, so it releases with no velocity.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.drag_without_release(from, to, 10, FRAME_INTERVAL_MS);
        self.release(HOLD_MS);
    }

    /// A quick swipe released while still moving.
    pub fn fling(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.drag_without_release(from, to, 5, 8);
        self.release(8);
    }

    /// Runs one display frame if the behavior asked for one.
    pub fn advance_frame(&mut self) -> bool {
        if !self.behavior.has_pending_frame() {
            return false;
        }
        self.uptime_ms += FRAME_INTERVAL_MS;
        let frame_time_nanos = self.uptime_ms as u64 * 1_000_000;
        self.behavior.on_frame(&mut self.host, frame_time_nanos);
        true
    }

    /// Pumps frames until the behavior stops asking for them. Returns the
    /// number of frames run.
    pub fn wait_for_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.advance_frame() {
            frames += 1;
            assert!(
                frames < MAX_IDLE_FRAMES,
                "sheet still requesting frames after {frames} frames"
            );
        }
        frames
    }
}
