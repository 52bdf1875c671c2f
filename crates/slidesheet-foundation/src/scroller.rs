//! Time-based eased motion along one axis.
//!
//! A [`Scroller`] only computes positions; moving anything is left to the
//! caller. Start time is taken from the first frame that queries it, so a
//! settle started from an input event begins at the next drawn frame instead
//! of jumping by however long the event took to reach it.

/// Easing curves for settle motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Quintic ease-out: fast start, long gentle landing.
    QuinticOut,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::LinearEasing => fraction,
            Easing::QuinticOut => {
                let t = fraction - 1.0;
                t * t * t * t * t + 1.0
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scroller {
    easing: Easing,
    start: i32,
    delta: i32,
    current: i32,
    duration_ms: i64,
    start_time_ms: Option<i64>,
    finished: bool,
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new(Easing::QuinticOut)
    }
}

impl Scroller {
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            start: 0,
            delta: 0,
            current: 0,
            duration_ms: 0,
            start_time_ms: None,
            finished: true,
        }
    }

    /// Begins a scroll from `start` by `delta` pixels lasting `duration_ms`.
    pub fn start_scroll(&mut self, start: i32, delta: i32, duration_ms: i64) {
        self.start = start;
        self.delta = delta;
        self.current = start;
        self.duration_ms = duration_ms.max(0);
        self.start_time_ms = None;
        self.finished = false;
    }

    /// Advances to `now_ms`. Returns false once the scroll had already
    /// finished before this call; the call that reaches the end still
    /// returns true so the final position can be applied.
    pub fn compute_scroll_offset(&mut self, now_ms: i64) -> bool {
        if self.finished {
            return false;
        }

        let start_time = *self.start_time_ms.get_or_insert(now_ms);
        let elapsed = now_ms - start_time;
        if elapsed < self.duration_ms {
            let fraction = elapsed as f32 / self.duration_ms as f32;
            let eased = self.easing.transform(fraction);
            self.current = self.start + (eased * self.delta as f32).round() as i32;
        } else {
            self.current = self.final_position();
            self.finished = true;
        }
        true
    }

    /// Jumps to the end of the scroll.
    pub fn abort_animation(&mut self) {
        self.current = self.final_position();
        self.finished = true;
    }

    pub fn current_position(&self) -> i32 {
        self.current
    }

    pub fn final_position(&self) -> i32 {
        self.start + self.delta
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quintic_out_hits_both_ends_and_front_loads_motion() {
        assert_eq!(Easing::QuinticOut.transform(0.0), 0.0);
        assert_eq!(Easing::QuinticOut.transform(1.0), 1.0);
        assert!(Easing::QuinticOut.transform(0.5) > 0.9);
        assert_eq!(Easing::LinearEasing.transform(1.5), 1.0);
    }

    #[test]
    fn first_frame_fixes_the_start_time() {
        let mut scroller = Scroller::new(Easing::LinearEasing);
        scroller.start_scroll(100, 200, 100);

        assert!(scroller.compute_scroll_offset(1_000));
        assert_eq!(scroller.current_position(), 100);

        assert!(scroller.compute_scroll_offset(1_050));
        assert_eq!(scroller.current_position(), 200);
    }

    #[test]
    fn reaching_the_end_reports_once_more_then_stops() {
        let mut scroller = Scroller::new(Easing::QuinticOut);
        scroller.start_scroll(0, -300, 64);

        assert!(scroller.compute_scroll_offset(0));
        assert!(scroller.compute_scroll_offset(64));
        assert_eq!(scroller.current_position(), -300);
        assert!(scroller.is_finished());
        assert!(!scroller.compute_scroll_offset(80));
    }

    #[test]
    fn abort_jumps_to_final_position() {
        let mut scroller = Scroller::default();
        scroller.start_scroll(10, 40, 500);
        scroller.abort_animation();
        assert_eq!(scroller.current_position(), 50);
        assert!(!scroller.compute_scroll_offset(10));
    }
}
