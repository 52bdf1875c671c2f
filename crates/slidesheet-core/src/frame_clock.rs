//! Frame-aligned task queue.
//!
//! Work that has to continue on the next display frame (settle steps, state
//! requests waiting for a layout pass) is posted here as a plain value and
//! handed back by [`FrameQueue::drain`] once the host starts that frame.
//! Tasks posted while a drain is being processed land in the following
//! frame, so a task that keeps re-posting itself never recurses.

use smallvec::SmallVec;
use std::collections::VecDeque;

pub struct FrameQueue<T> {
    tasks: VecDeque<T>,
}

impl<T> Default for FrameQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameQueue<T> {
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Queues `task` for the next frame.
    pub fn post(&mut self, task: T) {
        self.tasks.push_back(task);
    }

    /// Drops every queued task for which `keep` returns false.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.tasks.retain(keep);
    }

    /// Queued tasks, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.tasks.iter()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn has_frame_callbacks(&self) -> bool {
        !self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Takes every task queued before this frame, oldest first.
    pub fn drain(&mut self) -> SmallVec<[T; 4]> {
        self.tasks.drain(..).collect()
    }
}
