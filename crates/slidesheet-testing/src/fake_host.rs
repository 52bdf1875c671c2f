//! An in-memory container that answers every host query the behavior makes.
//!
//! Views keep absolute bounds. Offsetting a view carries its descendants
//! along, and a layout pass puts a view and its descendants back at the
//! bounds they were added with.

use slidesheet::SheetHost;
use slidesheet_core::{IntRect, Orientation};
use slidesheet_foundation::{DragHost, ViewId, ViewKind, ViewTree};
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct FakeView {
    natural: IntRect,
    bounds: IntRect,
    kind: ViewKind,
    children: Vec<ViewId>,
    current_page: Option<ViewId>,
    shown: bool,
    scroll: Option<ScrollExtent>,
}

#[derive(Clone, Copy, Debug)]
struct ScrollExtent {
    orientation: Orientation,
    offset: i32,
    max: i32,
}

pub struct FakeHost {
    container: IntRect,
    views: HashMap<ViewId, FakeView>,
    /// Direct children of the container, bottom-most first.
    top_level: Vec<ViewId>,
    next_id: ViewId,
    layout_requested: bool,
    layout_requests: usize,
    frame_requests: usize,
}

impl FakeHost {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            container: IntRect::from_origin_size(0, 0, width, height),
            views: HashMap::new(),
            top_level: Vec::new(),
            next_id: 1,
            layout_requested: false,
            layout_requests: 0,
            frame_requests: 0,
        }
    }

    /// Adds a view under `parent`, or directly in the container when
    /// `parent` is `None`. Later container children sit on top.
    pub fn add_view(&mut self, parent: Option<ViewId>, bounds: IntRect, kind: ViewKind) -> ViewId {
        let id = self.next_id;
        self.next_id += 1;
        self.views.insert(
            id,
            FakeView {
                natural: bounds,
                bounds,
                kind,
                children: Vec::new(),
                current_page: None,
                shown: true,
                scroll: None,
            },
        );
        match parent.and_then(|parent| self.views.get_mut(&parent)) {
            Some(parent) => parent.children.push(id),
            None => self.top_level.push(id),
        }
        id
    }

    /// Gives `view` scrollable content `max` pixels longer than itself.
    pub fn set_scroll_range(&mut self, view: ViewId, orientation: Orientation, max: i32) {
        if let Some(entry) = self.views.get_mut(&view) {
            entry.scroll = Some(ScrollExtent {
                orientation,
                offset: 0,
                max: max.max(0),
            });
        }
    }

    pub fn set_scroll_offset(&mut self, view: ViewId, offset: i32) {
        if let Some(extent) = self.views.get_mut(&view).and_then(|entry| entry.scroll.as_mut()) {
            extent.offset = offset.clamp(0, extent.max);
        }
    }

    pub fn scroll_offset(&self, view: ViewId) -> i32 {
        self.views
            .get(&view)
            .and_then(|entry| entry.scroll)
            .map_or(0, |extent| extent.offset)
    }

    pub fn set_shown(&mut self, view: ViewId, shown: bool) {
        if let Some(entry) = self.views.get_mut(&view) {
            entry.shown = shown;
        }
    }

    pub fn set_current_page(&mut self, pager: ViewId, page: Option<ViewId>) {
        if let Some(entry) = self.views.get_mut(&pager) {
            entry.current_page = page;
        }
    }

    /// Marks the next layout pass as pending, as a host would after a
    /// content change.
    pub fn invalidate_layout(&mut self) {
        self.layout_requested = true;
    }

    pub fn layout_requests(&self) -> usize {
        self.layout_requests
    }

    pub fn frame_requests(&self) -> usize {
        self.frame_requests
    }

    /// Leading coordinate of `view` along `orientation`.
    pub fn position(&self, view: ViewId, orientation: Orientation) -> Option<i32> {
        self.bounds(view).map(|bounds| bounds.start(orientation))
    }

    fn for_subtree(&mut self, view: ViewId, mut apply: impl FnMut(&mut FakeView)) {
        let mut pending = vec![view];
        while let Some(id) = pending.pop() {
            if let Some(entry) = self.views.get_mut(&id) {
                apply(entry);
                pending.extend(entry.children.iter().copied());
            }
        }
    }
}

impl ViewTree for FakeHost {
    fn kind(&self, view: ViewId) -> ViewKind {
        self.views.get(&view).map_or(ViewKind::Leaf, |entry| entry.kind)
    }

    fn child_count(&self, view: ViewId) -> usize {
        self.views.get(&view).map_or(0, |entry| entry.children.len())
    }

    fn child_at(&self, view: ViewId, index: usize) -> Option<ViewId> {
        self.views
            .get(&view)
            .and_then(|entry| entry.children.get(index).copied())
    }

    fn current_page(&self, pager: ViewId) -> Option<ViewId> {
        self.views.get(&pager).and_then(|entry| entry.current_page)
    }

    fn bounds(&self, view: ViewId) -> Option<IntRect> {
        self.views.get(&view).map(|entry| entry.bounds)
    }

    fn is_shown(&self, view: ViewId) -> bool {
        self.views.get(&view).is_some_and(|entry| entry.shown)
    }

    fn can_scroll(&self, view: ViewId, orientation: Orientation, direction: i32) -> bool {
        let Some(extent) = self.views.get(&view).and_then(|entry| entry.scroll) else {
            return false;
        };
        if extent.orientation != orientation {
            return false;
        }
        if direction < 0 {
            extent.offset > 0
        } else {
            extent.offset < extent.max
        }
    }
}

impl DragHost for FakeHost {
    fn container_bounds(&self) -> IntRect {
        self.container
    }

    fn top_child_under(&self, x: i32, y: i32) -> Option<ViewId> {
        self.top_level.iter().rev().copied().find(|&id| {
            self.views
                .get(&id)
                .is_some_and(|entry| entry.shown && entry.bounds.contains(x, y))
        })
    }

    fn offset_view(&mut self, view: ViewId, orientation: Orientation, delta: i32) {
        self.for_subtree(view, |entry| {
            entry.bounds = entry.bounds.offset_along(orientation, delta);
        });
    }
}

impl SheetHost for FakeHost {
    fn layout_child(&mut self, child: ViewId) {
        self.for_subtree(child, |entry| entry.bounds = entry.natural);
        self.layout_requested = false;
    }

    fn is_layout_requested(&self) -> bool {
        self.layout_requested
    }

    fn request_layout(&mut self, _child: ViewId) {
        self.layout_requested = true;
        self.layout_requests += 1;
    }

    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_carries_descendants() {
        let mut host = FakeHost::new(400, 800);
        let sheet = host.add_view(None, IntRect::new(0, 0, 400, 800), ViewKind::Group);
        let list = host.add_view(Some(sheet), IntRect::new(0, 100, 400, 800), ViewKind::NestedScrolling);

        host.offset_view(sheet, Orientation::Vertical, 300);
        assert_eq!(host.position(sheet, Orientation::Vertical), Some(300));
        assert_eq!(host.position(list, Orientation::Vertical), Some(400));

        host.layout_child(sheet);
        assert_eq!(host.position(list, Orientation::Vertical), Some(100));
    }

    #[test]
    fn topmost_shown_child_wins_hit_tests() {
        let mut host = FakeHost::new(400, 800);
        let below = host.add_view(None, IntRect::new(0, 0, 400, 800), ViewKind::Leaf);
        let above = host.add_view(None, IntRect::new(0, 400, 400, 800), ViewKind::Leaf);

        assert_eq!(host.top_child_under(10, 500), Some(above));
        assert_eq!(host.top_child_under(10, 100), Some(below));
        host.set_shown(above, false);
        assert_eq!(host.top_child_under(10, 500), Some(below));
    }

    #[test]
    fn scroll_range_answers_both_directions() {
        let mut host = FakeHost::new(400, 800);
        let list = host.add_view(None, IntRect::new(0, 0, 400, 800), ViewKind::NestedScrolling);
        host.set_scroll_range(list, Orientation::Vertical, 1000);

        assert!(!host.can_scroll(list, Orientation::Vertical, -1));
        assert!(host.can_scroll(list, Orientation::Vertical, 1));
        host.set_scroll_offset(list, 1000);
        assert!(host.can_scroll(list, Orientation::Vertical, -1));
        assert!(!host.can_scroll(list, Orientation::Vertical, 1));
        assert!(!host.can_scroll(list, Orientation::Horizontal, -1));
    }
}
