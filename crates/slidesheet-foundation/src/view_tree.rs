//! Read-only view hierarchy queries a host container must answer.

use slidesheet_core::{IntRect, Orientation};
use smallvec::SmallVec;

pub type ViewId = u64;

/// How a view participates in the scrolling-descendant search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// No children worth searching.
    Leaf,
    /// Children are searched in order.
    Group,
    /// Scrolls its own content and reports nested scrolls to its ancestors.
    NestedScrolling,
    /// Paged container; only the page currently shown is searched.
    Pager,
}

pub trait ViewTree {
    fn kind(&self, view: ViewId) -> ViewKind;

    fn child_count(&self, view: ViewId) -> usize;

    fn child_at(&self, view: ViewId, index: usize) -> Option<ViewId>;

    /// Page currently shown by a [`ViewKind::Pager`].
    fn current_page(&self, pager: ViewId) -> Option<ViewId>;

    /// Bounds of `view` in the coordinate space of the sheet's container.
    fn bounds(&self, view: ViewId) -> Option<IntRect>;

    /// Whether `view` and all of its ancestors are visible.
    fn is_shown(&self, view: ViewId) -> bool;

    /// Whether `view` can scroll its content along `orientation`. A negative
    /// `direction` asks about scrolling toward the start (up or left).
    fn can_scroll(&self, view: ViewId, orientation: Orientation, direction: i32) -> bool;

    fn is_point_in_child_bounds(&self, view: ViewId, x: i32, y: i32) -> bool {
        self.bounds(view).is_some_and(|bounds| bounds.contains(x, y))
    }
}

/// Depth-first search for the first nested-scrolling view at or below `root`.
pub fn find_scrolling_child<T: ViewTree + ?Sized>(tree: &T, root: ViewId) -> Option<ViewId> {
    let mut stack: SmallVec<[ViewId; 16]> = SmallVec::new();
    stack.push(root);

    while let Some(view) = stack.pop() {
        match tree.kind(view) {
            ViewKind::NestedScrolling => return Some(view),
            ViewKind::Pager => {
                if let Some(page) = tree.current_page(view) {
                    stack.push(page);
                }
            }
            ViewKind::Group => {
                // Reversed so the first child is visited first.
                for index in (0..tree.child_count(view)).rev() {
                    if let Some(child) = tree.child_at(view, index) {
                        stack.push(child);
                    }
                }
            }
            ViewKind::Leaf => {}
        }
    }

    None
}
