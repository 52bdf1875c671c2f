//! Cooperation with a nested-scrolling descendant.
//!
//! Scroll deltas use the scroller's convention: a positive delta moves the
//! content toward its end, which is the opposite sign of the pointer
//! travel that caused it. The sheet moves by `-delta` when it consumes one.

use super::SlidingSheetBehavior;
use crate::host::SheetHost;
use crate::state::SlideState;
use slidesheet_core::Orientation;
use slidesheet_foundation::ViewId;

/// Axes a nested scroll may travel along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScrollAxes(u8);

impl ScrollAxes {
    pub const NONE: Self = Self(0);
    pub const HORIZONTAL: Self = Self(1 << 0);
    pub const VERTICAL: Self = Self(1 << 1);
    pub const BOTH: Self = Self(0b11);

    pub fn along(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Self::HORIZONTAL,
            Orientation::Vertical => Self::VERTICAL,
        }
    }

    pub fn contains(self, orientation: Orientation) -> bool {
        let axis = Self::along(orientation);
        self.0 & axis.0 == axis.0
    }
}

impl SlidingSheetBehavior {
    /// A descendant is about to scroll. Returns whether the sheet wants to
    /// take part, which it does only for scrolls along its slide axis.
    pub fn on_start_nested_scroll(&mut self, axes: ScrollAxes) -> bool {
        self.sheet.session.last_nested_scroll_delta = 0;
        self.sheet.session.nested_scrolled = false;
        axes.contains(self.sheet.orientation())
    }

    /// Lets the sheet move before `target` scrolls by `(dx, dy)`. Returns
    /// the part of the delta the sheet consumed as `(x, y)`.
    ///
    /// Moving toward Expanded always goes to the sheet first and stops at
    /// the expanded rest. Moving away from Expanded waits until the content
    /// cannot scroll back any further, then stops at the collapsed rest, or
    /// at the hidden rest for hideable sheets.
    pub fn on_nested_pre_scroll<H: SheetHost + ?Sized>(
        &mut self,
        host: &mut H,
        child: ViewId,
        target: ViewId,
        dx: i32,
        dy: i32,
    ) -> (i32, i32) {
        if self.sheet.scrolling_child != Some(target) {
            return (0, 0);
        }
        let orientation = self.sheet.orientation();
        let delta = match orientation {
            Orientation::Vertical => dy,
            Orientation::Horizontal => dx,
        };
        self.ensure_geometry(host, child);
        let Some(current) = self.sheet.position_of(&*host, child) else {
            return (0, 0);
        };

        let geometry = self.sheet.geometry;
        let reversed = self.sheet.edge.is_reversed();
        let proposed = current - delta;
        // Orders positions so that "beyond" means further from Expanded.
        let beyond = |a: i32, b: i32| if reversed { a < b } else { a > b };

        let toward_expanded = if reversed { delta < 0 } else { delta > 0 };
        let content_at_start = || {
            let direction = if reversed { 1 } else { -1 };
            !host.can_scroll(target, orientation, direction)
        };

        let (consumed, state) = if delta == 0 {
            (0, None)
        } else if toward_expanded {
            let expanded = geometry.expanded_position();
            if beyond(proposed, expanded) {
                (delta, Some(SlideState::Dragging))
            } else {
                (current - expanded, Some(SlideState::Expanded))
            }
        } else if content_at_start() {
            let collapsed = geometry.collapsed_position();
            let hidden = geometry.hidden_position();
            if !beyond(proposed, collapsed) && proposed != collapsed {
                (delta, Some(SlideState::Dragging))
            } else if !self.sheet.hideable {
                (current - collapsed, Some(SlideState::Collapsed))
            } else if beyond(proposed, hidden) {
                (current - hidden, Some(SlideState::Dragging))
            } else {
                (delta, Some(SlideState::Dragging))
            }
        } else {
            (0, None)
        };

        if consumed != 0 {
            self.cancel_settle();
            host.offset_view(child, orientation, -consumed);
            self.sheet.dispatch_on_slide(current - consumed);
        }
        if let Some(state) = state {
            self.sheet.set_state_internal(state);
        }
        self.sheet.session.last_nested_scroll_delta = delta;
        self.sheet.session.nested_scrolled = true;

        match orientation {
            Orientation::Vertical => (0, consumed),
            Orientation::Horizontal => (consumed, 0),
        }
    }

    /// The nested scroll on `target` ended. Settles a sheet left between
    /// rests in the direction the scroll was last heading.
    pub fn on_stop_nested_scroll<H: SheetHost + ?Sized>(
        &mut self,
        host: &mut H,
        child: ViewId,
        target: ViewId,
    ) {
        self.ensure_geometry(host, child);
        let Some(position) = self.sheet.position_of(&*host, child) else {
            return;
        };
        if position == self.sheet.geometry.expanded_position() {
            self.sheet.set_state_internal(SlideState::Expanded);
            return;
        }
        if !self.sheet.session.nested_scrolled || self.sheet.scrolling_child != Some(target) {
            return;
        }

        let velocity = -self.sheet.session.last_nested_scroll_delta.signum() as f32;
        let target_state = self.sheet.select_target(position, velocity, velocity);
        self.start_settling_animation(host, child, target_state);
        self.sheet.session.nested_scrolled = false;
    }

    /// Whether the sheet swallows a fling of `target`. Flings pass through to
    /// the content only once the sheet is Expanded.
    pub fn on_nested_pre_fling(&mut self, target: ViewId, _velocity_x: f32, _velocity_y: f32) -> bool {
        self.sheet.scrolling_child == Some(target) && self.sheet.state != SlideState::Expanded
    }

    /// Applies a peek change made while no sheet view was attached.
    fn ensure_geometry<H: SheetHost + ?Sized>(&mut self, host: &H, child: ViewId) {
        if !self.sheet.needs_offset_update {
            return;
        }
        if let Some(bounds) = host.bounds(child) {
            let orientation = self.sheet.orientation();
            let parent_size = host.container_bounds().extent(orientation);
            self.sheet.update_geometry(parent_size, bounds.extent(orientation));
        }
    }
}
