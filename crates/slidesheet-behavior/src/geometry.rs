//! One-dimensional geometry of a sheet along its slide axis.
//!
//! Positions are the sheet's leading coordinate (`top` or `left`) in the
//! container. For Bottom/Right sheets the expanded rest is the smallest
//! position; Top/Left sheets are mirrored and expand toward 0.

use crate::edge::SlideEdge;
use crate::state::SlideState;

/// Share of the peek distance a release must project past to hide.
const HIDE_THRESHOLD: f32 = 0.5;

/// Seconds of release velocity projected onto the position when deciding
/// whether to hide.
const HIDE_FRICTION: f32 = 0.1;

/// Peek picked for [`PeekSize::Auto`](crate::PeekSize::Auto) before the
/// minimum floor: 7/16 of the container, never more than the sheet itself.
pub fn auto_peek_size(parent_size: i32, child_size: i32) -> i32 {
    let peek = parent_size - parent_size * 9 / 16;
    peek.min(child_size)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SheetGeometry {
    pub edge: SlideEdge,
    pub parent_size: i32,
    pub child_size: i32,
    pub peek_size: i32,
    pub min_offset: i32,
    pub max_offset: i32,
}

impl SheetGeometry {
    pub fn new(edge: SlideEdge, parent_size: i32, child_size: i32, peek_size: i32) -> Self {
        let peek_size = peek_size.max(0);
        let (min_offset, max_offset) = if edge.is_reversed() {
            ((peek_size - child_size).min(0), 0)
        } else {
            let min_offset = (parent_size - child_size).max(0);
            (min_offset, (parent_size - peek_size).max(min_offset))
        };
        Self {
            edge,
            parent_size,
            child_size,
            peek_size,
            min_offset,
            max_offset,
        }
    }

    pub fn expanded_position(&self) -> i32 {
        if self.edge.is_reversed() {
            self.max_offset
        } else {
            self.min_offset
        }
    }

    pub fn collapsed_position(&self) -> i32 {
        if self.edge.is_reversed() {
            self.min_offset
        } else {
            self.max_offset
        }
    }

    pub fn hidden_position(&self) -> i32 {
        if self.edge.is_reversed() {
            -self.child_size
        } else {
            self.parent_size
        }
    }

    /// Rest position of a stable state; moving states have none.
    pub fn rest_position(&self, state: SlideState) -> Option<i32> {
        match state {
            SlideState::Expanded => Some(self.expanded_position()),
            SlideState::Collapsed => Some(self.collapsed_position()),
            SlideState::Hidden => Some(self.hidden_position()),
            SlideState::Dragging | SlideState::Settling => None,
        }
    }

    /// Normalized progress reported to observers: 1 at Expanded, 0 at
    /// Collapsed, -1 at Hidden. Positions outside both spans report 0.
    pub fn slide_offset(&self, position: i32) -> f32 {
        let hidden = self.hidden_position();
        let collapsed = self.collapsed_position();
        let expanded = self.expanded_position();

        let (toward_hidden, toward_expanded) = if self.edge.is_reversed() {
            (
                position >= hidden && position < collapsed,
                position > collapsed && position <= expanded,
            )
        } else {
            (
                position > collapsed && position <= hidden,
                position >= expanded && position < collapsed,
            )
        };

        if toward_hidden {
            let distance = (hidden - collapsed).abs() as f32;
            -((position - collapsed).abs() as f32 / distance)
        } else if toward_expanded {
            let distance = (collapsed - expanded).abs() as f32;
            1.0 - (position - expanded).abs() as f32 / distance
        } else {
            0.0
        }
    }

    /// Bounds a drag may move the sheet within. Hideable sheets may be
    /// dragged all the way to their hidden position.
    pub fn clamp_drag_position(&self, position: i32, hideable: bool) -> i32 {
        let (low, high) = if self.edge.is_reversed() {
            let low = if hideable {
                -self.child_size
            } else {
                self.min_offset
            };
            (low, self.max_offset)
        } else {
            let high = if hideable {
                self.parent_size
            } else {
                self.max_offset
            };
            (self.min_offset, high)
        };
        position.clamp(low.min(high), high)
    }

    pub fn drag_range(&self, hideable: bool) -> i32 {
        if hideable {
            self.parent_size - self.min_offset
        } else {
            self.max_offset - self.min_offset
        }
    }

    /// Whether `position` lies on the expanded side of the midpoint between
    /// the expanded and collapsed rests.
    pub fn is_closer_to_expanded(&self, position: i32) -> bool {
        let expanded = self.expanded_position();
        let midpoint = expanded + (self.collapsed_position() - expanded) / 2;
        if self.edge.is_reversed() {
            position > midpoint
        } else {
            position < midpoint
        }
    }

    /// Whether velocity (px/sec along the slide axis) carries the sheet
    /// toward its expanded rest.
    pub fn is_toward_expanded(&self, velocity: f32) -> bool {
        if self.edge.is_reversed() {
            velocity > 0.0
        } else {
            velocity < 0.0
        }
    }

    /// Decides whether a sheet released at `position` with `velocity` should
    /// hide instead of settling at a visible rest.
    pub fn should_hide(
        &self,
        position: i32,
        velocity: f32,
        hideable: bool,
        skip_collapsed: bool,
    ) -> bool {
        if !hideable {
            return false;
        }
        if self.is_toward_expanded(velocity)
            || (velocity == 0.0 && self.is_closer_to_expanded(position))
        {
            return false;
        }
        if skip_collapsed {
            return true;
        }
        if self.peek_size <= 0 {
            // Collapsed already sits at the hidden rest.
            return true;
        }

        let peek = self.peek_size as f32;
        if self.edge.is_reversed() {
            let end = position + self.child_size;
            if end > self.peek_size {
                return false;
            }
            let projected_end = end as f32 + velocity * HIDE_FRICTION;
            projected_end / peek < HIDE_THRESHOLD
        } else {
            if position < self.max_offset {
                return false;
            }
            let projected = position as f32 + velocity * HIDE_FRICTION;
            (projected - self.max_offset as f32).abs() / peek > HIDE_THRESHOLD
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDGES: [SlideEdge; 4] = [
        SlideEdge::Left,
        SlideEdge::Right,
        SlideEdge::Top,
        SlideEdge::Bottom,
    ];

    #[test]
    fn bottom_sheet_rest_positions() {
        let geometry = SheetGeometry::new(SlideEdge::Bottom, 1000, 1000, 200);
        assert_eq!(geometry.collapsed_position(), 800);
        assert_eq!(geometry.expanded_position(), 0);
        assert_eq!(geometry.hidden_position(), 1000);
        assert_eq!(geometry.rest_position(SlideState::Settling), None);
    }

    #[test]
    fn top_sheet_rest_positions_are_mirrored() {
        let geometry = SheetGeometry::new(SlideEdge::Top, 1000, 1000, 200);
        assert_eq!((geometry.min_offset, geometry.max_offset), (-800, 0));
        assert_eq!(geometry.expanded_position(), 0);
        assert_eq!(geometry.collapsed_position(), -800);
        assert_eq!(geometry.hidden_position(), -1000);
    }

    #[test]
    fn short_sheet_expands_to_its_own_extent() {
        let geometry = SheetGeometry::new(SlideEdge::Right, 600, 250, 100);
        assert_eq!(geometry.expanded_position(), 350);
        assert_eq!(geometry.collapsed_position(), 500);
        assert_eq!(geometry.hidden_position(), 600);
    }

    #[test]
    fn min_offset_never_exceeds_max_offset() {
        for edge in EDGES {
            for (parent, child, peek) in [
                (1000, 1000, 200),
                (1000, 300, 900),
                (400, 1200, 0),
                (0, 0, 0),
                (500, 100, 100),
                (800, 200, 5000),
            ] {
                let geometry = SheetGeometry::new(edge, parent, child, peek);
                assert!(
                    geometry.min_offset <= geometry.max_offset,
                    "{edge:?} {parent}/{child}/{peek}: {geometry:?}"
                );
            }
        }
    }

    #[test]
    fn auto_peek_is_seven_sixteenths_capped_by_the_child() {
        assert_eq!(auto_peek_size(900, 1000), 394);
        assert_eq!(auto_peek_size(900, 300), 300);
        assert_eq!(auto_peek_size(0, 300), 0);
    }

    #[test]
    fn slide_offset_spans_minus_one_to_one() {
        for edge in EDGES {
            let geometry = SheetGeometry::new(edge, 1000, 1000, 200);
            assert_eq!(geometry.slide_offset(geometry.expanded_position()), 1.0);
            assert_eq!(geometry.slide_offset(geometry.collapsed_position()), 0.0);
            assert_eq!(geometry.slide_offset(geometry.hidden_position()), -1.0);
        }
    }

    #[test]
    fn slide_offset_is_monotonic_between_rests() {
        for edge in EDGES {
            let geometry = SheetGeometry::new(edge, 1000, 1000, 200);
            let step = if edge.is_reversed() { 1 } else { -1 };

            let mut last = geometry.slide_offset(geometry.collapsed_position());
            let mut position = geometry.collapsed_position();
            while position != geometry.expanded_position() {
                position += step;
                let offset = geometry.slide_offset(position);
                assert!(offset > last, "{edge:?} at {position}");
                assert!((0.0..=1.0).contains(&offset));
                last = offset;
            }

            let mut last = 0.0;
            let mut position = geometry.collapsed_position();
            while position != geometry.hidden_position() {
                position -= step;
                let offset = geometry.slide_offset(position);
                assert!(offset < last, "{edge:?} at {position}");
                assert!((-1.0..=0.0).contains(&offset));
                last = offset;
            }
        }
    }

    #[test]
    fn drag_clamp_relaxes_toward_hidden_when_hideable() {
        let bottom = SheetGeometry::new(SlideEdge::Bottom, 1000, 1000, 200);
        assert_eq!(bottom.clamp_drag_position(950, false), 800);
        assert_eq!(bottom.clamp_drag_position(950, true), 950);
        assert_eq!(bottom.clamp_drag_position(1200, true), 1000);
        assert_eq!(bottom.clamp_drag_position(-50, true), 0);

        let left = SheetGeometry::new(SlideEdge::Left, 1000, 1000, 200);
        assert_eq!(left.clamp_drag_position(-900, false), -800);
        assert_eq!(left.clamp_drag_position(-900, true), -900);
        assert_eq!(left.clamp_drag_position(30, true), 0);
    }

    #[test]
    fn drag_range_includes_hidden_span_when_hideable() {
        let geometry = SheetGeometry::new(SlideEdge::Bottom, 1000, 600, 200);
        assert_eq!(geometry.drag_range(false), 400);
        assert_eq!(geometry.drag_range(true), 600);
    }

    #[test]
    fn midpoint_decides_which_rest_is_closer() {
        let bottom = SheetGeometry::new(SlideEdge::Bottom, 1000, 1000, 200);
        assert!(bottom.is_closer_to_expanded(399));
        assert!(!bottom.is_closer_to_expanded(400));

        let short = SheetGeometry::new(SlideEdge::Bottom, 1000, 500, 200);
        assert!(short.is_closer_to_expanded(600));
        assert!(!short.is_closer_to_expanded(700));

        let top = SheetGeometry::new(SlideEdge::Top, 1000, 1000, 200);
        assert!(top.is_closer_to_expanded(-300));
        assert!(!top.is_closer_to_expanded(-500));
    }

    #[test]
    fn hide_requires_hideable() {
        let geometry = SheetGeometry::new(SlideEdge::Bottom, 1000, 1000, 200);
        assert!(!geometry.should_hide(990, 5_000.0, false, false));
        assert!(geometry.should_hide(990, 5_000.0, true, false));
    }

    #[test]
    fn hide_is_refused_when_heading_toward_expanded() {
        let geometry = SheetGeometry::new(SlideEdge::Bottom, 1000, 1000, 200);
        assert!(!geometry.should_hide(950, -10.0, true, true));
        assert!(!geometry.should_hide(100, 0.0, true, true));
    }

    #[test]
    fn skip_collapsed_hides_any_outward_release() {
        let geometry = SheetGeometry::new(SlideEdge::Bottom, 1000, 1000, 200);
        assert!(geometry.should_hide(300, 100.0, true, true));
        assert!(!geometry.should_hide(300, 100.0, true, false));
    }

    #[test]
    fn resting_release_hides_past_half_the_peek() {
        let geometry = SheetGeometry::new(SlideEdge::Bottom, 1000, 1000, 200);
        assert!(!geometry.should_hide(850, 0.0, true, false));
        assert!(!geometry.should_hide(900, 0.0, true, false));
        assert!(geometry.should_hide(910, 0.0, true, false));
        // A fling projects the position forward.
        assert!(geometry.should_hide(850, 1_000.0, true, false));
    }

    #[test]
    fn reversed_hide_compares_the_visible_end_with_the_peek() {
        let geometry = SheetGeometry::new(SlideEdge::Top, 1000, 1000, 200);
        assert!(!geometry.should_hide(-850, 0.0, true, false));
        assert!(geometry.should_hide(-910, 0.0, true, false));
        assert!(geometry.should_hide(-850, -1_000.0, true, false));
        assert!(!geometry.should_hide(-700, -1.0, true, false));
    }
}
