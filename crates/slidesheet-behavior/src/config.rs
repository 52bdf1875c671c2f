//! Construction-time configuration for a sliding sheet.

use crate::edge::SlideEdge;
use slidesheet_foundation::ViewConfiguration;

/// Extent of the sheet left visible while Collapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PeekSize {
    /// 7/16 of the container extent, capped by the sheet's own extent and
    /// floored at [`ViewConfiguration::min_peek_size`].
    #[default]
    Auto,
    Px(i32),
}

impl PeekSize {
    /// Raw value used by platform attributes for [`PeekSize::Auto`].
    pub const AUTO_CODE: i32 = -1;

    /// Explicit peek in pixels; negative values become 0.
    pub fn px(value: i32) -> Self {
        PeekSize::Px(value.max(0))
    }

    pub fn is_auto(self) -> bool {
        matches!(self, PeekSize::Auto)
    }
}

impl From<i32> for PeekSize {
    fn from(value: i32) -> Self {
        if value == Self::AUTO_CODE {
            PeekSize::Auto
        } else {
            PeekSize::px(value)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetConfig {
    pub edge: SlideEdge,
    pub peek_size: PeekSize,
    pub hideable: bool,
    /// Go straight from a hide gesture to Hidden without stopping at
    /// Collapsed. Only meaningful when `hideable` is set.
    pub skip_collapsed: bool,
    /// Let a drag that starts in the container's edge band capture the
    /// sheet. Only reported as handled when `hideable` is set.
    pub edge_drag_enabled: bool,
    pub view_configuration: ViewConfiguration,
}

impl SheetConfig {
    pub fn new(edge: SlideEdge) -> Self {
        Self {
            edge,
            peek_size: PeekSize::Auto,
            hideable: false,
            skip_collapsed: false,
            edge_drag_enabled: false,
            view_configuration: ViewConfiguration::default(),
        }
    }

    pub fn with_peek_size(mut self, peek_size: impl Into<PeekSize>) -> Self {
        self.peek_size = match peek_size.into() {
            PeekSize::Px(value) => PeekSize::px(value),
            PeekSize::Auto => PeekSize::Auto,
        };
        self
    }

    pub fn with_hideable(mut self, hideable: bool) -> Self {
        self.hideable = hideable;
        self
    }

    pub fn with_skip_collapsed(mut self, skip_collapsed: bool) -> Self {
        self.skip_collapsed = skip_collapsed;
        self
    }

    pub fn with_edge_drag(mut self, enabled: bool) -> Self {
        self.edge_drag_enabled = enabled;
        self
    }

    pub fn with_view_configuration(mut self, view_configuration: ViewConfiguration) -> Self {
        self.view_configuration = view_configuration;
        self
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new(SlideEdge::Bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_plain_bottom_sheet() {
        let config = SheetConfig::default();
        assert_eq!(config.edge, SlideEdge::Bottom);
        assert_eq!(config.peek_size, PeekSize::Auto);
        assert!(!config.hideable);
        assert!(!config.skip_collapsed);
        assert!(!config.edge_drag_enabled);
    }

    #[test]
    fn negative_peek_sizes_are_stored_as_zero() {
        assert_eq!(PeekSize::from(-40), PeekSize::Px(0));
        assert_eq!(PeekSize::from(PeekSize::AUTO_CODE), PeekSize::Auto);
        let config = SheetConfig::new(SlideEdge::Top).with_peek_size(PeekSize::Px(-3));
        assert_eq!(config.peek_size, PeekSize::Px(0));
    }

    #[test]
    fn builder_sets_flags() {
        let config = SheetConfig::new(SlideEdge::Left)
            .with_peek_size(120)
            .with_hideable(true)
            .with_skip_collapsed(true)
            .with_edge_drag(true);
        assert_eq!(config.peek_size, PeekSize::Px(120));
        assert!(config.hideable && config.skip_collapsed && config.edge_drag_enabled);
    }
}
