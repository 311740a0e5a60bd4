//! Fixed, preset, and responsive gaps.

use super::theme::{Breakpoints, ScreenTier};
use super::{Axis, Component, RenderContext, ViewNode};

/// Named gap sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapSize {
    /// 4px
    XSmall,
    /// 8px
    Small,
    #[default]
    /// 12px
    Medium,
    /// 16px
    Large,
    /// 24px
    XLarge,
    /// 32px
    XxLarge,
    /// 48px
    XxxLarge,
}

impl GapSize {
    pub const ALL: [GapSize; 7] = [
        Self::XSmall,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::XLarge,
        Self::XxLarge,
        Self::XxxLarge,
    ];

    /// Returns the gap in pixels.
    pub fn pixels(self) -> f32 {
        match self {
            Self::XSmall => 4.0,
            Self::Small => 8.0,
            Self::Medium => 12.0,
            Self::Large => 16.0,
            Self::XLarge => 24.0,
            Self::XxLarge => 32.0,
            Self::XxxLarge => 48.0,
        }
    }
}

/// Blank box of `width` with no height constraint.
pub fn horizontal_gap(width: f32) -> ViewNode {
    ViewNode::Spacer {
        width: Some(width),
        height: None,
    }
}

/// Blank box of `height` with no width constraint.
pub fn vertical_gap(height: f32) -> ViewNode {
    ViewNode::Spacer {
        width: None,
        height: Some(height),
    }
}

/// Picks the value for the tier `width` falls into.
pub fn responsive_value(
    width: f32,
    breakpoints: &Breakpoints,
    mobile: f32,
    tablet: f32,
    desktop: f32,
) -> f32 {
    match breakpoints.tier(width) {
        ScreenTier::Mobile => mobile,
        ScreenTier::Tablet => tablet,
        ScreenTier::Desktop => desktop,
    }
}

/// Horizontal gap sized for the current viewport.
pub fn responsive_horizontal(ctx: &RenderContext, mobile: f32, tablet: f32, desktop: f32) -> ViewNode {
    Responsive::horizontal(mobile, tablet, desktop).render(ctx)
}

/// Vertical gap sized for the current viewport.
pub fn responsive_vertical(ctx: &RenderContext, mobile: f32, tablet: f32, desktop: f32) -> ViewNode {
    Responsive::vertical(mobile, tablet, desktop).render(ctx)
}

/// A fixed gap along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gap {
    axis: Axis,
    size: f32,
}

impl Gap {
    /// Creates a horizontal gap in pixels.
    pub fn horizontal(width: f32) -> Self {
        Self {
            axis: Axis::Horizontal,
            size: width,
        }
    }

    /// Creates a vertical gap in pixels.
    pub fn vertical(height: f32) -> Self {
        Self {
            axis: Axis::Vertical,
            size: height,
        }
    }

    /// Creates a gap from a named size.
    pub fn preset(axis: Axis, size: GapSize) -> Self {
        Self {
            axis,
            size: size.pixels(),
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

impl Component for Gap {
    fn render(&self, _ctx: &RenderContext) -> ViewNode {
        match self.axis {
            Axis::Horizontal => horizontal_gap(self.size),
            Axis::Vertical => vertical_gap(self.size),
        }
    }
}

/// A gap with one size per screen tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Responsive {
    axis: Axis,
    mobile: f32,
    tablet: f32,
    desktop: f32,
}

impl Responsive {
    pub fn horizontal(mobile: f32, tablet: f32, desktop: f32) -> Self {
        Self {
            axis: Axis::Horizontal,
            mobile,
            tablet,
            desktop,
        }
    }

    pub fn vertical(mobile: f32, tablet: f32, desktop: f32) -> Self {
        Self {
            axis: Axis::Vertical,
            mobile,
            tablet,
            desktop,
        }
    }

    /// Same named size on every tier, stepping up one preset per tier.
    pub fn stepped(axis: Axis, base: GapSize) -> Self {
        let idx = GapSize::ALL.iter().position(|g| *g == base).unwrap_or(0);
        let at = |i: usize| GapSize::ALL[i.min(GapSize::ALL.len() - 1)].pixels();
        Self {
            axis,
            mobile: at(idx),
            tablet: at(idx + 1),
            desktop: at(idx + 2),
        }
    }
}

impl Component for Responsive {
    fn render(&self, ctx: &RenderContext) -> ViewNode {
        let size = responsive_value(
            ctx.viewport.width,
            &ctx.theme.breakpoints,
            self.mobile,
            self.tablet,
            self.desktop,
        );
        log::trace!(
            "Responsive gap at width {} -> {}",
            ctx.viewport.width,
            size
        );
        Gap {
            axis: self.axis,
            size,
        }
        .render(ctx)
    }
}
