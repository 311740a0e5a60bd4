//! Divider component for visual separation.

use super::theme::Color;
use super::{Component, RenderContext, RuleNode, ViewNode};

/// A horizontal rule centered in a fixed-height box.
#[derive(Debug, Clone, Default)]
pub struct Divider {
    /// Box height (theme divider height if not set)
    height: Option<f32>,
    /// Line thickness (theme divider thickness if not set)
    thickness: Option<f32>,
    /// Color override (uses theme divider color if not set)
    color: Option<Color>,
    /// Empty space before the line starts
    indent: f32,
    /// Empty space after the line ends
    end_indent: f32,
    /// Box collapses to the line thickness; wins over `height`
    tight: bool,
}

impl Divider {
    /// Creates a new horizontal divider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line thickness.
    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = Some(thickness);
        self
    }

    /// Sets the height of the box the line sits in.
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets a custom color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the leading indent.
    pub fn indent(mut self, indent: f32) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the trailing indent.
    pub fn end_indent(mut self, indent: f32) -> Self {
        self.end_indent = indent;
        self
    }

    /// Removes the space around the line.
    pub fn tight(mut self) -> Self {
        self.tight = true;
        self
    }
}

impl Component for Divider {
    fn render(&self, ctx: &RenderContext) -> ViewNode {
        let sizes = &ctx.theme.sizes;
        let thickness = self.thickness.unwrap_or(sizes.divider_thickness);
        let height = if self.tight {
            thickness
        } else {
            self.height.unwrap_or(sizes.divider_height)
        };

        ViewNode::Rule(RuleNode {
            height,
            thickness,
            color: self.color.unwrap_or(ctx.theme.palette.divider),
            indent: self.indent,
            end_indent: self.end_indent,
        })
    }
}
