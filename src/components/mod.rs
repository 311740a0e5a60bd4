//! Visual component system.
//!
//! Components map their props and the shared [`Theme`] onto a [`ViewNode`]
//! tree. The tree is a toolkit-neutral description of what to draw; the host
//! toolkit (see the `gpui` feature) turns it into real widgets.

mod button;
mod card;
mod divider;
mod spacing;
mod style;
pub mod theme;

pub use button::{Button, ButtonStyle, ButtonTone};
pub use card::Card;
pub use divider::Divider;
pub use spacing::{
    horizontal_gap, responsive_horizontal, responsive_value, responsive_vertical, vertical_gap,
    Gap, GapSize, Responsive,
};
pub use style::{pick, resolve, FontWeight, SizeVariant, StyleAttributes};
pub use theme::{Breakpoints, Color, Palette, ScreenTier, Sizes, Theme, Typography};

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Logical viewport size the tree is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Context provided during rendering.
pub struct RenderContext<'a> {
    /// Token tables
    pub theme: &'a Theme,
    /// Current viewport, used by responsive helpers
    pub viewport: Viewport,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, viewport: Viewport) -> Self {
        Self { theme, viewport }
    }
}

/// Trait for UI components that turn props into a view tree.
///
/// Rendering must be pure: identical props, theme, and viewport always give
/// an identical tree.
pub trait Component: Send + Sync {
    fn render(&self, ctx: &RenderContext) -> ViewNode;
}

impl Component for ViewNode {
    fn render(&self, _ctx: &RenderContext) -> ViewNode {
        self.clone()
    }
}

/// Press callback attached to a pressable node.
#[derive(Clone)]
pub struct PressHandler(Arc<dyn Fn() + Send + Sync>);

impl PressHandler {
    pub fn new(handler: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for PressHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PressHandler(..)")
    }
}

impl PartialEq for PressHandler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Per-side insets in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EdgeInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets::all(0.0);

    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// Solid border drawn inside the container bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Border {
    pub color: Color,
    pub width: f32,
}

impl Border {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Drop shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    pub color: Color,
    pub blur: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub spread: f32,
}

impl Shadow {
    /// Material-style shadow for an elevation level.
    pub fn for_elevation(elevation: f32, color: Color) -> Self {
        Self {
            color,
            blur: elevation * 2.0,
            offset_x: 0.0,
            offset_y: elevation / 2.0,
            spread: 0.0,
        }
    }
}

/// Where a background image comes from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "path", rename_all = "snake_case")]
pub enum ImageSource {
    /// Bundled with the application
    Asset(String),
    /// Fetched by the host toolkit
    Url(String),
}

/// How an image fills its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFit {
    /// Scale to fill, cropping the overflow
    #[default]
    Cover,
    Contain,
    Fill,
}

/// Container background. Color and image are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Background {
    Color { color: Color },
    Image { source: ImageSource, fit: ImageFit },
}

/// Visual response of a pressable region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PressFeedback {
    #[default]
    Ripple,
    /// Inert region, e.g. a disabled control
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextNode {
    pub content: String,
    pub color: Color,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub font_family: String,
}

/// Indeterminate circular progress indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinnerNode {
    pub size: f32,
    pub stroke_width: f32,
    pub color: Color,
}

/// Horizontal rule centered inside a box of `height`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleNode {
    pub height: f32,
    pub thickness: f32,
    pub color: Color,
    pub indent: f32,
    pub end_indent: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerNode {
    pub background: Option<Background>,
    pub corner_radius: f32,
    pub padding: EdgeInsets,
    pub margin: EdgeInsets,
    pub border: Option<Border>,
    pub shadow: Option<Shadow>,
    /// Clip children to the rounded bounds
    pub clip: bool,
    /// Stretch to the parent's width
    pub fill_width: bool,
    pub opacity: f32,
    pub child: Option<Box<ViewNode>>,
}

impl Default for ContainerNode {
    fn default() -> Self {
        Self {
            background: None,
            corner_radius: 0.0,
            padding: EdgeInsets::ZERO,
            margin: EdgeInsets::ZERO,
            border: None,
            shadow: None,
            clip: false,
            fill_width: false,
            opacity: 1.0,
            child: None,
        }
    }
}

/// Region that reacts to presses.
///
/// A disabled region carries no handler at all, so the host sees an inert
/// control rather than one that ignores presses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressableNode {
    #[serde(rename = "actionable", serialize_with = "serialize_handler")]
    pub on_press: Option<PressHandler>,
    pub disabled: bool,
    pub feedback: PressFeedback,
    /// Corner radius the press feedback is clipped to
    pub clip_radius: f32,
    pub child: Box<ViewNode>,
}

fn serialize_handler<S: Serializer>(
    handler: &Option<PressHandler>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_bool(handler.is_some())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackNode {
    pub axis: Axis,
    pub spacing: f32,
    pub children: Vec<ViewNode>,
}

/// A node in the rendered view tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewNode {
    /// Blank box. `None` leaves that dimension to the parent.
    Spacer {
        width: Option<f32>,
        height: Option<f32>,
    },
    Text(TextNode),
    Spinner(SpinnerNode),
    Rule(RuleNode),
    Container(ContainerNode),
    Pressable(PressableNode),
    Stack(StackNode),
}

impl ViewNode {
    /// Direct children of this node.
    pub fn children(&self) -> Vec<&ViewNode> {
        match self {
            Self::Container(c) => c.child.iter().map(|b| b.as_ref()).collect(),
            Self::Pressable(p) => vec![p.child.as_ref()],
            Self::Stack(s) => s.children.iter().collect(),
            Self::Spacer { .. } | Self::Text(_) | Self::Spinner(_) | Self::Rule(_) => Vec::new(),
        }
    }

    /// This node and all descendants, depth-first pre-order.
    pub fn descendants(&self) -> Vec<&ViewNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().into_iter().rev());
        }
        out
    }

    /// First pressable region in the tree.
    pub fn find_pressable(&self) -> Option<&PressableNode> {
        self.descendants().into_iter().find_map(|n| match n {
            Self::Pressable(p) => Some(p),
            _ => None,
        })
    }

    /// First text node in the tree.
    pub fn find_text(&self) -> Option<&TextNode> {
        self.descendants().into_iter().find_map(|n| match n {
            Self::Text(t) => Some(t),
            _ => None,
        })
    }

    /// First spinner in the tree.
    pub fn find_spinner(&self) -> Option<&SpinnerNode> {
        self.descendants().into_iter().find_map(|n| match n {
            Self::Spinner(s) => Some(s),
            _ => None,
        })
    }

    /// Simulates a press on the first pressable region.
    ///
    /// Returns true if a handler ran.
    pub fn press(&self) -> bool {
        match self.find_pressable().and_then(|p| p.on_press.as_ref()) {
            Some(handler) => {
                handler.call();
                true
            }
            None => false,
        }
    }

    /// Fixed size of a spacer, if this is one.
    pub fn spacer_size(&self) -> Option<(Option<f32>, Option<f32>)> {
        match self {
            Self::Spacer { width, height } => Some((*width, *height)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn text(content: &str) -> ViewNode {
        ViewNode::Text(TextNode {
            content: content.to_string(),
            color: Color::BLACK,
            font_size: 14.0,
            font_weight: FontWeight::NORMAL,
            font_family: "Inter".to_string(),
        })
    }

    #[test]
    fn descendants_are_pre_order() {
        let tree = ViewNode::Stack(StackNode {
            axis: Axis::Vertical,
            spacing: 0.0,
            children: vec![
                ViewNode::Container(ContainerNode {
                    child: Some(Box::new(text("a"))),
                    ..Default::default()
                }),
                text("b"),
            ],
        });

        let texts: Vec<_> = tree
            .descendants()
            .into_iter()
            .filter_map(|n| match n {
                ViewNode::Text(t) => Some(t.content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(tree.find_text().map(|t| t.content.as_str()), Some("a"));
    }

    #[test]
    fn press_runs_handler_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let tree = ViewNode::Pressable(PressableNode {
            on_press: Some(PressHandler::new(move || {
                c.fetch_add(1, Ordering::SeqCst);
            })),
            disabled: false,
            feedback: PressFeedback::Ripple,
            clip_radius: 0.0,
            child: Box::new(text("go")),
        });

        assert!(tree.press());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn press_without_pressable_is_noop() {
        assert!(!text("static").press());
    }

    #[test]
    fn handler_equality_is_identity() {
        let a = PressHandler::new(|| {});
        let b = PressHandler::new(|| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let node = ViewNode::Spacer {
            width: Some(8.0),
            height: None,
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "spacer");
        assert_eq!(json["width"], 8.0);
        assert!(json["height"].is_null());
    }

    #[test]
    fn pressable_serializes_actionable_flag() {
        let node = ViewNode::Pressable(PressableNode {
            on_press: None,
            disabled: true,
            feedback: PressFeedback::None,
            clip_radius: 8.0,
            child: Box::new(text("x")),
        });
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["actionable"], false);
        assert_eq!(json["feedback"], "none");
    }

    #[test]
    fn edge_insets_helpers() {
        let insets = EdgeInsets::symmetric(16.0, 10.0);
        assert_eq!(insets.horizontal(), 32.0);
        assert_eq!(insets.vertical(), 20.0);
        assert!(EdgeInsets::ZERO.is_zero());
        assert!(!insets.is_zero());
    }
}
