//! Button component.

use serde::Serialize;

use super::style::{pick, FontWeight, SizeVariant};
use super::theme::{Color, Palette, Theme};
use super::{
    Background, Border, Component, ContainerNode, EdgeInsets, PressFeedback, PressHandler,
    PressableNode, RenderContext, SpinnerNode, TextNode, ViewNode,
};

/// Opacity applied to a disabled, idle button.
const DISABLED_OPACITY: f32 = 0.5;

/// Color treatment of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonTone {
    #[default]
    Primary,
    Secondary,
    Danger,
    Success,
    /// Transparent fill with a primary-colored border and label
    Outline,
}

impl ButtonTone {
    /// Returns the (background, foreground, border) for this tone.
    fn colors(self, palette: &Palette) -> (Color, Color, Option<Border>) {
        match self {
            Self::Primary => (palette.primary, palette.on_primary, None),
            Self::Secondary => (palette.secondary, palette.on_primary, None),
            Self::Danger => (palette.danger, palette.on_primary, None),
            Self::Success => (palette.success, palette.on_primary, None),
            Self::Outline => (
                Color::TRANSPARENT,
                palette.primary,
                Some(Border::new(palette.primary, 1.0)),
            ),
        }
    }
}

/// Fully resolved visual parameters of a button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonStyle {
    pub background: Color,
    pub text_color: Color,
    pub border: Option<Border>,
    pub padding: EdgeInsets,
    pub corner_radius: f32,
    pub font_size: f32,
    pub font_weight: FontWeight,
}

/// A pressable button with a label or a loading spinner.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    on_press: Option<PressHandler>,
    size: SizeVariant,
    tone: ButtonTone,
    background_color: Option<Color>,
    text_color: Option<Color>,
    padding: Option<EdgeInsets>,
    border_radius: Option<f32>,
    font_size: Option<f32>,
    font_weight: Option<FontWeight>,
    enabled: bool,
    loading: bool,
    full_width: bool,
}

impl Button {
    /// Creates an enabled, medium, primary button.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_press: None,
            size: SizeVariant::Medium,
            tone: ButtonTone::Primary,
            background_color: None,
            text_color: None,
            padding: None,
            border_radius: None,
            font_size: None,
            font_weight: None,
            enabled: true,
            loading: false,
            full_width: false,
        }
    }

    /// Creates a secondary button.
    pub fn secondary(label: impl Into<String>) -> Self {
        Self::new(label).tone(ButtonTone::Secondary)
    }

    /// Creates a danger button.
    pub fn danger(label: impl Into<String>) -> Self {
        Self::new(label).tone(ButtonTone::Danger)
    }

    /// Creates an outline button.
    pub fn outline(label: impl Into<String>) -> Self {
        Self::new(label).tone(ButtonTone::Outline)
    }

    /// Sets the press callback.
    pub fn on_press(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_press = Some(PressHandler::new(handler));
        self
    }

    pub fn size(mut self, size: SizeVariant) -> Self {
        self.size = size;
        self
    }

    pub fn tone(mut self, tone: ButtonTone) -> Self {
        self.tone = tone;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Stretches the button to the parent's width.
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Whether a press would reach the callback.
    pub fn is_actionable(&self) -> bool {
        self.enabled && !self.loading
    }

    /// Resolves every visual attribute against the theme.
    pub fn resolve_style(&self, theme: &Theme) -> ButtonStyle {
        let sized = self.size.style();
        let (tone_bg, tone_fg, tone_border) = self.tone.colors(&theme.palette);

        ButtonStyle {
            background: pick(self.background_color, Some(tone_bg), theme.palette.primary),
            text_color: pick(self.text_color, Some(tone_fg), Color::WHITE),
            border: tone_border,
            padding: pick(self.padding, Some(sized.padding), EdgeInsets::ZERO),
            corner_radius: pick(self.border_radius, Some(sized.corner_radius), 0.0),
            font_size: pick(self.font_size, Some(sized.font_size), theme.typography.font_size),
            font_weight: pick(self.font_weight, Some(sized.font_weight), FontWeight::NORMAL),
        }
    }
}

impl Component for Button {
    fn render(&self, ctx: &RenderContext) -> ViewNode {
        let theme = ctx.theme;
        let style = self.resolve_style(theme);

        let content = if self.loading {
            ViewNode::Spinner(SpinnerNode {
                size: theme.sizes.spinner_size,
                stroke_width: theme.sizes.spinner_stroke,
                color: style.text_color,
            })
        } else {
            ViewNode::Text(TextNode {
                content: self.label.clone(),
                color: style.text_color,
                font_size: style.font_size,
                font_weight: style.font_weight,
                font_family: theme.typography.font_family.clone(),
            })
        };

        let actionable = self.is_actionable();
        let on_press = if actionable {
            self.on_press.clone()
        } else {
            None
        };
        if !actionable && self.on_press.is_some() {
            log::trace!(
                "Button '{}' suppressed press handler (enabled={}, loading={})",
                self.label,
                self.enabled,
                self.loading
            );
        }

        // Loading keeps full opacity so the spinner stays legible
        let opacity = if !self.enabled && !self.loading {
            DISABLED_OPACITY
        } else {
            1.0
        };

        let surface = ContainerNode {
            background: Some(Background::Color {
                color: style.background,
            }),
            corner_radius: style.corner_radius,
            padding: style.padding,
            border: style.border,
            clip: true,
            fill_width: self.full_width,
            opacity,
            child: Some(Box::new(content)),
            ..Default::default()
        };

        ViewNode::Pressable(PressableNode {
            on_press,
            disabled: !actionable,
            feedback: if actionable {
                PressFeedback::Ripple
            } else {
                PressFeedback::None
            },
            clip_radius: style.corner_radius,
            child: Box::new(ViewNode::Container(surface)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{resolve, Viewport};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn render(button: &Button) -> ViewNode {
        let theme = Theme::default();
        button.render(&RenderContext::new(&theme, Viewport::new(400.0, 800.0)))
    }

    fn counting(button: Button) -> (Button, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let button = button.on_press(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (button, count)
    }

    fn surface(node: &ViewNode) -> &ContainerNode {
        node.descendants()
            .into_iter()
            .find_map(|n| match n {
                ViewNode::Container(c) => Some(c),
                _ => None,
            })
            .expect("button has a surface container")
    }

    #[test]
    fn enabled_button_fires_callback() {
        let (button, count) = counting(Button::new("Save"));
        let node = render(&button);

        assert!(node.press());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(node.find_text().unwrap().content, "Save");
        assert_eq!(node.find_pressable().unwrap().feedback, PressFeedback::Ripple);
    }

    #[test]
    fn loading_shows_spinner_never_label() {
        for enabled in [true, false] {
            let node = render(&Button::new("Save").enabled(enabled).loading(true));
            assert!(node.find_spinner().is_some());
            assert!(node.find_text().is_none());
        }
    }

    #[test]
    fn spinner_uses_effective_text_color() {
        let theme = Theme::default();
        let tint = Color::rgba(0.1, 0.2, 0.3, 1.0);
        let node = render(&Button::new("Save").text_color(tint).loading(true));

        let spinner = node.find_spinner().unwrap();
        assert_eq!(spinner.color, tint);
        assert_eq!(spinner.size, theme.sizes.spinner_size);
    }

    #[test]
    fn disabled_or_loading_suppresses_callback() {
        let cases = [(false, false), (true, true), (false, true)];
        for (enabled, loading) in cases {
            let (button, count) = counting(Button::new("Go").enabled(enabled).loading(loading));
            let node = render(&button);

            let pressable = node.find_pressable().unwrap();
            assert!(pressable.on_press.is_none());
            assert!(pressable.disabled);
            assert_eq!(pressable.feedback, PressFeedback::None);
            assert!(!node.press());
            assert_eq!(count.load(Ordering::SeqCst), 0);
        }
    }

    #[test]
    fn disabled_button_is_dimmed_but_loading_is_not() {
        assert_eq!(surface(&render(&Button::new("a").enabled(false))).opacity, 0.5);
        assert_eq!(surface(&render(&Button::new("a").loading(true))).opacity, 1.0);
    }

    #[test]
    fn overrides_beat_size_defaults() {
        let bg = Color::rgba(1.0, 0.0, 0.0, 1.0);
        let fg = Color::rgba(0.0, 1.0, 0.0, 1.0);
        let padding = EdgeInsets::all(3.0);

        for size in SizeVariant::ALL {
            let button = Button::new("x")
                .size(size)
                .background_color(bg)
                .text_color(fg)
                .padding(padding)
                .border_radius(0.0);
            let style = button.resolve_style(&Theme::default());

            assert_eq!(style.background, bg);
            assert_eq!(style.text_color, fg);
            assert_eq!(style.padding, padding);
            assert_eq!(style.corner_radius, 0.0);
            assert_eq!(style.font_size, resolve(size).font_size);
        }
    }

    #[test]
    fn defaults_come_from_size_and_theme() {
        let theme = Theme::default();
        let style = Button::new("x").size(SizeVariant::Large).resolve_style(&theme);
        let large = resolve(SizeVariant::Large);

        assert_eq!(style.background, theme.palette.primary);
        assert_eq!(style.text_color, Color::WHITE);
        assert_eq!(style.padding, large.padding);
        assert_eq!(style.corner_radius, large.corner_radius);
        assert_eq!(style.font_weight, large.font_weight);
    }

    #[test]
    fn label_uses_effective_typography() {
        let node = render(
            &Button::new("Hi")
                .size(SizeVariant::Small)
                .font_weight(FontWeight::BOLD),
        );
        let text = node.find_text().unwrap();
        assert_eq!(text.font_size, 12.0);
        assert_eq!(text.font_weight, FontWeight::BOLD);
    }

    #[test]
    fn outline_has_border_and_transparent_fill() {
        let theme = Theme::default();
        let style = Button::outline("x").resolve_style(&theme);
        assert_eq!(style.background, Color::TRANSPARENT);
        assert_eq!(style.text_color, theme.palette.primary);
        assert_eq!(style.border, Some(Border::new(theme.palette.primary, 1.0)));
    }

    #[test]
    fn ripple_is_clipped_to_button_radius() {
        let node = render(&Button::new("x").border_radius(20.0));
        let pressable = node.find_pressable().unwrap();
        assert_eq!(pressable.clip_radius, 20.0);
        assert_eq!(surface(&node).corner_radius, 20.0);
    }

    #[test]
    fn render_is_pure() {
        let button = Button::new("Same").size(SizeVariant::Small);
        assert_eq!(render(&button), render(&button));
    }
}
