//! Card container component with background, border, shadow, and optional tap handling.

use super::theme::Color;
use super::{
    Background, Border, Component, ContainerNode, EdgeInsets, ImageFit, ImageSource,
    PressFeedback, PressHandler, PressableNode, RenderContext, Shadow, ViewNode,
};

/// A rounded, shadowed surface around a child component.
#[derive(Default)]
pub struct Card {
    /// Content rendered inside the card
    child: Option<Box<dyn Component>>,
    /// Solid fill (theme surface color if not set)
    background_color: Option<Color>,
    /// Image fill; takes the place of the solid color
    background_image: Option<ImageSource>,
    /// How the image is scaled (cover if not set)
    background_fit: Option<ImageFit>,
    corner_radius: Option<f32>,
    padding: Option<EdgeInsets>,
    margin: Option<EdgeInsets>,
    border: Option<Border>,
    elevation: Option<f32>,
    shadow_color: Option<Color>,
    on_tap: Option<PressHandler>,
}

impl Card {
    /// Creates an empty card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the child component.
    pub fn child(mut self, child: impl Component + 'static) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    /// Sets a solid background color.
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets a background image, scaled to cover the card.
    pub fn background_image(mut self, source: ImageSource) -> Self {
        self.background_image = Some(source);
        self
    }

    /// Sets how a background image is scaled into the card.
    pub fn background_fit(mut self, fit: ImageFit) -> Self {
        self.background_fit = Some(fit);
        self
    }

    /// Sets the corner radius.
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Sets the inset around the child.
    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Sets the space outside the card.
    pub fn margin(mut self, margin: EdgeInsets) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Sets a border.
    ///
    /// # Arguments
    /// * `color` - Border color
    /// * `width` - Border width in logical pixels
    pub fn border(mut self, color: Color, width: f32) -> Self {
        self.border = Some(Border::new(color, width));
        self
    }

    /// Sets the elevation the shadow is derived from. Zero removes the shadow.
    pub fn elevation(mut self, elevation: f32) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn shadow_color(mut self, color: Color) -> Self {
        self.shadow_color = Some(color);
        self
    }

    /// Makes the card pressable.
    pub fn on_tap(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_tap = Some(PressHandler::new(handler));
        self
    }

    fn background(&self, ctx: &RenderContext) -> Background {
        match &self.background_image {
            Some(source) => Background::Image {
                source: source.clone(),
                fit: self.background_fit.unwrap_or(ImageFit::Cover),
            },
            None => Background::Color {
                color: self.background_color.unwrap_or(ctx.theme.palette.surface),
            },
        }
    }
}

impl Component for Card {
    fn render(&self, ctx: &RenderContext) -> ViewNode {
        let sizes = &ctx.theme.sizes;
        let radius = self.corner_radius.unwrap_or(sizes.radius_large);
        let padding = self
            .padding
            .unwrap_or_else(|| EdgeInsets::all(sizes.card_padding));
        let elevation = self.elevation.unwrap_or(sizes.elevation);
        let shadow = (elevation > 0.0).then(|| {
            Shadow::for_elevation(
                elevation,
                self.shadow_color.unwrap_or(ctx.theme.palette.shadow),
            )
        });

        let content = self.child.as_ref().map(|c| Box::new(c.render(ctx)));

        let mut surface = ContainerNode {
            background: Some(self.background(ctx)),
            corner_radius: radius,
            margin: self.margin.unwrap_or(EdgeInsets::ZERO),
            border: self.border,
            shadow,
            // Image fills must not spill past the rounded corners
            clip: self.background_image.is_some(),
            ..Default::default()
        };

        match &self.on_tap {
            Some(handler) => {
                // Padding moves inside the pressable so the ripple covers the whole card
                let inner = ContainerNode {
                    padding,
                    child: content,
                    ..Default::default()
                };
                surface.clip = true;
                surface.child = Some(Box::new(ViewNode::Pressable(PressableNode {
                    on_press: Some(handler.clone()),
                    disabled: false,
                    feedback: PressFeedback::Ripple,
                    clip_radius: radius,
                    child: Box::new(ViewNode::Container(inner)),
                })));
            }
            None => {
                surface.padding = padding;
                surface.child = content;
            }
        }

        ViewNode::Container(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Theme, Viewport};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn render(card: &Card) -> ViewNode {
        let theme = Theme::default();
        card.render(&RenderContext::new(&theme, Viewport::new(400.0, 800.0)))
    }

    fn outer(node: &ViewNode) -> &ContainerNode {
        match node {
            ViewNode::Container(c) => c,
            other => panic!("expected container, got {:?}", other),
        }
    }

    #[test]
    fn defaults_from_theme() {
        let theme = Theme::default();
        let node = render(&Card::new().child(ViewNode::Spacer {
            width: Some(10.0),
            height: Some(10.0),
        }));
        let c = outer(&node);

        assert_eq!(
            c.background,
            Some(Background::Color {
                color: theme.palette.surface
            })
        );
        assert_eq!(c.corner_radius, theme.sizes.radius_large);
        assert_eq!(c.padding, EdgeInsets::all(16.0));
        assert_eq!(c.margin, EdgeInsets::ZERO);
        assert_eq!(
            c.shadow,
            Some(Shadow::for_elevation(2.0, theme.palette.shadow))
        );
        assert!(c.border.is_none());
        assert!(c.child.is_some());
    }

    #[test]
    fn image_suppresses_solid_color() {
        let node = render(
            &Card::new()
                .background_color(Color::BLACK)
                .background_image(ImageSource::Asset("hero.png".to_string())),
        );
        let c = outer(&node);

        assert_eq!(
            c.background,
            Some(Background::Image {
                source: ImageSource::Asset("hero.png".to_string()),
                fit: ImageFit::Cover,
            })
        );
        assert!(c.clip);
    }

    #[test]
    fn image_fit_can_be_overridden() {
        let node = render(
            &Card::new()
                .background_image(ImageSource::Asset("logo.png".to_string()))
                .background_fit(ImageFit::Contain),
        );
        match &outer(&node).background {
            Some(Background::Image { fit, .. }) => assert_eq!(*fit, ImageFit::Contain),
            other => panic!("expected image background, got {:?}", other),
        }
    }

    #[test]
    fn image_card_honors_shadow_props() {
        let tint = Color::rgba(0.5, 0.0, 0.0, 0.4);
        let node = render(
            &Card::new()
                .background_image(ImageSource::Url("https://example.com/a.jpg".to_string()))
                .elevation(6.0)
                .shadow_color(tint),
        );
        assert_eq!(outer(&node).shadow, Some(Shadow::for_elevation(6.0, tint)));
    }

    #[test]
    fn zero_elevation_has_no_shadow() {
        let node = render(&Card::new().elevation(0.0));
        assert!(outer(&node).shadow.is_none());
    }

    #[test]
    fn without_tap_is_inert() {
        let node = render(&Card::new().child(ViewNode::Spacer {
            width: None,
            height: Some(4.0),
        }));
        assert!(node.find_pressable().is_none());
        assert!(!node.press());
    }

    #[test]
    fn tap_wraps_content_in_clipped_ripple() {
        let tapped = Arc::new(AtomicBool::new(false));
        let t = tapped.clone();
        let node = render(
            &Card::new()
                .corner_radius(20.0)
                .padding(EdgeInsets::all(8.0))
                .on_tap(move || t.store(true, Ordering::SeqCst)),
        );

        let c = outer(&node);
        assert!(c.clip);
        assert_eq!(c.padding, EdgeInsets::ZERO);

        let pressable = node.find_pressable().unwrap();
        assert_eq!(pressable.feedback, PressFeedback::Ripple);
        assert_eq!(pressable.clip_radius, 20.0);
        match pressable.child.as_ref() {
            ViewNode::Container(inner) => assert_eq!(inner.padding, EdgeInsets::all(8.0)),
            other => panic!("expected padded container, got {:?}", other),
        }

        assert!(node.press());
        assert!(tapped.load(Ordering::SeqCst));
    }

    #[test]
    fn border_and_margin_pass_through() {
        let node = render(
            &Card::new()
                .border(Color::BLACK, 2.0)
                .margin(EdgeInsets::symmetric(4.0, 2.0)),
        );
        let c = outer(&node);
        assert_eq!(c.border, Some(Border::new(Color::BLACK, 2.0)));
        assert_eq!(c.margin, EdgeInsets::symmetric(4.0, 2.0));
    }
}
