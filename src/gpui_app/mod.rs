//! GPUI lowering for view trees.
//!
//! Turns a [`ViewNode`] into GPUI elements and hosts the component gallery
//! in a window. Press feedback maps onto GPUI hover/press styling; shadows map
//! onto the nearest built-in shadow preset.

use gpui::{
    div, img, prelude::*, px, size, AnyElement, App, AppContext, Application, Bounds, Context,
    Div, MouseButton, ObjectFit, Rgba, SharedString, Styled, StyledImage, Window, WindowBounds,
    WindowOptions,
};

use crate::components::{
    Axis, Background, Color, ContainerNode, EdgeInsets, ImageFit, ImageSource, PressFeedback,
    PressableNode, RenderContext, RuleNode, SpinnerNode, TextNode, Theme, ViewNode, Viewport,
};
use crate::config::SharedConfig;

fn rgba(color: Color) -> Rgba {
    Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

/// Lowers a view tree onto GPUI elements.
pub fn render_node(node: &ViewNode) -> AnyElement {
    match node {
        ViewNode::Spacer { width, height } => {
            let mut el = div().flex_none();
            if let Some(w) = width {
                el = el.w(px(*w));
            }
            if let Some(h) = height {
                el = el.h(px(*h));
            }
            el.into_any_element()
        }
        ViewNode::Text(text) => render_text(text).into_any_element(),
        ViewNode::Spinner(spinner) => render_spinner(spinner).into_any_element(),
        ViewNode::Rule(rule) => render_rule(rule).into_any_element(),
        ViewNode::Container(container) => render_container(container).into_any_element(),
        ViewNode::Pressable(pressable) => render_pressable(pressable).into_any_element(),
        ViewNode::Stack(stack) => {
            let el = div().flex().gap(px(stack.spacing));
            let el = match stack.axis {
                Axis::Horizontal => el.flex_row().items_center(),
                Axis::Vertical => el.flex_col(),
            };
            el.children(stack.children.iter().map(render_node))
                .into_any_element()
        }
    }
}

fn render_text(text: &TextNode) -> Div {
    div()
        .text_color(rgba(text.color))
        .text_size(px(text.font_size))
        .font_weight(gpui::FontWeight(text.font_weight.0 as f32))
        .font_family(SharedString::from(text.font_family.clone()))
        .child(SharedString::from(text.content.clone()))
}

// GPUI has no built-in progress indicator; a ring in the tint color stands in.
fn render_spinner(spinner: &SpinnerNode) -> Div {
    let el = div()
        .flex_none()
        .w(px(spinner.size))
        .h(px(spinner.size))
        .rounded_full()
        .border_color(rgba(spinner.color));
    if spinner.stroke_width >= 2.0 {
        el.border_2()
    } else {
        el.border_1()
    }
}

fn render_rule(rule: &RuleNode) -> Div {
    div()
        .w_full()
        .h(px(rule.height))
        .flex()
        .items_center()
        .pl(px(rule.indent))
        .pr(px(rule.end_indent))
        .child(div().w_full().h(px(rule.thickness)).bg(rgba(rule.color)))
}

fn apply_padding(el: Div, insets: &EdgeInsets) -> Div {
    el.pt(px(insets.top))
        .pr(px(insets.right))
        .pb(px(insets.bottom))
        .pl(px(insets.left))
}

fn apply_margin(el: Div, insets: &EdgeInsets) -> Div {
    el.mt(px(insets.top))
        .mr(px(insets.right))
        .mb(px(insets.bottom))
        .ml(px(insets.left))
}

fn object_fit(fit: ImageFit) -> ObjectFit {
    match fit {
        ImageFit::Cover => ObjectFit::Cover,
        ImageFit::Contain => ObjectFit::Contain,
        ImageFit::Fill => ObjectFit::Fill,
    }
}

fn render_container(container: &ContainerNode) -> Div {
    let mut el = div().relative();

    if container.corner_radius > 0.0 {
        el = el.rounded(px(container.corner_radius));
    }
    if container.clip {
        el = el.overflow_hidden();
    }
    if container.fill_width {
        el = el.w_full();
    }
    if container.opacity < 1.0 {
        el = el.opacity(container.opacity);
    }
    if let Some(border) = container.border {
        el = el.border_color(rgba(border.color));
        el = if border.width >= 2.0 {
            el.border_2()
        } else {
            el.border_1()
        };
    }
    if let Some(shadow) = container.shadow {
        el = if shadow.blur <= 2.0 {
            el.shadow_sm()
        } else if shadow.blur <= 8.0 {
            el.shadow_md()
        } else {
            el.shadow_lg()
        };
    }

    el = apply_margin(el, &container.margin);
    el = apply_padding(el, &container.padding);

    match &container.background {
        Some(Background::Color { color }) => {
            el = el.bg(rgba(*color));
        }
        Some(Background::Image { source, fit }) => {
            let path = match source {
                ImageSource::Asset(path) | ImageSource::Url(path) => path.clone(),
            };
            // Image sits behind the content, filling the padded box
            el = el.child(
                img(SharedString::from(path))
                    .absolute()
                    .top_0()
                    .left_0()
                    .size_full()
                    .object_fit(object_fit(*fit)),
            );
        }
        None => {}
    }

    if let Some(child) = &container.child {
        el = el.child(render_node(child));
    }

    el
}

fn render_pressable(pressable: &PressableNode) -> Div {
    let mut el = div().child(render_node(&pressable.child));

    if pressable.clip_radius > 0.0 {
        el = el.rounded(px(pressable.clip_radius)).overflow_hidden();
    }

    if let Some(handler) = pressable.on_press.clone() {
        el = el.cursor_pointer();
        if pressable.feedback == PressFeedback::Ripple {
            el = el.hover(|style| style.opacity(0.9));
        }
        el = el.on_mouse_down(MouseButton::Left, move |_event, _window, _cx| {
            handler.call();
        });
    }

    el
}

pub type Builder = Box<dyn Fn(&RenderContext) -> ViewNode + 'static>;

/// Window content that re-renders the gallery at the current window width.
pub struct GalleryView {
    config: SharedConfig,
    build: Builder,
}

impl GalleryView {
    pub fn new(config: SharedConfig, build: Builder) -> Self {
        Self { config, build }
    }
}

impl Render for GalleryView {
    fn render(&mut self, window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self
            .config
            .read()
            .map(|cfg| Theme::from_config(&cfg))
            .unwrap_or_default();
        let bounds = window.viewport_size();
        let viewport = Viewport::new(f32::from(bounds.width), f32::from(bounds.height));
        log::debug!("Gallery render at {}x{}", viewport.width, viewport.height);

        let tree = (self.build)(&RenderContext::new(&theme, viewport));
        div()
            .size_full()
            .bg(rgba(theme.palette.background))
            .p(px(24.0))
            .child(render_node(&tree))
    }
}

/// Opens the gallery in a window and runs the GPUI event loop.
pub fn run(config: SharedConfig, viewport: Viewport, build: Builder) {
    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(viewport.width), px(viewport.height)), cx);
        let result = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |_window, cx| cx.new(|_cx| GalleryView::new(config, build)),
        );
        if let Err(e) = result {
            log::error!("Failed to open gallery window: {}", e);
            cx.quit();
        }
    });
}
