//! Demo gallery showing every component in its main states.

use crate::components::theme::TypographyScale;
use crate::components::{
    responsive_vertical, Axis, Button, ButtonTone, Card, Component, Divider, FontWeight, Gap,
    GapSize, ImageSource, RenderContext, Responsive, SizeVariant, StackNode, TextNode, ViewNode,
};

fn heading(ctx: &RenderContext, content: &str) -> ViewNode {
    let typography = &ctx.theme.typography;
    ViewNode::Text(TextNode {
        content: content.to_string(),
        color: ctx.theme.palette.text,
        font_size: typography.heading_size(4),
        font_weight: FontWeight::SEMIBOLD,
        font_family: typography.font_family.clone(),
    })
}

fn body(ctx: &RenderContext, content: &str) -> ViewNode {
    let typography = &ctx.theme.typography;
    ViewNode::Text(TextNode {
        content: content.to_string(),
        color: ctx.theme.palette.text_muted,
        font_size: typography.size_for_scale(TypographyScale::Sm),
        font_weight: FontWeight::NORMAL,
        font_family: typography.font_family.clone(),
    })
}

fn row(children: Vec<ViewNode>) -> ViewNode {
    ViewNode::Stack(StackNode {
        axis: Axis::Horizontal,
        spacing: GapSize::Small.pixels(),
        children,
    })
}

fn column(children: Vec<ViewNode>) -> ViewNode {
    ViewNode::Stack(StackNode {
        axis: Axis::Vertical,
        spacing: 0.0,
        children,
    })
}

fn buttons(ctx: &RenderContext) -> ViewNode {
    let sizes = SizeVariant::ALL.map(|size| {
        Button::new(format!("{:?}", size))
            .size(size)
            .on_press(move || log::info!("Pressed {:?} button", size))
            .render(ctx)
    });

    let states = [
        Button::secondary("Secondary").on_press(|| log::info!("Pressed secondary")),
        Button::outline("Outline").on_press(|| log::info!("Pressed outline")),
        Button::danger("Delete").on_press(|| log::info!("Pressed delete")),
        Button::new("Confirmed")
            .tone(ButtonTone::Success)
            .on_press(|| log::info!("Pressed confirm")),
        Button::new("Disabled")
            .enabled(false)
            .on_press(|| log::warn!("Disabled button fired")),
        Button::new("Saving").loading(true),
    ]
    .iter()
    .map(|b| b.render(ctx))
    .collect();

    column(vec![
        heading(ctx, "Buttons"),
        Gap::preset(Axis::Vertical, GapSize::Small).render(ctx),
        row(sizes.to_vec()),
        Gap::preset(Axis::Vertical, GapSize::Small).render(ctx),
        row(states),
    ])
}

fn cards(ctx: &RenderContext) -> ViewNode {
    let plain = Card::new().child(body(ctx, "A plain card is purely decorative."));
    let tappable = Card::new()
        .elevation(4.0)
        .child(body(ctx, "Tap me."))
        .on_tap(|| log::info!("Tapped card"));
    let image = Card::new()
        .background_image(ImageSource::Asset("assets/hero.png".to_string()))
        .child(Gap::vertical(96.0));

    column(vec![
        heading(ctx, "Cards"),
        Gap::preset(Axis::Vertical, GapSize::Small).render(ctx),
        row(vec![plain.render(ctx), tappable.render(ctx), image.render(ctx)]),
    ])
}

/// Builds the full gallery tree for the given context.
pub fn build(ctx: &RenderContext) -> ViewNode {
    let section_gap = Responsive::stepped(Axis::Vertical, GapSize::Large);

    column(vec![
        buttons(ctx),
        section_gap.render(ctx),
        Divider::new().render(ctx),
        responsive_vertical(ctx, 8.0, 16.0, 24.0),
        cards(ctx),
    ])
}
