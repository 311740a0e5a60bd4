//! Styled button, card, and spacing components.
//!
//! Components read a shared [`components::Theme`] and produce a
//! toolkit-neutral [`components::ViewNode`] tree. Token overrides come from
//! `~/.config/kiln/tokens.toml` (see [`config`]).

pub mod components;
pub mod config;
pub mod gallery;
#[cfg(feature = "gpui")]
pub mod gpui_app;

pub use components::{Component, RenderContext, Theme, ViewNode, Viewport};
