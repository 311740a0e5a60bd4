//! Theme system: the shared color, size, and typography tables every component reads.

use serde::{Serialize, Serializer};

use crate::config::{parse_hex_color, Config};

/// RGBA color with components in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let (r, g, b, a) = parse_hex_color(hex)?;
        Some(Self::rgba(r, g, b, a))
    }

    /// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if byte(self.a) == 255 {
            format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        }
    }

    /// Returns the color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Resolved color palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub on_primary: Color,
    pub secondary: Color,
    pub danger: Color,
    pub success: Color,
    pub surface: Color,
    pub background: Color,
    pub text: Color,
    pub text_muted: Color,
    pub divider: Color,
    pub shadow: Color,
}

/// Resolved shared dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Sizes {
    /// Default card corner radius
    pub radius_large: f32,
    pub card_padding: f32,
    pub elevation: f32,
    pub spinner_size: f32,
    pub spinner_stroke: f32,
    pub divider_height: f32,
    pub divider_thickness: f32,
}

/// Typography scale levels based on 1.25 modular scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypographyScale {
    /// 0.75x - Captions, small labels
    Xs,
    /// 0.875x - Secondary text
    Sm,
    /// 1.0x - Body text
    Base,
    /// 1.125x - Emphasized
    Lg,
    /// 1.25x - Subheading (h4)
    Xl,
    /// 1.5x - Section heading (h3)
    Xl2,
    /// 1.875x - Major heading (h2)
    Xl3,
    /// 2.25x - Title (h1)
    Xl4,
}

impl TypographyScale {
    /// Returns the scale multiplier for this typography level.
    pub fn multiplier(self) -> f32 {
        match self {
            Self::Xs => 0.75,
            Self::Sm => 0.875,
            Self::Base => 1.0,
            Self::Lg => 1.125,
            Self::Xl => 1.25,
            Self::Xl2 => 1.5,
            Self::Xl3 => 1.875,
            Self::Xl4 => 2.25,
        }
    }

    /// Returns the scale for a heading level (1-6).
    pub fn from_heading_level(level: u8) -> Self {
        match level {
            1 => Self::Xl4,
            2 => Self::Xl3,
            3 => Self::Xl2,
            4 => Self::Xl,
            5 => Self::Lg,
            _ => Self::Base,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub font_family: String,
    /// Body text size
    pub font_size: f32,
}

impl Typography {
    /// Calculates font size for a typography scale level.
    pub fn size_for_scale(&self, scale: TypographyScale) -> f32 {
        self.font_size * scale.multiplier()
    }

    /// Returns font size for a heading level (1-6).
    pub fn heading_size(&self, level: u8) -> f32 {
        self.size_for_scale(TypographyScale::from_heading_level(level))
    }
}

/// Device class selected by viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenTier {
    Mobile,
    Tablet,
    Desktop,
}

/// Viewport widths above which the tablet and desktop tiers apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub tablet: f32,
    pub desktop: f32,
}

impl Breakpoints {
    /// Picks the tier for a viewport width.
    ///
    /// Comparisons are strict: a width equal to a breakpoint stays in the lower tier.
    pub fn tier(&self, width: f32) -> ScreenTier {
        if width > self.desktop {
            ScreenTier::Desktop
        } else if width > self.tablet {
            ScreenTier::Tablet
        } else {
            ScreenTier::Mobile
        }
    }
}

/// The full token set handed to components at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub sizes: Sizes,
    pub typography: Typography,
    pub breakpoints: Breakpoints,
}

impl Theme {
    /// Creates a Theme from config values.
    ///
    /// Colors that fail to parse fall back to the built-in palette entry.
    pub fn from_config(config: &Config) -> Self {
        let c = &config.colors;
        let d = crate::config::ColorsConfig::default();
        let color = |value: &str, fallback: &str| {
            Color::from_hex(value)
                .or_else(|| Color::from_hex(fallback))
                .unwrap_or(Color::BLACK)
        };

        let palette = Palette {
            primary: color(&c.primary, &d.primary),
            on_primary: color(&c.on_primary, &d.on_primary),
            secondary: color(&c.secondary, &d.secondary),
            danger: color(&c.danger, &d.danger),
            success: color(&c.success, &d.success),
            surface: color(&c.surface, &d.surface),
            background: color(&c.background, &d.background),
            text: color(&c.text, &d.text),
            text_muted: color(&c.text_muted, &d.text_muted),
            divider: color(&c.divider, &d.divider),
            shadow: color(&c.shadow, &d.shadow),
        };

        let s = &config.sizes;
        let sizes = Sizes {
            radius_large: s.radius_large,
            card_padding: s.card_padding,
            elevation: s.elevation,
            spinner_size: s.spinner_size,
            spinner_stroke: s.spinner_stroke,
            divider_height: s.divider_height,
            divider_thickness: s.divider_thickness,
        };

        Self {
            palette,
            sizes,
            typography: Typography {
                font_family: config.typography.font_family.clone(),
                font_size: config.typography.font_size,
            },
            breakpoints: Breakpoints {
                tablet: config.breakpoints.tablet,
                desktop: config.breakpoints.desktop,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_keeps_alpha() {
        let shadow = Color::from_hex("#0000001a").unwrap();
        assert_eq!(shadow.to_hex(), "#0000001a");
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn with_alpha_only_touches_alpha() {
        let c = Color::rgba(0.2, 0.4, 0.6, 1.0).with_alpha(0.5);
        assert_eq!(c, Color::rgba(0.2, 0.4, 0.6, 0.5));
    }

    #[test]
    fn default_theme_matches_default_config() {
        let theme = Theme::default();
        assert_eq!(theme.palette.primary.to_hex(), "#2563eb");
        assert_eq!(theme.palette.on_primary, Color::WHITE);
        assert_eq!(theme.sizes.radius_large, 12.0);
        assert_eq!(theme.breakpoints.tablet, 600.0);
        assert_eq!(theme.breakpoints.desktop, 1024.0);
    }

    #[test]
    fn unparsable_color_falls_back() {
        let mut config = Config::default();
        config.colors.surface = "nope".to_string();
        let theme = Theme::from_config(&config);
        assert_eq!(theme.palette.surface, Color::WHITE);
    }

    #[test]
    fn tier_boundaries_are_exclusive() {
        let bp = Breakpoints {
            tablet: 600.0,
            desktop: 1024.0,
        };
        assert_eq!(bp.tier(320.0), ScreenTier::Mobile);
        assert_eq!(bp.tier(600.0), ScreenTier::Mobile);
        assert_eq!(bp.tier(601.0), ScreenTier::Tablet);
        assert_eq!(bp.tier(1024.0), ScreenTier::Tablet);
        assert_eq!(bp.tier(1025.0), ScreenTier::Desktop);
    }

    #[test]
    fn heading_sizes_scale_from_body() {
        let typography = Theme::default().typography;
        assert_eq!(typography.heading_size(1), 14.0 * 2.25);
        assert_eq!(typography.heading_size(9), 14.0);
    }
}
